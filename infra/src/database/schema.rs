//! Table definitions created at start-up when missing

/// Statements run in order; each one is idempotent
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        username VARCHAR(80) NOT NULL,
        email VARCHAR(120) NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        name VARCHAR(100) NULL,
        last_name VARCHAR(100) NULL,
        phone VARCHAR(20) NULL,
        address VARCHAR(200) NULL,
        gender VARCHAR(20) NULL,
        role VARCHAR(20) NOT NULL DEFAULT 'client',
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        updated_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        last_login_at DATETIME(6) NULL,
        UNIQUE KEY username (username),
        UNIQUE KEY email (email),
        KEY idx_users_role (role)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS notes (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        content TEXT NOT NULL,
        user_id BIGINT NOT NULL,
        created_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        updated_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        KEY idx_notes_user (user_id),
        CONSTRAINT fk_notes_user FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description TEXT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(150) NOT NULL,
        description TEXT NULL,
        price DECIMAL(10, 2) NOT NULL DEFAULT 0,
        stock INT NOT NULL DEFAULT 0,
        discount DECIMAL(5, 2) NULL,
        main_image VARCHAR(255) NULL,
        additional_images TEXT NULL,
        times_saved_to_cart INT NOT NULL DEFAULT 0,
        category_id BIGINT NULL,
        CONSTRAINT fk_products_category FOREIGN KEY (category_id) REFERENCES categories (id) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ventures (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(150) NOT NULL,
        description TEXT NULL,
        location VARCHAR(200) NULL,
        phone VARCHAR(20) NULL,
        owner_id BIGINT NULL,
        CONSTRAINT fk_ventures_owner FOREIGN KEY (owner_id) REFERENCES users (id) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS carts (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        subtotal DECIMAL(10, 2) NOT NULL DEFAULT 0,
        total DECIMAL(10, 2) NOT NULL DEFAULT 0,
        owner_id BIGINT NULL,
        CONSTRAINT fk_carts_owner FOREIGN KEY (owner_id) REFERENCES users (id) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cart_details (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        quantity INT NOT NULL DEFAULT 1,
        unit_price DECIMAL(10, 2) NOT NULL DEFAULT 0,
        subtotal DECIMAL(10, 2) NOT NULL DEFAULT 0,
        cart_id BIGINT NOT NULL,
        product_id BIGINT NOT NULL,
        CONSTRAINT fk_details_cart FOREIGN KEY (cart_id) REFERENCES carts (id) ON DELETE CASCADE,
        CONSTRAINT fk_details_product FOREIGN KEY (product_id) REFERENCES products (id)
    )
    "#,
];
