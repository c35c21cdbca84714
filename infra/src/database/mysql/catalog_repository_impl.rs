//! Generic MySQL reader for the catalog tables.
//!
//! Each catalog entity describes its table through [`CatalogTable`]; a single
//! [`MySqlCatalogRepository`] then serves all of them. Money columns are
//! stored as DECIMAL and cast to DOUBLE on the way out.

use async_trait::async_trait;
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use tm_core::domain::entities::catalog::{Cart, CartDetail, CatalogEntity, Category, Product, Venture};
use tm_core::errors::DomainError;
use tm_core::repositories::CatalogRepository;

use super::query_error;

/// Table layout of a catalog entity
pub trait CatalogTable: CatalogEntity {
    const TABLE: &'static str;

    /// Select list producing the columns `from_row` reads
    const COLUMNS: &'static str;

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error>;
}

impl CatalogTable for Category {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = "id, name, description";

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
        })
    }
}

impl CatalogTable for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static str = "id, name, description, CAST(price AS DOUBLE) AS price, stock, \
         CAST(discount AS DOUBLE) AS discount, main_image, additional_images, \
         times_saved_to_cart, category_id";

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            stock: row.try_get("stock")?,
            discount: row.try_get("discount")?,
            main_image: row.try_get("main_image")?,
            additional_images: row.try_get("additional_images")?,
            times_saved_to_cart: row.try_get("times_saved_to_cart")?,
            category_id: row.try_get("category_id")?,
        })
    }
}

impl CatalogTable for Venture {
    const TABLE: &'static str = "ventures";
    const COLUMNS: &'static str = "id, name, description, location, phone, owner_id";

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            location: row.try_get("location")?,
            phone: row.try_get("phone")?,
            owner_id: row.try_get("owner_id")?,
        })
    }
}

impl CatalogTable for Cart {
    const TABLE: &'static str = "carts";
    const COLUMNS: &'static str =
        "id, CAST(subtotal AS DOUBLE) AS subtotal, CAST(total AS DOUBLE) AS total, owner_id";

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            subtotal: row.try_get("subtotal")?,
            total: row.try_get("total")?,
            owner_id: row.try_get("owner_id")?,
        })
    }
}

impl CatalogTable for CartDetail {
    const TABLE: &'static str = "cart_details";
    const COLUMNS: &'static str = "id, quantity, CAST(unit_price AS DOUBLE) AS unit_price, \
         CAST(subtotal AS DOUBLE) AS subtotal, cart_id, product_id";

    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            quantity: row.try_get("quantity")?,
            unit_price: row.try_get("unit_price")?,
            subtotal: row.try_get("subtotal")?,
            cart_id: row.try_get("cart_id")?,
            product_id: row.try_get("product_id")?,
        })
    }
}

/// Read-only access to any [`CatalogTable`]
#[derive(Clone)]
pub struct MySqlCatalogRepository {
    pool: MySqlPool,
}

impl MySqlCatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<T: CatalogTable> CatalogRepository<T> for MySqlCatalogRepository {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let query = format!("SELECT {} FROM {} ORDER BY id", T::COLUMNS, T::TABLE);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(&format!("Failed to list {}", T::COLLECTION), e))?;

        rows.iter()
            .map(|row| T::from_row(row).map_err(|e| query_error(T::RESOURCE, e)))
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DomainError> {
        let query = format!("SELECT {} FROM {} WHERE id = ? LIMIT 1", T::COLUMNS, T::TABLE);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(&format!("Failed to load {}", T::RESOURCE), e))?;

        row.as_ref()
            .map(|row| T::from_row(row).map_err(|e| query_error(T::RESOURCE, e)))
            .transpose()
    }
}
