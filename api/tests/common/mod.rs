//! Shared fixture for HTTP tests: the real app factory over in-memory stores

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use tm_api::{AppState, CatalogRepositories, Config};
use tm_core::domain::entities::catalog::{Cart, CartDetail, Category, Product, Venture};
use tm_core::domain::entities::note::{NewNote, Note};
use tm_core::domain::entities::user::{NewUser, Role, User};
use tm_core::repositories::{
    MockCatalogRepository, MockNoteRepository, MockUserRepository, NoteRepository, UserRepository,
};
use tm_core::services::PasswordHasher;

pub const PASSWORD: &str = "secret123";
pub const JWT_SECRET: &str = "http-tests-secret";

pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub notes: Arc<MockNoteRepository>,
    pub state: web::Data<AppState>,
    pub catalog: CatalogRepositories,
    pub config: Config,
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt.secret = JWT_SECRET.to_string();
    config.auth.bcrypt_cost = 4;
    config
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: Config) -> Self {
        let users = Arc::new(MockUserRepository::new());
        let notes = Arc::new(MockNoteRepository::new());
        let state = web::Data::new(AppState::new(users.clone(), notes.clone(), &config));

        Self {
            users,
            notes,
            state,
            catalog: sample_catalog(),
            config,
        }
    }

    pub async fn seed_user(&self, username: &str, role: Role) -> User {
        let hash = PasswordHasher::new(4).hash(PASSWORD).unwrap();
        self.users
            .create(NewUser::new(username, format!("{}@club.com", username), hash).with_role(role))
            .await
            .unwrap()
    }

    /// Store a user under a fixed id
    pub async fn seed_user_with_id(&self, id: i64, username: &str, role: Role) -> User {
        let hash = PasswordHasher::new(4).hash(PASSWORD).unwrap();
        let user = NewUser::new(username, format!("{}@club.com", username), hash)
            .with_role(role)
            .into_user(id);
        self.users.insert(user.clone()).await;
        user
    }

    pub async fn seed_note(&self, owner: &User, title: &str) -> Note {
        self.notes
            .create(NewNote {
                title: title.to_string(),
                content: format!("{} content", title),
                user_id: owner.id,
            })
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state.token_service.issue_access_token(user).unwrap().token
    }

    pub fn bearer(&self, user: &User) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token_for(user)))
    }
}

fn sample_catalog() -> CatalogRepositories {
    CatalogRepositories {
        categories: Arc::new(MockCatalogRepository::with_records(vec![
            Category {
                id: 2,
                name: "Strings".to_string(),
                description: None,
            },
            Category {
                id: 1,
                name: "Rackets".to_string(),
                description: Some("Adult and junior rackets".to_string()),
            },
        ])),
        products: Arc::new(MockCatalogRepository::with_records(vec![Product {
            id: 10,
            name: "Pro Staff 97".to_string(),
            description: None,
            price: 249.99,
            stock: 4,
            discount: Some(10.0),
            main_image: None,
            additional_images: None,
            times_saved_to_cart: 12,
            category_id: Some(1),
        }])),
        ventures: Arc::new(MockCatalogRepository::<Venture>::new()),
        carts: Arc::new(MockCatalogRepository::with_records(vec![Cart {
            id: 3,
            subtotal: 249.99,
            total: 224.99,
            owner_id: Some(1),
        }])),
        cart_details: Arc::new(MockCatalogRepository::with_records(vec![CartDetail {
            id: 5,
            quantity: 1,
            unit_price: 249.99,
            subtotal: 249.99,
            cart_id: 3,
            product_id: 10,
        }])),
    }
}

/// Build the app under test from a [`TestContext`]
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(tm_api::create_app(
            $ctx.state.clone(),
            $ctx.catalog.clone(),
            &$ctx.config.cors,
            $ctx.config.server.max_payload_size,
        ))
        .await
    };
}
