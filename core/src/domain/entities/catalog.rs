//! Read-only catalog records exposed by the public API.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Common surface of every catalog record
pub trait CatalogEntity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Singular name used in messages, e.g. "Category"
    const RESOURCE: &'static str;
    /// Plural name used in list messages, e.g. "categories"
    const COLLECTION: &'static str;

    fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Units available
    pub stock: i32,
    pub discount: Option<f64>,
    pub main_image: Option<String>,
    pub additional_images: Option<String>,
    pub times_saved_to_cart: i32,
    pub category_id: Option<i64>,
}

/// A small business run by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venture {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub owner_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    pub subtotal: f64,
    pub total: f64,
    pub owner_id: Option<i64>,
}

/// One product line of a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDetail {
    pub id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
    pub cart_id: i64,
    pub product_id: i64,
}

macro_rules! catalog_entity {
    ($ty:ty, $resource:literal, $collection:literal) => {
        impl CatalogEntity for $ty {
            const RESOURCE: &'static str = $resource;
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> i64 {
                self.id
            }
        }
    };
}

catalog_entity!(Category, "Category", "categories");
catalog_entity!(Product, "Product", "products");
catalog_entity!(Venture, "Venture", "ventures");
catalog_entity!(Cart, "Cart", "carts");
catalog_entity!(CartDetail, "Cart detail", "cart details");
