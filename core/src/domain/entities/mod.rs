//! Domain entities representing core business objects.

pub mod catalog;
pub mod note;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use catalog::{Cart, CartDetail, CatalogEntity, Category, Product, Venture};
pub use note::{NewNote, Note};
pub use token::{Claims, IssuedToken, ACCESS_TOKEN_TTL_SECONDS};
pub use user::{Gender, NewUser, Role, User, UserProfile};
