//! Repository interfaces with in-memory implementations.
//!
//! Relational implementations live in the infrastructure crate.

pub mod catalog;
pub mod note;
pub mod user;

pub use catalog::{CatalogRepository, MockCatalogRepository};
pub use note::{MockNoteRepository, NoteRepository};
pub use user::{MockUserRepository, UserRepository};
