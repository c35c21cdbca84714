//! Stored records and the values derived from them

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
