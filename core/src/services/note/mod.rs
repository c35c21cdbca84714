//! Note service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{NoteChanges, NoteService};
