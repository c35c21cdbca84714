//! MySQL implementations of the core repository traits

mod catalog_repository_impl;
mod note_repository_impl;
mod user_repository_impl;

pub use catalog_repository_impl::{CatalogTable, MySqlCatalogRepository};
pub use note_repository_impl::MySqlNoteRepository;
pub use user_repository_impl::MySqlUserRepository;

use tm_core::errors::{DomainError, ValidationError};

/// Wrap a failed read into an internal error
pub(crate) fn query_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, error);
    DomainError::internal(format!("{}: {}", context, error))
}

/// Like [`query_error`], but unique-key violations become duplicate-value
/// validation errors naming the offending column
pub(crate) fn write_error(context: &str, error: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            let field = duplicate_field(db_error.message());
            tracing::debug!("{}: duplicate {}", context, field);
            return ValidationError::DuplicateValue {
                field: field.to_string(),
            }
            .into();
        }
    }
    query_error(context, error)
}

/// Column named by a MySQL "Duplicate entry ... for key ..." message
fn duplicate_field(message: &str) -> &'static str {
    let key = message.rsplit("for key").next().unwrap_or_default();
    if key.contains("email") {
        "Email"
    } else {
        "Username"
    }
}

/// Escape LIKE wildcards so user input matches literally
pub(crate) fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped.to_lowercase())
}
