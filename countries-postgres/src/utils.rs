use countries_api::ApiError;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| {
            format!("Value for column '{col_name}' is too long (max {N} chars)").into()
        })
}

/// Escapes `%`, `_` and `\` so user input matches literally inside a LIKE pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `%term%` with the term escaped, for substring matching with ILIKE.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// True when the error is a Postgres unique constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &(dyn Error + Send + Sync + 'static)) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

/// Maps a repository error to the API error space.
pub fn database_error(err: Box<dyn Error + Send + Sync>) -> ApiError {
    ApiError::DatabaseError(err.to_string())
}

/// Like [`database_error`], but a unique violation becomes a conflict.
pub fn conflict_or_database_error(
    err: Box<dyn Error + Send + Sync>,
    conflict: impl FnOnce() -> String,
) -> ApiError {
    if is_unique_violation(err.as_ref()) {
        ApiError::Conflict(conflict())
    } else {
        database_error(err)
    }
}
