use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum stored as text in the database.
///
/// # Arguments
/// - `kind` - Human-readable name of the enum, used in the error
/// - `value` - The stored column value
/// - `parse` - Name-to-variant mapping for the enum
///
/// # Returns
/// - `Ok(T)` - Successfully parsed variant
/// - `Err(AppError::InternalErr(ParseStoredEnum))` - No variant matches the stored value
pub fn parse_stored_enum<T>(
    kind: &'static str,
    value: String,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, AppError> {
    match parse(&value) {
        Some(parsed) => Ok(parsed),
        None => Err(InternalError::ParseStoredEnum { kind, value }.into()),
    }
}
