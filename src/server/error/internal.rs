use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value no variant matches.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse stored {kind} value '{value}'")]
    ParseStoredEnum {
        /// Name of the enum being parsed
        kind: &'static str,
        /// The stored value that failed to parse
        value: String,
    },
}
