//! Errors raised by value construction and access.

/// Result of a fallible value operation.
pub type ValueResult<T> = Result<T, ValueError>;

/// Typed failure for value operations.
///
/// Every variant carries the offending name in its text form so the caller
/// can report it without holding on to the value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Struct lookup or `assoc` on a field the descriptor does not declare.
    #[error("no such field: {field}")]
    NoSuchField { field: String },

    /// A descriptor was given the same field name twice.
    #[error("duplicate field name: {name}")]
    DuplicateField { name: String },

    /// Struct construction with the wrong number of values.
    #[error("struct needs {expected} values, got {got}")]
    FieldCountMismatch { expected: usize, got: usize },

    /// Map lookup on an absent key.
    #[error("no such key: {key}")]
    NoSuchKey { key: String },

    /// Indexing a value that has no fields or keys.
    #[error("cannot index {type_name}")]
    NotIndexable { type_name: &'static str },
}
