//! Error types

/// Errors raised while validating a column set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// Two visible columns point at the same field.
    #[error("Field '{field}' is used by more than one visible column")]
    DuplicateField { field: String },

    /// A column has no field name.
    #[error("Column at index {index} has an empty field")]
    EmptyField { index: usize },
}

/// Error returned when a format spec string is parsed strictly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatSpecError {
    #[error("Format spec is empty")]
    Empty,

    #[error("Unknown format spec '{0}'")]
    Unknown(String),
}

/// Error decoding the event target carried by a rendered element.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("Element '{0}' carries no event target")]
    Missing(String),

    #[error("Malformed event target: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Umbrella error for the public grid API.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error(transparent)]
    Column(#[from] ColumnError),

    #[error(transparent)]
    FormatSpec(#[from] FormatSpecError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error("Invalid grid config: {0}")]
    Config(#[from] serde_json::Error),
}
