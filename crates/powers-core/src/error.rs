use thiserror::Error;

/// Errors raised by the core crate.
///
/// None of these occur while handling gestures: indices are always produced by
/// modular arithmetic. They surface when validating static data or
/// configuration, and when parsing colors supplied from outside the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
    #[error("{table} table has {actual} entries, expected {expected}")]
    TableLength {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{table} table has an empty entry at index {index}")]
    EmptyEntry { table: &'static str, index: usize },
    #[error("home layer {0:?} is not in the catalog")]
    MissingHomeLayer(&'static str),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
