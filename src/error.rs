//! Error types for the layout engine.
//!
//! Only out-of-contract input is an error. Empty input, equal
//! weights and exhausted placement budgets all produce a layout.

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Weight is negative, NaN or infinite.
    #[error("keyword {index} ({text:?}) has invalid value {value}")]
    InvalidValue {
        index: usize,
        text: String,
        value: f64,
    },

    #[error("container size {width}x{height} must be finite and positive")]
    InvalidContainer { width: f64, height: f64 },

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}
