use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Values must be finite and non-negative.
    #[error("invalid value: {value} (must be finite and >= 0)")]
    InvalidValue { value: f64 },

    /// Pie layout over a history whose values sum to zero.
    #[error("degenerate total: {count} values sum to zero")]
    DegenerateTotal { count: usize },

    #[error("surface error: {0}")]
    Surface(String),
}
