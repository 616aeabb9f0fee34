use derive_more::Display;

use crate::domain::order_book::Side;

/// Crate-wide error type
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DepthChartError {
    #[display(fmt = "Invalid {} level #{}: {}", side, index, reason)]
    InvalidLevel { side: Side, index: usize, reason: String },
    #[display(fmt = "Surface Error: {}", _0)]
    Surface(String),
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(String),
}

impl std::error::Error for DepthChartError {}

impl From<serde_json::Error> for DepthChartError {
    fn from(err: serde_json::Error) -> Self {
        DepthChartError::Parse(err.to_string())
    }
}

pub type DepthResult<T> = Result<T, DepthChartError>;
