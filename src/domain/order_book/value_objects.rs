use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - Order book side
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum Side {
    /// Bids, ordered from the highest price outward
    #[strum(serialize = "buy")]
    #[serde(rename = "buy")]
    Buy,
    /// Asks, ordered from the lowest price outward
    #[strum(serialize = "sell")]
    #[serde(rename = "sell")]
    Sell,
}

impl Side {
    /// Horizontal growth direction away from the chart center.
    pub fn direction(self) -> f64 {
        match self {
            Side::Buy => -1.0,
            Side::Sell => 1.0,
        }
    }

    /// Whether `next` is further from the best price than `prev` on this side.
    pub fn is_outward(self, prev: &bigdecimal::BigDecimal, next: &bigdecimal::BigDecimal) -> bool {
        match self {
            Side::Buy => next < prev,
            Side::Sell => next > prev,
        }
    }
}

/// Value Object - One level as delivered by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLevel {
    pub price: String,
    pub quantity: String,
}

impl RawLevel {
    pub fn new(price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self { price: price.into(), quantity: quantity.into() }
    }
}

/// Value Object - A level annotated with its running volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: String,
    pub quantity: String,
    pub cumulative_quantity: String,
    pub cumulative_ratio: f64,
}
