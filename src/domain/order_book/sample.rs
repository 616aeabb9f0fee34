//! Demo order book: 15 bid and 15 ask levels around 95,550.
//!
//! Total buy volume is 10.0, total sell volume 8.0, combined 18.0.

use super::{DepthBook, RawLevel};
use crate::domain::errors::DepthResult;

const BUY_QUANTITIES: [&str; 15] = [
    "0.2", "0.3", "0.4", "0.6", "0.8", "1.1", "0.9", "1.3", "0.7", "1.0", "0.8", "0.6", "0.5", "0.4", "0.4",
];

const SELL_QUANTITIES: [&str; 15] = [
    "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.8", "0.7", "0.9", "0.8", "0.7", "0.6", "0.7", "0.4", "0.3",
];

const BEST_BID: u32 = 95_500;
const BEST_ASK: u32 = 95_600;
const TICK: u32 = 100;

pub fn sample_buy_levels() -> Vec<RawLevel> {
    BUY_QUANTITIES
        .iter()
        .zip(0u32..)
        .map(|(qty, i)| RawLevel::new((BEST_BID - i * TICK).to_string(), *qty))
        .collect()
}

pub fn sample_sell_levels() -> Vec<RawLevel> {
    SELL_QUANTITIES
        .iter()
        .zip(0u32..)
        .map(|(qty, i)| RawLevel::new((BEST_ASK + i * TICK).to_string(), *qty))
        .collect()
}

pub fn sample_book() -> DepthResult<DepthBook> {
    DepthBook::from_raw(&sample_buy_levels(), &sample_sell_levels())
}
