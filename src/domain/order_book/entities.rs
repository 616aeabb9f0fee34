use super::value_objects::{PriceLevel, RawLevel, Side};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::services::compute_ratios;
use crate::domain::{errors::DepthResult, number_format::parse_decimal};

/// Domain entity - Ratio-annotated order book snapshot.
///
/// Immutable input to the rendering engine: a render pass only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepthBook {
    buys: Vec<PriceLevel>,
    sells: Vec<PriceLevel>,
}

impl DepthBook {
    /// Build from raw `{price, quantity}` levels, best price first on each side.
    pub fn from_raw(buys: &[RawLevel], sells: &[RawLevel]) -> DepthResult<Self> {
        let (buys, sells) = compute_ratios(buys, sells)?;
        Ok(Self { buys, sells })
    }

    /// Wrap levels that already carry their cumulative ratio.
    pub fn from_levels(buys: Vec<PriceLevel>, sells: Vec<PriceLevel>) -> Self {
        Self { buys, sells }
    }

    /// Parse the two JSON arrays delivered by a host page.
    pub fn from_json(buys_json: &str, sells_json: &str) -> DepthResult<Self> {
        let buys: Vec<RawLevel> = serde_json::from_str(buys_json)?;
        let sells: Vec<RawLevel> = serde_json::from_str(sells_json)?;
        Self::from_raw(&buys, &sells)
    }

    pub fn levels(&self, side: Side) -> &[PriceLevel] {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }

    pub fn level(&self, side: Side, index: usize) -> Option<&PriceLevel> {
        self.levels(side).get(index)
    }

    pub fn buys(&self) -> &[PriceLevel] {
        &self.buys
    }

    pub fn sells(&self) -> &[PriceLevel] {
        &self.sells
    }

    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.buys.first()
    }

    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.sells.first()
    }

    /// Midpoint between best bid and best ask
    pub fn mid_price(&self) -> Option<BigDecimal> {
        let bid = parse_decimal(&self.best_bid()?.price)?;
        let ask = parse_decimal(&self.best_ask()?.price)?;
        Some((bid + ask) / BigDecimal::from(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_price_needs_both_sides() {
        let book = DepthBook::from_raw(&[RawLevel::new("100", "1")], &[]).unwrap();
        assert!(book.mid_price().is_none());

        let book = DepthBook::from_raw(&[RawLevel::new("100", "1")], &[RawLevel::new("101", "2")]).unwrap();
        assert_eq!(book.mid_price(), Some(BigDecimal::from(201) / BigDecimal::from(2)));
    }

    #[test]
    fn from_json_reads_input_contract() {
        let book = DepthBook::from_json(
            r#"[{"price":"95500","quantity":"0.2"}]"#,
            r#"[{"price":"95600","quantity":"0.1"},{"price":"95700","quantity":"0.2"}]"#,
        )
        .unwrap();
        assert_eq!(book.buys().len(), 1);
        assert_eq!(book.level(Side::Sell, 1).map(|l| l.cumulative_quantity.as_str()), Some("0.3"));
        assert!(DepthBook::from_json("not json", "[]").is_err());
    }
}
