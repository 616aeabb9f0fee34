use bigdecimal::BigDecimal;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::domain::{
    errors::{DepthChartError, DepthResult},
    logging::{LogComponent, get_logger},
    number_format::parse_decimal,
    order_book::{PriceLevel, RawLevel, Side},
};

/// Running totals for one side, best price first.
fn accumulate(side: Side, levels: &[RawLevel]) -> DepthResult<Vec<BigDecimal>> {
    let mut running = BigDecimal::zero();
    let mut previous_price: Option<BigDecimal> = None;
    let mut out_of_order = 0usize;
    let mut totals = Vec::with_capacity(levels.len());

    for (index, level) in levels.iter().enumerate() {
        let price = parse_decimal(&level.price).ok_or_else(|| DepthChartError::InvalidLevel {
            side,
            index,
            reason: format!("price '{}' is not a decimal in range", level.price),
        })?;
        let quantity = parse_decimal(&level.quantity).ok_or_else(|| DepthChartError::InvalidLevel {
            side,
            index,
            reason: format!("quantity '{}' is not a decimal in range", level.quantity),
        })?;
        if quantity.is_negative() {
            return Err(DepthChartError::InvalidLevel {
                side,
                index,
                reason: format!("quantity '{}' is negative", level.quantity),
            });
        }

        if let Some(prev) = &previous_price {
            if !side.is_outward(prev, &price) {
                out_of_order += 1;
            }
        }
        previous_price = Some(price);

        running = &running + &quantity;
        totals.push(running.clone());
    }

    // Mis-ordered input is drawn as given.
    if out_of_order > 0 {
        get_logger().warn(
            LogComponent::Domain("OrderBook"),
            &format!("{} {} level(s) are not ordered outward from the best price", out_of_order, side),
        );
    }

    Ok(totals)
}

fn annotate(levels: &[RawLevel], totals: &[BigDecimal], combined: f64) -> Vec<PriceLevel> {
    levels
        .iter()
        .zip(totals)
        .map(|(level, cumulative)| {
            let cumulative_ratio = if combined > 0.0 {
                cumulative.to_f64().map(|value| value / combined).unwrap_or(0.0)
            } else {
                0.0
            };
            PriceLevel {
                price: level.price.clone(),
                quantity: level.quantity.clone(),
                cumulative_quantity: cumulative.to_plain_string(),
                cumulative_ratio,
            }
        })
        .collect()
}

/// Annotate both sides with cumulative quantity and cumulative ratio.
///
/// The ratio denominator is the deepest cumulative quantity of the buy side
/// plus that of the sell side. A zero combined volume yields ratio 0 for every
/// level instead of dividing by zero.
pub fn compute_ratios(buys: &[RawLevel], sells: &[RawLevel]) -> DepthResult<(Vec<PriceLevel>, Vec<PriceLevel>)> {
    let buy_totals = accumulate(Side::Buy, buys)?;
    let sell_totals = accumulate(Side::Sell, sells)?;

    let deepest = |totals: &[BigDecimal]| totals.last().cloned().unwrap_or_else(BigDecimal::zero);
    let combined = deepest(&buy_totals) + deepest(&sell_totals);
    let combined = if combined.is_zero() { 0.0 } else { combined.to_f64().unwrap_or(0.0) };

    if combined == 0.0 && !(buys.is_empty() && sells.is_empty()) {
        get_logger().debug(LogComponent::Domain("OrderBook"), "Combined volume is zero, all ratios set to 0");
    }

    Ok((annotate(buys, &buy_totals, combined), annotate(sells, &sell_totals, combined)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(rows: &[(&str, &str)]) -> Vec<RawLevel> {
        rows.iter().map(|(p, q)| RawLevel::new(*p, *q)).collect()
    }

    #[test]
    fn cumulative_quantity_is_exact_decimal() {
        let buys = levels(&[("100", "0.2"), ("99", "0.3"), ("98", "0.4")]);
        let (buy, sell) = compute_ratios(&buys, &[]).unwrap();
        let totals: Vec<&str> = buy.iter().map(|l| l.cumulative_quantity.as_str()).collect();
        assert_eq!(totals, vec!["0.2", "0.5", "0.9"]);
        assert!(sell.is_empty());
        assert!((buy[2].cumulative_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_volume_yields_zero_ratio() {
        let buys = levels(&[("100", "0"), ("99", "0")]);
        let sells = levels(&[("101", "0")]);
        let (buy, sell) = compute_ratios(&buys, &sells).unwrap();
        assert!(buy.iter().chain(sell.iter()).all(|l| l.cumulative_ratio == 0.0));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let sells = levels(&[("101", "1"), ("102", "-0.5")]);
        let err = compute_ratios(&[], &sells).unwrap_err();
        assert_eq!(
            err,
            DepthChartError::InvalidLevel { side: Side::Sell, index: 1, reason: "quantity '-0.5' is negative".into() }
        );
    }

    #[test]
    fn exponent_quantity_with_huge_scale_is_rejected() {
        let buys = levels(&[("100", "0.1"), ("99", "1e-2000000")]);
        assert_eq!(
            compute_ratios(&buys, &[]).unwrap_err(),
            DepthChartError::InvalidLevel {
                side: Side::Buy,
                index: 1,
                reason: "quantity '1e-2000000' is not a decimal in range".into()
            }
        );
    }

    #[test]
    fn unparseable_price_is_rejected() {
        let buys = levels(&[("abc", "1")]);
        assert!(matches!(
            compute_ratios(&buys, &[]),
            Err(DepthChartError::InvalidLevel { side: Side::Buy, index: 0, .. })
        ));
    }
}
