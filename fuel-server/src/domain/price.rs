//! Price display formatting.
//!
//! FuelCheck prices are cents per litre as floats (e.g. `189.9`).

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

const DOLLAR_PLACES: u32 = 4;

/// Unit used to render prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    #[default]
    Cents,
    Dollars,
}

/// Render a per-litre price given in cents.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::{PriceUnit, format_price};
///
/// assert_eq!(format_price(189.9, PriceUnit::Cents), "189.90c");
/// assert_eq!(format_price(189.9, PriceUnit::Dollars), "$1.8990");
/// ```
pub fn format_price(cents: f64, unit: PriceUnit) -> String {
    match unit {
        PriceUnit::Cents => format_cents(cents),
        PriceUnit::Dollars => format_dollars(cents_to_dollars(cents)),
    }
}

/// Render the cost of filling a tank of `litres` at a per-litre price in
/// cents.
pub fn format_tank_price(cents_per_litre: f64, litres: f64, unit: PriceUnit) -> String {
    let dollars = match (cents_to_dollars(cents_per_litre), Decimal::from_f64(litres)) {
        (Some(per_litre), Some(litres)) => Some(per_litre * litres),
        _ => None,
    };

    match unit {
        PriceUnit::Cents => format_cents(cents_per_litre * litres),
        PriceUnit::Dollars => format_dollars(dollars),
    }
}

fn format_cents(cents: f64) -> String {
    format!("{cents:.2}c")
}

fn cents_to_dollars(cents: f64) -> Option<Decimal> {
    Decimal::from_f64(cents).map(|c| c / Decimal::ONE_HUNDRED)
}

/// Truncate toward zero at four places; non-finite amounts render as-is.
fn format_dollars(dollars: Option<Decimal>) -> String {
    match dollars {
        Some(d) => {
            let truncated = d.round_dp_with_strategy(DOLLAR_PLACES, RoundingStrategy::ToZero);
            format!("${truncated:.4}")
        }
        None => "$NaN".to_string(),
    }
}
