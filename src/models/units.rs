//! Unit conversion for dual-unit measurement pairs.
//!
//! The admin form fills in both sides of a pair as the editor types; these
//! are the same conversions, used server-side to derive a side the client
//! left empty. Values are formatted to two decimals, rounding up whole when
//! the fractional part reaches 0.95 (so 20.06" becomes a clean 51.00 cm
//! rather than 50.95).

use super::crt::Measurement;

const CM_PER_INCH: f64 = 2.54;
const KG_PER_LB: f64 = 0.453592;

/// Kind of quantity a `Measurement` holds, selecting the conversion factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Weight,
}

fn format_converted(converted: f64) -> String {
    let fractional = converted - converted.floor();
    if fractional >= 0.95 {
        format!("{:.2}", converted.ceil())
    } else {
        format!("{:.2}", converted)
    }
}

fn convert(value: &str, factor: f64, to_metric: bool) -> Option<String> {
    let num: f64 = value.trim().parse().ok()?;
    let converted = if to_metric { num * factor } else { num / factor };
    Some(format_converted(converted))
}

pub fn inches_to_cm(value: &str) -> Option<String> {
    convert(value, CM_PER_INCH, true)
}

pub fn cm_to_inches(value: &str) -> Option<String> {
    convert(value, CM_PER_INCH, false)
}

pub fn lbs_to_kg(value: &str) -> Option<String> {
    convert(value, KG_PER_LB, true)
}

pub fn kg_to_lbs(value: &str) -> Option<String> {
    convert(value, KG_PER_LB, false)
}

/// Derive the missing side of a dual-unit pair in place.
///
/// Pairs with both sides present are left untouched, even when the two
/// values disagree: the client owns values it submitted.
pub fn fill_pair(pair: &mut Measurement, quantity: Quantity) {
    match (&pair.imperial, &pair.metric) {
        (Some(imperial), None) => {
            pair.metric = match quantity {
                Quantity::Length => inches_to_cm(imperial),
                Quantity::Weight => lbs_to_kg(imperial),
            };
        }
        (None, Some(metric)) => {
            pair.imperial = match quantity {
                Quantity::Length => cm_to_inches(metric),
                Quantity::Weight => kg_to_lbs(metric),
            };
        }
        _ => {}
    }
}
