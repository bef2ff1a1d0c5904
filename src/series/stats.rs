use serde::{Deserialize, Serialize};

use super::generator::PricePoint;

/// Summary figures for the visible series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub start: f64,
    pub end: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// An empty series yields all-zero stats. A zero starting price yields a
/// zero `change_percent` rather than a non-finite value.
pub fn aggregate(series: &[PricePoint]) -> PriceStats {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return PriceStats::default(),
    };

    let start = first.price;
    let end = last.price;
    let (min, max) = series.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), p| (min.min(p.price), max.max(p.price)),
    );

    let change = end - start;
    let change_percent = if start == 0.0 {
        0.0
    } else {
        change / start * 100.0
    };

    PriceStats {
        min,
        max,
        start,
        end,
        change,
        change_percent,
    }
}
