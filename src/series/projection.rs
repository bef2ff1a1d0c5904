use serde::{Deserialize, Serialize};

use super::generator::PricePoint;

/// Chart-ready shape of a series: parallel axes plus `[timestamp, price]`
/// pairs for line plots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProjection {
    pub x_axis: Vec<i64>,
    pub y_axis: Vec<f64>,
    pub series: Vec<(i64, f64)>,
}

pub fn project(series: &[PricePoint]) -> ChartProjection {
    ChartProjection {
        x_axis: series.iter().map(|p| p.timestamp).collect(),
        y_axis: series.iter().map(|p| p.price).collect(),
        series: series.iter().map(|p| (p.timestamp, p.price)).collect(),
    }
}
