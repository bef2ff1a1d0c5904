use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::generator::{generate_live_window, PricePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum PeriodSelector {
    #[serde(rename = "LIVE")]
    Live,
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[default]
    #[serde(rename = "ALL")]
    All,
}

impl PeriodSelector {
    pub const VALUES: [PeriodSelector; 5] = [
        PeriodSelector::Live,
        PeriodSelector::OneDay,
        PeriodSelector::OneWeek,
        PeriodSelector::OneMonth,
        PeriodSelector::All,
    ];

    /// Look-back window for the tail-slicing periods.
    pub fn window(&self) -> Option<Duration> {
        match self {
            PeriodSelector::OneDay => Some(Duration::hours(24)),
            PeriodSelector::OneWeek => Some(Duration::days(7)),
            PeriodSelector::OneMonth => Some(Duration::days(30)),
            PeriodSelector::Live | PeriodSelector::All => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodSelector::Live => "LIVE",
            PeriodSelector::OneDay => "1D",
            PeriodSelector::OneWeek => "1W",
            PeriodSelector::OneMonth => "1M",
            PeriodSelector::All => "ALL",
        }
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Unknown tags fall back to ALL.
impl From<&str> for PeriodSelector {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "LIVE" => PeriodSelector::Live,
            "1D" => PeriodSelector::OneDay,
            "1W" => PeriodSelector::OneWeek,
            "1M" => PeriodSelector::OneMonth,
            _ => PeriodSelector::All,
        }
    }
}

impl From<String> for PeriodSelector {
    fn from(value: String) -> Self {
        PeriodSelector::from(value.as_str())
    }
}

/// Derives the visible subsequence of `full` for `selector`.
///
/// `LIVE` ignores `full` and draws a fresh live window around `live_base`
/// on every call. The windowed periods return the contiguous tail whose
/// timestamps are at or after `now - window`.
pub fn filter<R>(
    full: &[PricePoint],
    selector: PeriodSelector,
    live_base: f64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<PricePoint>
where
    R: Rng + ?Sized,
{
    if selector == PeriodSelector::Live {
        return generate_live_window(live_base, now, rng);
    }

    match selector.window() {
        Some(window) => tail_since(full, now - window).to_vec(),
        None => full.to_vec(),
    }
}

/// Samples at or after `since`; `series` must be chronologically ordered.
pub fn tail_since(series: &[PricePoint], since: DateTime<Utc>) -> &[PricePoint] {
    let since_ms = since.timestamp_millis();
    let idx = series.partition_point(|p| p.timestamp < since_ms);
    &series[idx..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::generator::{MS_PER_DAY, MS_PER_HOUR};
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 20, 9, 30, 0).unwrap()
    }

    fn daily_series(days: i64) -> Vec<PricePoint> {
        let now_ms = now().timestamp_millis();
        (0..days)
            .rev()
            .map(|d| PricePoint::new(now_ms - d * MS_PER_DAY, 100.0 + d as f64))
            .collect()
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(PeriodSelector::from("LIVE"), PeriodSelector::Live);
        assert_eq!(PeriodSelector::from("1d"), PeriodSelector::OneDay);
        assert_eq!(PeriodSelector::from("1W"), PeriodSelector::OneWeek);
        assert_eq!(PeriodSelector::from(" 1M "), PeriodSelector::OneMonth);
        assert_eq!(PeriodSelector::from("ALL"), PeriodSelector::All);
        assert_eq!(PeriodSelector::from("5Y"), PeriodSelector::All);
        assert_eq!(PeriodSelector::from(""), PeriodSelector::All);

        for period in PeriodSelector::VALUES {
            assert_eq!(PeriodSelector::from(period.as_str()), period);
        }
    }

    #[test]
    fn test_selector_serde() {
        let json = serde_json::to_string(&PeriodSelector::OneWeek).unwrap();
        assert_eq!(json, r#""1W""#);

        let parsed: PeriodSelector = serde_json::from_str(r#""LIVE""#).unwrap();
        assert_eq!(parsed, PeriodSelector::Live);

        let unknown: PeriodSelector = serde_json::from_str(r#""3Y""#).unwrap();
        assert_eq!(unknown, PeriodSelector::All);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let series = daily_series(10);
        let mut rng = StdRng::seed_from_u64(0);

        let data = filter(&series, PeriodSelector::All, 104.0, now(), &mut rng);
        assert_eq!(data, series);
    }

    #[test]
    fn test_filter_week_takes_inclusive_tail() {
        let series = daily_series(10);
        let mut rng = StdRng::seed_from_u64(0);

        let data =
            filter(&series, PeriodSelector::OneWeek, 104.0, now(), &mut rng);

        assert_eq!(data.len(), 8);
        assert_eq!(data[..], series[2..]);
    }

    #[test]
    fn test_filter_day_and_month() {
        let series = daily_series(40);
        let mut rng = StdRng::seed_from_u64(0);

        let day = filter(&series, PeriodSelector::OneDay, 104.0, now(), &mut rng);
        assert_eq!(day.len(), 2);

        let month =
            filter(&series, PeriodSelector::OneMonth, 104.0, now(), &mut rng);
        assert_eq!(month.len(), 31);
    }

    #[test]
    fn test_filter_window_with_no_samples() {
        let old = vec![PricePoint::new(
            now().timestamp_millis() - 2 * MS_PER_DAY - MS_PER_HOUR,
            5.0,
        )];
        let mut rng = StdRng::seed_from_u64(0);

        assert!(filter(&old, PeriodSelector::OneDay, 1.0, now(), &mut rng)
            .is_empty());
        assert!(filter(&[], PeriodSelector::OneWeek, 1.0, now(), &mut rng)
            .is_empty());
    }

    #[test]
    fn test_filter_live_ignores_series() {
        let series = daily_series(3);
        let mut rng = StdRng::seed_from_u64(5);

        let data = filter(&series, PeriodSelector::Live, 50.25, now(), &mut rng);

        assert_eq!(data.len(), 61);
        assert_eq!(data.last().unwrap().price, 50.25);
        assert_eq!(data.last().unwrap().timestamp, now().timestamp_millis());
    }
}
