use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

use super::{
    aggregate, filter, generate_history, project, ChartProjection,
    PeriodSelector, PricePoint, PriceStats, SeriesConfig,
};

/// Owned copy of the derived views for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceView {
    pub period: PeriodSelector,
    pub points: Vec<PricePoint>,
    pub chart: ChartProjection,
    pub stats: PriceStats,
}

/// Holds the generated history and the selected period.
///
/// Every mutation goes through [`PriceDataState::select`],
/// [`PriceDataState::refresh`] or [`PriceDataState::regenerate`], each of
/// which recomputes the filtered series first and then the chart projection
/// and stats from it before returning, so the accessors always describe the
/// current selection.
#[derive(Debug)]
pub struct PriceDataState<R = StdRng> {
    config: SeriesConfig,
    rng: R,
    all: Vec<PricePoint>,
    selected: PeriodSelector,
    filtered: Vec<PricePoint>,
    chart: ChartProjection,
    stats: PriceStats,
}

impl<R> PriceDataState<R>
where
    R: Rng,
{
    pub fn new(
        config: SeriesConfig,
        now: DateTime<Utc>,
        mut rng: R,
    ) -> PriceDataState<R> {
        let all = generate_history(&config, now, &mut rng);
        let mut state = PriceDataState {
            config,
            rng,
            all,
            selected: PeriodSelector::default(),
            filtered: vec![],
            chart: ChartProjection::default(),
            stats: PriceStats::default(),
        };
        state.recompute(now);
        state
    }

    pub fn select(&mut self, period: PeriodSelector, now: DateTime<Utc>) {
        self.selected = period;
        self.recompute(now);
    }

    /// Recomputes the views for the current selection. For `LIVE` this
    /// draws a new live window.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.recompute(now);
    }

    /// Replaces the full history with a newly generated one.
    pub fn regenerate(&mut self, now: DateTime<Utc>) {
        self.all = generate_history(&self.config, now, &mut self.rng);
        self.recompute(now);
    }

    fn recompute(&mut self, now: DateTime<Utc>) {
        let filtered = filter(
            &self.all,
            self.selected,
            self.config.current_price,
            now,
            &mut self.rng,
        );
        self.chart = project(&filtered);
        self.stats = aggregate(&filtered);
        self.filtered = filtered;
    }

    pub fn snapshot(&self) -> PriceView {
        PriceView {
            period: self.selected,
            points: self.filtered.clone(),
            chart: self.chart.clone(),
            stats: self.stats,
        }
    }

    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    pub fn all(&self) -> &[PricePoint] {
        &self.all
    }

    pub fn selected(&self) -> PeriodSelector {
        self.selected
    }

    pub fn filtered(&self) -> &[PricePoint] {
        &self.filtered
    }

    pub fn chart(&self) -> &ChartProjection {
        &self.chart
    }

    pub fn stats(&self) -> &PriceStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::generator::MS_PER_MINUTE;
    use chrono::{NaiveDate, TimeZone};
    use rand::SeedableRng;

    fn config() -> SeriesConfig {
        SeriesConfig {
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            starting_price: 16.0,
            current_price: 104.0,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 20, 18, 5, 0).unwrap()
    }

    fn state(seed: u64) -> PriceDataState {
        PriceDataState::new(config(), now(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_initial_selection_is_all() {
        let state = state(1);

        assert_eq!(state.selected(), PeriodSelector::All);
        assert_eq!(state.filtered(), state.all());
        assert_eq!(state.chart().x_axis.len(), state.all().len());
        assert_eq!(state.stats().end, 104.0);
        assert_eq!(state.config(), &config());
    }

    #[test]
    fn test_select_recomputes_all_views() {
        let mut state = state(2);
        let full_len = state.all().len();

        state.select(PeriodSelector::OneWeek, now());

        let filtered = state.filtered().to_vec();
        assert!(filtered.len() < full_len);
        assert_eq!(state.chart(), &project(&filtered));
        assert_eq!(state.stats(), &aggregate(&filtered));
        assert_eq!(state.all().len(), full_len);

        state.select(PeriodSelector::All, now());
        assert_eq!(state.filtered().len(), full_len);
    }

    #[test]
    fn test_live_selections_are_independent() {
        let mut state = state(3);

        state.select(PeriodSelector::Live, now());
        let first = state.snapshot();
        state.select(PeriodSelector::Live, now());
        let second = state.snapshot();

        for view in [&first, &second] {
            assert_eq!(view.points.len(), 61);
            assert_eq!(view.points.last().unwrap().price, 104.0);
            assert!(view
                .points
                .windows(2)
                .all(|w| w[1].timestamp - w[0].timestamp == MS_PER_MINUTE));
            assert_eq!(view.stats.end, 104.0);
        }

        assert_ne!(first.points, second.points);
    }

    #[test]
    fn test_refresh_keeps_selection() {
        let mut state = state(4);

        state.select(PeriodSelector::OneDay, now());
        let before = state.snapshot();
        state.refresh(now());

        assert_eq!(state.selected(), PeriodSelector::OneDay);
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_regenerate_replaces_history() {
        let mut state = state(5);
        state.select(PeriodSelector::OneMonth, now());
        let before = state.all().to_vec();

        state.regenerate(now());

        assert_ne!(state.all(), &before[..]);
        assert_eq!(state.selected(), PeriodSelector::OneMonth);
        assert_eq!(state.all().last().unwrap().price, 104.0);
        assert_eq!(state.stats(), &aggregate(state.filtered()));
    }

    #[test]
    fn test_snapshot_matches_accessors() {
        let mut state = state(6);
        state.select(PeriodSelector::OneDay, now());
        let view = state.snapshot();

        assert_eq!(view.period, PeriodSelector::OneDay);
        assert_eq!(view.points, state.filtered());
        assert_eq!(&view.chart, state.chart());
        assert_eq!(&view.stats, state.stats());
    }
}
