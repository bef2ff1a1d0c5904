//! Synthetic price series
//!
//! Generation, period filtering, chart projection and stats for the price
//! history chart, plus the state container tying them together.

mod generator;
mod period;
mod projection;
mod state;
mod stats;

pub use self::{
    generator::{
        generate_history, generate_live_window, round_cents, PricePoint,
        SeriesConfig, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    },
    period::{filter, tail_since, PeriodSelector},
    projection::{project, ChartProjection},
    state::{PriceDataState, PriceView},
    stats::{aggregate, PriceStats},
};
