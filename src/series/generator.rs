use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MS_PER_MINUTE: i64 = 60 * 1000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const DAILY_VOLATILITY: f64 = 0.03;
const SMOOTHING_PREV_WEIGHT: f64 = 0.3;
const PRICE_FLOOR_RATIO: f64 = 0.9;
const HOURLY_JITTER: f64 = 0.5;

const LIVE_WINDOW_MINUTES: i64 = 60;
const LIVE_START_OFFSET: f64 = 2.0;
const LIVE_STEP: f64 = 0.3;
const LIVE_DRIFT_BIAS: f64 = 0.48;
const LIVE_LOWER_BAND: f64 = 5.0;
const LIVE_UPPER_BAND: f64 = 2.0;

/// A single sample of the synthetic price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: i64, price: f64) -> PricePoint {
        PricePoint { timestamp, price }
    }
}

/// Parameters of the synthetic history curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub start_date: NaiveDate,
    pub starting_price: f64,
    pub current_price: f64,
}

/// Daily samples from `start_date` up to yesterday, then hourly samples for
/// today up to `now`. The last sample always carries `current_price`.
pub fn generate_history<R>(
    config: &SeriesConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<PricePoint>
where
    R: Rng + ?Sized,
{
    let start = config.start_date.and_time(NaiveTime::MIN).and_utc();
    let start_ms = start.timestamp_millis();
    let now_ms = now.timestamp_millis();

    if now_ms < start_ms {
        return vec![];
    }

    let total_days = (now_ms - start_ms) / MS_PER_DAY;
    let growth = config.current_price / config.starting_price;
    let floor = config.starting_price * PRICE_FLOOR_RATIO;

    let mut data = Vec::with_capacity(total_days as usize + 24);
    let mut prev_price = config.starting_price;

    for day in 0..=total_days {
        let progress = if total_days == 0 {
            0.0
        } else {
            day as f64 / total_days as f64
        };
        let base_price = config.starting_price * growth.powf(progress);

        let volatility = base_price * DAILY_VOLATILITY;
        let noise = rng.gen_range(-1.0..1.0_f64) * volatility;

        let mut price = base_price + noise;
        price = prev_price * SMOOTHING_PREV_WEIGHT
            + price * (1.0 - SMOOTHING_PREV_WEIGHT);
        price = price.max(floor);

        let day_ms = start_ms + day * MS_PER_DAY;

        if day == total_days {
            for hour in 0..24 {
                let hour_ms = day_ms + hour * MS_PER_HOUR;
                if hour_ms > now_ms {
                    break;
                }

                let hour_progress = hour as f64 / 24.0;
                let hour_price = prev_price
                    + (price - prev_price) * hour_progress
                    + rng.gen_range(-HOURLY_JITTER..HOURLY_JITTER);

                data.push(PricePoint::new(hour_ms, round_cents(hour_price)));
            }
        } else {
            data.push(PricePoint::new(day_ms, round_cents(price)));
        }

        prev_price = price;
    }

    if let Some(last) = data.last_mut() {
        last.price = config.current_price;
    }

    data
}

/// Minute samples for the trailing hour plus `now`, as a bounded random
/// walk that finishes exactly on `base_price`.
pub fn generate_live_window<R>(
    base_price: f64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<PricePoint>
where
    R: Rng + ?Sized,
{
    let lower = base_price - LIVE_LOWER_BAND;
    let upper = base_price + LIVE_UPPER_BAND;

    let mut data = Vec::with_capacity(LIVE_WINDOW_MINUTES as usize + 1);
    let mut price = base_price - rng.gen_range(0.0..LIVE_START_OFFSET);

    for minute in (0..=LIVE_WINDOW_MINUTES).rev() {
        let timestamp = now - Duration::minutes(minute);

        price += (rng.gen::<f64>() - LIVE_DRIFT_BIAS) * LIVE_STEP;
        price = price.clamp(lower, upper);

        data.push(PricePoint::new(
            timestamp.timestamp_millis(),
            round_cents(price),
        ));
    }

    if let Some(last) = data.last_mut() {
        last.price = base_price;
    }

    data
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
