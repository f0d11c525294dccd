//! Session start-time synthesis with diurnal and day-of-week bias.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use time::{Date, Duration, PrimitiveDateTime, Time, Weekday};

use crate::error::GenError;
use crate::sampler::pick_weighted;

/// When during the day a visitor tends to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorPattern {
    /// Peaks around 1 PM, confined to office hours.
    Business,
    /// Spread across the whole day, peaking mid-afternoon.
    Normal,
    /// Peaks around 8 PM.
    Evening,
}

impl BehaviorPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorPattern::Business => "business",
            BehaviorPattern::Normal => "normal",
            BehaviorPattern::Evening => "evening",
        }
    }

    /// (mean, std dev, clamp range) for the hour-of-day draw.
    fn hour_distribution(&self) -> (f64, f64, f64, f64) {
        match self {
            BehaviorPattern::Business => (13.0, 3.0, 9.0, 17.0),
            BehaviorPattern::Evening => (20.0, 2.0, 18.0, 23.0),
            BehaviorPattern::Normal => (14.0, 4.0, 0.0, 23.0),
        }
    }
}

/// Weekday traffic bias; weekends see noticeably less B2B traffic.
const WEEKDAY_WEIGHTS: [(Weekday, f64); 7] = [
    (Weekday::Monday, 0.8),
    (Weekday::Tuesday, 1.2),
    (Weekday::Wednesday, 1.3),
    (Weekday::Thursday, 1.3),
    (Weekday::Friday, 1.2),
    (Weekday::Saturday, 0.9),
    (Weekday::Sunday, 0.7),
];

/// Synthesizes session start timestamps within 30 days of a base date.
#[derive(Debug, Clone)]
pub struct TimestampGenerator {
    base_date: Date,
}

impl TimestampGenerator {
    pub fn new(base_date: Date) -> Self {
        Self { base_date }
    }

    /// Draws one session start for a visitor in the given timezone with the
    /// given behavior pattern.
    pub fn session_start(
        &self,
        timezone_offset_hours: i32,
        pattern: BehaviorPattern,
        rng: &mut impl Rng,
    ) -> Result<PrimitiveDateTime, GenError> {
        let base = PrimitiveDateTime::new(self.base_date, Time::MIDNIGHT)
            + Duration::hours(timezone_offset_hours as i64);

        let (mean, std_dev, lo, hi) = pattern.hour_distribution();
        let normal = Normal::new(mean, std_dev).unwrap();
        let hour = normal.sample(rng).clamp(lo, hi);

        let target_weekday = pick_weighted(&WEEKDAY_WEIGHTS, |(_, w)| *w, rng)?.0;

        let mut timestamp = base
            + Duration::days(rng.gen_range(0..=30))
            + Duration::hours(hour as i64)
            + Duration::minutes(rng.gen_range(0..=59))
            + Duration::seconds(rng.gen_range(0..=59));

        // Best-effort weekday alignment. Each nudge only happens with
        // probability 0.7 and shifts a uniform +/-1 day, so the loop can stop
        // on a non-matching weekday. The corpus's weekly shape depends on
        // this, so it stays probabilistic instead of snapping to the nearest
        // matching weekday.
        while timestamp.weekday() != target_weekday && rng.r#gen::<f64>() < 0.7 {
            let shift = if rng.r#gen::<bool>() { 1 } else { -1 };
            timestamp += Duration::days(shift);
        }

        Ok(timestamp)
    }
}
