use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One managed group/shed of birds tracked as a single unit, carrying the
/// canonical running totals mutated by report submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flock {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub arrival_date: NaiveDate,
    pub initial_bird_count: i64,
    pub current_bird_count: i64,
    pub cost_per_chick: Decimal,
    pub total_mortality: i64,
    /// Cumulative feed consumed, kilograms.
    pub total_feed_kg: f64,
    pub total_eggs: i64,
}

/// Registration input. Counters start at zero and the current bird count
/// starts at the initial count.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewFlock {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub breed: String,
    pub arrival_date: NaiveDate,
    #[validate(range(min = 1))]
    pub initial_bird_count: i64,
    #[serde(default)]
    pub cost_per_chick: Decimal,
}

/// Raised when a mortality submission would push the bird count below zero.
#[derive(Debug, Clone, thiserror::Error)]
#[error("mortality total {total} exceeds current bird count {current}")]
pub struct MortalityExceedsFlock {
    pub total: i64,
    pub current: i64,
}

impl Flock {
    pub fn register(input: NewFlock) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            breed: input.breed,
            arrival_date: input.arrival_date,
            initial_bird_count: input.initial_bird_count,
            current_bird_count: input.initial_bird_count,
            cost_per_chick: input.cost_per_chick,
            total_mortality: 0,
            total_feed_kg: 0.0,
            total_eggs: 0,
        }
    }

    /// Applies a feed submission: grams-per-bird times the current head
    /// count, converted to kilograms. Returns the mass added so the report
    /// can store it as the authoritative figure.
    pub fn record_feed(&mut self, feed_consumed_per_bird_g: f64) -> f64 {
        let used_kg = feed_consumed_per_bird_g * self.current_bird_count as f64 / 1000.0;
        self.total_feed_kg += used_kg;
        used_kg
    }

    /// Applies a mortality submission, rejecting totals that would drive
    /// the bird count negative. `current_bird_count` stays equal to
    /// `initial_bird_count - total_mortality`.
    pub fn record_mortality(&mut self, total: i64) -> Result<(), MortalityExceedsFlock> {
        if total > self.current_bird_count {
            return Err(MortalityExceedsFlock {
                total,
                current: self.current_bird_count,
            });
        }
        self.current_bird_count -= total;
        self.total_mortality += total;
        Ok(())
    }

    /// Applies an egg-production submission.
    pub fn record_eggs(&mut self, eggs_today: i64) {
        self.total_eggs += eggs_today;
    }
}
