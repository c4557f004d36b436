use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Daily feed and water record for one flock.
///
/// `total_feed_used` and `bird_count_at_report` are derived once at
/// submission time from the flock's head count, so replaying or reordering
/// history cannot change the stored figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFeedReport {
    pub id: Uuid,
    pub date: NaiveDate,
    pub flock_id: Uuid,
    /// Grams per bird.
    pub feed_consumed_per_bird: f64,
    /// Liters.
    pub water_consumed_normal: f64,
    /// Liters.
    pub water_consumed_medicated: f64,
    /// Kilograms.
    pub opening_stock_feed: f64,
    /// Kilograms.
    pub feed_received: f64,
    /// Kilograms, derived at submission.
    pub total_feed_used: f64,
    /// Head count snapshot taken when the report was recorded.
    pub bird_count_at_report: i64,
    pub remarks: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewFeedReport {
    pub date: NaiveDate,
    pub flock_id: Uuid,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub feed_consumed_per_bird: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub water_consumed_normal: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub water_consumed_medicated: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub opening_stock_feed: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub feed_received: f64,
    #[serde(default)]
    pub remarks: String,
}
