use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Daily mortality record for one flock. `total` is derived at submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortalityReport {
    pub id: Uuid,
    pub date: NaiveDate,
    pub flock_id: Uuid,
    pub night_mortality: i64,
    pub hospital_mortality: i64,
    pub total: i64,
    pub remarks: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMortalityReport {
    pub date: NaiveDate,
    pub flock_id: Uuid,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub night_mortality: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub hospital_mortality: i64,
    #[serde(default)]
    pub remarks: String,
}

impl NewMortalityReport {
    pub fn total(&self) -> i64 {
        self.night_mortality + self.hospital_mortality
    }
}
