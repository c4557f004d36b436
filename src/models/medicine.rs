use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Medicine administration record for one flock. Dose and usage stay free
/// text, matching how the farm writes them up ("1ml/L", "4 Bottles").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineReport {
    pub id: Uuid,
    pub date: NaiveDate,
    pub flock_id: Uuid,
    pub medicine_name: String,
    pub dose: String,
    pub medicine_used: String,
    pub total_hours: String,
    pub remarks: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMedicineReport {
    pub date: NaiveDate,
    pub flock_id: Uuid,
    #[validate(length(min = 1))]
    pub medicine_name: String,
    #[serde(default)]
    pub dose: String,
    #[serde(default)]
    pub medicine_used: String,
    #[serde(default)]
    pub total_hours: String,
    #[serde(default)]
    pub remarks: String,
}
