use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Direction of a vehicle movement through the farm gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum GateMovement {
    Inward,
    Outward,
}

/// Gate log entry. Timestamped, not tied to a calendar-date report cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityLog {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub movement: GateMovement,
    pub vehicle_number: String,
    pub driver_name: String,
    pub material_type: String,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_or_doc_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSecurityLog {
    /// Defaults to the submission instant when omitted.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub movement: GateMovement,
    #[validate(length(min = 1))]
    pub vehicle_number: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub material_type: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub photo_or_doc_url: Option<String>,
}
