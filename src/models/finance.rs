use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Direction of cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum TransactionDirection {
    Inward,
    Outward,
}

/// Farm-wide cash ledger entry. Not tied to any flock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceTransaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub voucher_no: String,
    pub direction: TransactionDirection,
    pub source_or_expense_type: String,
    pub amount: Decimal,
    pub remarks: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewFinanceTransaction {
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub voucher_no: String,
    pub direction: TransactionDirection,
    #[validate(length(min = 1))]
    pub source_or_expense_type: String,
    pub amount: Decimal,
    #[serde(default)]
    pub remarks: String,
}
