use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{FinanceTransaction, NewFinanceTransaction, TransactionDirection};
use crate::store::{filter_by_date, DateRange, FarmStore};

/// Service for the farm-wide cash ledger. Balance aggregation lives in the
/// metrics engine; this service only records and lists transactions.
#[derive(Clone)]
pub struct FinanceService {
    store: Arc<FarmStore>,
    event_sender: EventSender,
}

impl FinanceService {
    pub fn new(store: Arc<FarmStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    #[instrument(skip(self, input), fields(voucher_no = %input.voucher_no))]
    pub async fn record_transaction(
        &self,
        input: NewFinanceTransaction,
    ) -> Result<FinanceTransaction, ServiceError> {
        input.validate()?;

        let transaction = self.store.write(|data| {
            let transaction = FinanceTransaction {
                id: Uuid::new_v4(),
                date: input.date,
                voucher_no: input.voucher_no,
                direction: input.direction,
                source_or_expense_type: input.source_or_expense_type,
                amount: input.amount,
                remarks: input.remarks,
            };
            data.finance_transactions.insert(0, transaction.clone());
            transaction
        });

        self.event_sender
            .send(Event::FinanceTransactionRecorded {
                transaction_id: transaction.id,
                direction: transaction.direction,
                amount: transaction.amount,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(transaction)
    }

    pub async fn list_transactions(
        &self,
        direction: Option<TransactionDirection>,
        range: DateRange,
    ) -> Vec<FinanceTransaction> {
        self.store.read(|data| {
            let mut transactions: Vec<FinanceTransaction> =
                filter_by_date(&data.finance_transactions, range, |t| t.date)
                    .into_iter()
                    .filter(|t| direction.map_or(true, |d| t.direction == d))
                    .cloned()
                    .collect();
            transactions.sort_by(|a, b| b.date.cmp(&a.date));
            transactions
        })
    }
}
