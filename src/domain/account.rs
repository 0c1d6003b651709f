//! Domain type for a tracked financial account.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::domain::common::*;

/// Represents a financial account tracked within the ledger.
///
/// The `checkpoint_balance`/`checkpoint_date` pair is a cached replay
/// baseline, not a source of truth: replaying every transaction from
/// `create_date` with `initial_balance` must reproduce it. The balance
/// engine uses whichever baseline is closer to the requested date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub currency: CurrencyCode,
    pub create_date: NaiveDate,
    pub initial_balance: Decimal,
    pub checkpoint_balance: Decimal,
    pub checkpoint_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Account {
    /// Creates a new account whose checkpoint starts at the opening balance.
    pub fn new(
        name: impl Into<String>,
        currency: CurrencyCode,
        initial_balance: Decimal,
        create_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            currency,
            create_date,
            initial_balance,
            checkpoint_balance: initial_balance,
            checkpoint_date: create_date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Rewrites the cached checkpoint. Callers are expected to pass a balance
    /// obtained from a full replay so the cache stays reconciled.
    pub fn set_checkpoint(&mut self, balance: Decimal, date: NaiveDate) {
        debug_assert!(date >= self.create_date);
        self.checkpoint_balance = balance;
        self.checkpoint_date = date;
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.currency.as_str())
    }
}
