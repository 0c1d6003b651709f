//! Domain types for ledger transactions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A single ledger entry owned by a source account.
///
/// `amount` is always non-negative and denominated in the source account's
/// currency; the direction of the movement comes from `kind`. Edits are full
/// field overwrites, never append-only amendments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub account: Uuid,
    pub category: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        account: Uuid,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            amount,
            date,
            account,
            category: None,
            note: None,
        }
    }

    pub fn with_category(mut self, category: Uuid) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.kind.label())
    }
}

/// The three transaction shapes the ledger understands.
///
/// Transfer-only fields live on the variant so the type system, not runtime
/// checks, guarantees they exist exactly when the transaction is a transfer.
/// `destination_amount` carries the credited amount when the two accounts use
/// different currencies; `None` means the destination is credited the face
/// `amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer {
        destination: Uuid,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        destination_amount: Option<Decimal>,
    },
}

impl TransactionKind {
    pub fn transfer(destination: Uuid) -> Self {
        TransactionKind::Transfer {
            destination,
            destination_amount: None,
        }
    }

    pub fn cross_currency_transfer(destination: Uuid, destination_amount: Decimal) -> Self {
        TransactionKind::Transfer {
            destination,
            destination_amount: Some(destination_amount),
        }
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, TransactionKind::Transfer { .. })
    }

    /// The destination account id, for transfers only.
    pub fn destination(&self) -> Option<Uuid> {
        match self {
            TransactionKind::Transfer { destination, .. } => Some(*destination),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Transfer { .. } => "transfer",
        }
    }
}
