//! Aggregate summaries across the whole snapshot: net worth and
//! per-period income/expense totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{DateWindow, Ledger, TransactionKind};

use super::balance::balance_of;

/// Which side of the cash flow a period total covers. Transfers belong to
/// neither: both legs stay inside the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Income,
    Expense,
}

impl FlowKind {
    fn matches(&self, kind: &TransactionKind) -> bool {
        match self {
            FlowKind::Income => matches!(kind, TransactionKind::Income),
            FlowKind::Expense => matches!(kind, TransactionKind::Expense),
        }
    }
}

/// Net worth at a date plus a count of transfer legs that had to be skipped
/// because they referenced an account missing from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetWorthReport {
    pub total: Decimal,
    pub skipped_legs: usize,
}

/// Sums every account's reconstructed balance at `as_of`.
///
/// Accounts created after `as_of` are excluded. Balances are summed as raw
/// numbers with no currency normalization — a known limitation carried over
/// deliberately, not a bug. Dangling references never fail the computation;
/// they are skipped, counted, and logged.
pub fn net_worth(ledger: &Ledger, as_of: NaiveDate) -> NetWorthReport {
    let total = ledger
        .accounts
        .iter()
        .filter(|account| account.create_date <= as_of)
        .map(|account| balance_of(ledger, account, as_of))
        .sum();

    NetWorthReport {
        total,
        skipped_legs: count_dangling_legs(ledger),
    }
}

/// Sum of face amounts for matching income or expense transactions with a
/// date inside the half-open window. Empty snapshots total zero.
pub fn period_total(ledger: &Ledger, flow: FlowKind, window: DateWindow) -> Decimal {
    ledger
        .transactions
        .iter()
        .filter(|txn| window.contains(txn.date) && flow.matches(&txn.kind))
        .map(|txn| txn.amount)
        .sum()
}

/// Like [`period_total`], restricted to a single category.
pub fn period_total_by_category(
    ledger: &Ledger,
    category: Uuid,
    flow: FlowKind,
    window: DateWindow,
) -> Decimal {
    ledger
        .transactions
        .iter()
        .filter(|txn| {
            txn.category == Some(category) && window.contains(txn.date) && flow.matches(&txn.kind)
        })
        .map(|txn| txn.amount)
        .sum()
}

/// Counts transaction legs that reference accounts absent from the snapshot:
/// a source account that no longer exists, or a transfer destination that
/// was deleted out of band. Each is logged once per computation pass.
fn count_dangling_legs(ledger: &Ledger) -> usize {
    let mut skipped = 0;
    for txn in &ledger.transactions {
        if ledger.account(txn.account).is_none() {
            tracing::warn!(transaction = %txn.id, "source account missing from snapshot");
            skipped += 1;
        }
        if let Some(destination) = txn.kind.destination() {
            if ledger.account(destination).is_none() {
                tracing::warn!(
                    transaction = %txn.id,
                    "transfer destination missing from snapshot; credit leg skipped"
                );
                skipped += 1;
            }
        }
    }
    skipped
}
