use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::engine::balance;
use crate::domain::{Ledger, Transaction, TransactionKind};
use crate::errors::LedgerError;

use super::{ServiceError, ServiceResult};

pub struct TransactionService;

impl TransactionService {
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<()> {
        Self::validate(ledger, &transaction)?;
        let touched = Self::touched_accounts(&transaction);
        ledger.add_transaction(transaction);
        Self::refresh_checkpoints(ledger, &touched);
        Ok(())
    }

    /// Replaces every field of an existing transaction with `changes`.
    /// Amendments are plain overwrites; the ledger keeps no audit trail.
    pub fn edit(ledger: &mut Ledger, id: Uuid, changes: Transaction) -> ServiceResult<()> {
        Self::validate(ledger, &changes)?;
        let mut touched = {
            let existing = ledger
                .transaction(id)
                .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
            Self::touched_accounts(existing)
        };
        touched.extend(Self::touched_accounts(&changes));
        let existing = ledger
            .transaction_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        existing.name = changes.name;
        existing.kind = changes.kind;
        existing.amount = changes.amount;
        existing.date = changes.date;
        existing.account = changes.account;
        existing.category = changes.category;
        existing.note = changes.note;
        ledger.touch();
        Self::refresh_checkpoints(ledger, &touched);
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let touched = {
            let existing = ledger
                .transaction(id)
                .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
            Self::touched_accounts(existing)
        };
        ledger.transactions.retain(|txn| txn.id != id);
        ledger.touch();
        Self::refresh_checkpoints(ledger, &touched);
        Ok(())
    }

    /// Transactions most recent first, the order summary views list them in.
    pub fn list_recent(ledger: &Ledger) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = ledger.transactions.iter().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    fn validate(ledger: &Ledger, transaction: &Transaction) -> ServiceResult<()> {
        if transaction.amount < Decimal::ZERO {
            return Err(ServiceError::Invalid("Amount must not be negative".into()));
        }
        if ledger.account(transaction.account).is_none() {
            return Err(ServiceError::Ledger(LedgerError::InvalidRef(
                "Source account does not exist".into(),
            )));
        }
        if let Some(category) = transaction.category {
            if ledger.category(category).is_none() {
                return Err(ServiceError::Ledger(LedgerError::InvalidRef(
                    "Linked category does not exist".into(),
                )));
            }
        }
        if let TransactionKind::Transfer {
            destination,
            destination_amount,
        } = &transaction.kind
        {
            if *destination == transaction.account {
                return Err(ServiceError::Invalid(
                    "Transfer destination matches source account".into(),
                ));
            }
            if ledger.account(*destination).is_none() {
                return Err(ServiceError::Ledger(LedgerError::InvalidRef(
                    "Transfer destination does not exist".into(),
                )));
            }
            if destination_amount.map_or(false, |amount| amount < Decimal::ZERO) {
                return Err(ServiceError::Invalid(
                    "Destination amount must not be negative".into(),
                ));
            }
        }
        Ok(())
    }

    fn touched_accounts(transaction: &Transaction) -> Vec<(Uuid, NaiveDate)> {
        let mut touched = vec![(transaction.account, transaction.date)];
        if let Some(destination) = transaction.kind.destination() {
            touched.push((destination, transaction.date));
        }
        touched
    }

    /// Rebuilds the checkpoint of any touched account when the mutation
    /// lands at or before its checkpoint date. The replay window is
    /// exclusive at the baseline, so a checkpoint that stopped reflecting
    /// history behind it would silently drop the mutation otherwise.
    fn refresh_checkpoints(ledger: &mut Ledger, touched: &[(Uuid, NaiveDate)]) {
        let mut updates: Vec<(Uuid, Decimal)> = Vec::new();
        for (id, date) in touched {
            if updates.iter().any(|(seen, _)| seen == id) {
                continue;
            }
            if let Some(account) = ledger.account(*id) {
                if *date <= account.checkpoint_date {
                    let rebuilt =
                        balance::full_replay_balance(ledger, account, account.checkpoint_date);
                    if rebuilt != account.checkpoint_balance {
                        updates.push((*id, rebuilt));
                    }
                }
            }
        }
        for (id, rebuilt) in updates {
            if let Some(account) = ledger.account_mut(id) {
                tracing::debug!(
                    account = %account.name,
                    balance = %rebuilt,
                    "checkpoint refreshed after backdated mutation"
                );
                account.checkpoint_balance = rebuilt;
            }
        }
    }
}
