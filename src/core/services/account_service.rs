use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::engine::balance;
use crate::domain::{Account, Ledger};

use super::{ServiceError, ServiceResult};

pub struct AccountService;

impl AccountService {
    pub fn add(ledger: &mut Ledger, account: Account) -> ServiceResult<()> {
        Self::validate_name(ledger, None, &account.name)?;
        if account.checkpoint_date < account.create_date {
            return Err(ServiceError::Invalid(
                "Checkpoint date precedes account creation".into(),
            ));
        }
        ledger.add_account(account);
        Ok(())
    }

    /// Overwrites the editable fields of an account.
    ///
    /// Changing the opening balance restates the account: the checkpoint is
    /// reset to the new opening value as of `today`, discarding whatever the
    /// cache previously said. `recheckpoint` can rebuild it from history.
    pub fn edit(
        ledger: &mut Ledger,
        id: Uuid,
        changes: Account,
        today: NaiveDate,
    ) -> ServiceResult<()> {
        Self::validate_name(ledger, Some(id), &changes.name)?;
        let account = ledger
            .account_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        if today < account.create_date {
            return Err(ServiceError::Invalid(
                "Edit date precedes account creation".into(),
            ));
        }
        let restated = changes.initial_balance != account.initial_balance;
        account.name = changes.name;
        account.currency = changes.currency;
        account.note = changes.note;
        if restated {
            account.initial_balance = changes.initial_balance;
            account.set_checkpoint(changes.initial_balance, today);
            tracing::info!(account = %account.name, "opening balance restated; checkpoint reset");
        }
        ledger.touch();
        Ok(())
    }

    /// Removes an account. Deletion is refused while any transaction still
    /// references the account as source or transfer destination, so balances
    /// can never silently lose a leg.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        if ledger.account_is_referenced(id) {
            return Err(ServiceError::Invalid(
                "Account has linked transactions".into(),
            ));
        }
        let before = ledger.accounts.len();
        ledger.accounts.retain(|account| account.id != id);
        if ledger.accounts.len() == before {
            return Err(ServiceError::Invalid("Account not found".into()));
        }
        ledger.touch();
        Ok(())
    }

    /// Deterministically rebuilds the checkpoint at `as_of` from a full
    /// replay of the account's history.
    pub fn recheckpoint(ledger: &mut Ledger, id: Uuid, as_of: NaiveDate) -> ServiceResult<()> {
        let account = ledger
            .account(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?
            .clone();
        if as_of < account.create_date {
            return Err(ServiceError::Invalid(
                "Checkpoint date precedes account creation".into(),
            ));
        }
        let balance = balance::full_replay_balance(ledger, &account, as_of);
        let account = ledger
            .account_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        account.set_checkpoint(balance, as_of);
        ledger.touch();
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Account> {
        ledger.accounts.iter().collect()
    }

    fn validate_name(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Account name is empty".into()));
        }
        let duplicate = ledger.accounts.iter().any(|account| {
            let name = account.name.trim().to_ascii_lowercase();
            name == normalized && exclude.map_or(true, |id| account.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Account `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
