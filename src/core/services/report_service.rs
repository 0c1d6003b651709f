//! Read-only façade over the engine so every presentation context shares the
//! same balance, summary, and series implementations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::engine::{balance, series, summary};
use crate::domain::{DateWindow, Ledger};
use crate::errors::LedgerError;

use super::{ServiceError, ServiceResult};

/// Income and expense totals for one reporting window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub struct ReportService;

impl ReportService {
    pub fn balance(ledger: &Ledger, account_id: Uuid, as_of: NaiveDate) -> ServiceResult<Decimal> {
        let account = ledger.account(account_id).ok_or_else(|| {
            ServiceError::Ledger(LedgerError::InvalidRef("Account does not exist".into()))
        })?;
        Ok(balance::balance_of(ledger, account, as_of))
    }

    pub fn net_worth(ledger: &Ledger, as_of: NaiveDate) -> summary::NetWorthReport {
        summary::net_worth(ledger, as_of)
    }

    pub fn period_summary(ledger: &Ledger, window: DateWindow) -> PeriodSummary {
        let income = summary::period_total(ledger, summary::FlowKind::Income, window);
        let expense = summary::period_total(ledger, summary::FlowKind::Expense, window);
        PeriodSummary {
            income,
            expense,
            net: income - expense,
        }
    }

    pub fn category_total(
        ledger: &Ledger,
        category_id: Uuid,
        flow: summary::FlowKind,
        window: DateWindow,
    ) -> ServiceResult<Decimal> {
        if ledger.category(category_id).is_none() {
            return Err(ServiceError::Ledger(LedgerError::InvalidRef(
                "Category does not exist".into(),
            )));
        }
        Ok(summary::period_total_by_category(
            ledger,
            category_id,
            flow,
            window,
        ))
    }

    pub fn net_worth_series(
        ledger: &Ledger,
        range: series::SampleRange,
        end_date: NaiveDate,
    ) -> Vec<series::NetWorthPoint> {
        series::net_worth_series(ledger, range, end_date)
    }

    /// Ids of accounts whose cached checkpoint no longer matches a full
    /// replay. Empty means every checkpoint reconciles.
    pub fn unreconciled_accounts(ledger: &Ledger) -> Vec<Uuid> {
        ledger
            .accounts
            .iter()
            .filter(|account| !balance::verify_checkpoint(ledger, account))
            .map(|account| account.id)
            .collect()
    }
}
