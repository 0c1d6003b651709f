use chrono::NaiveDate;
use ledger_core::{
    core::engine::balance,
    core::services::{
        AccountService, CategoryService, ReportService, ServiceError, TransactionService,
    },
    currency::CurrencyCode,
    domain::{Account, Category, DateWindow, Ledger, Transaction, TransactionKind},
};
use rust_decimal::Decimal;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn prepared_ledger() -> (Ledger, Uuid, Uuid) {
    let mut ledger = Ledger::new("Services");
    let created = date(2025, 1, 1);
    let checking = Account::new(
        "Checking",
        CurrencyCode::default(),
        Decimal::from(500),
        created,
    );
    let savings = Account::new(
        "Savings",
        CurrencyCode::default(),
        Decimal::from(100),
        created,
    );
    let (checking_id, savings_id) = (checking.id, savings.id);
    AccountService::add(&mut ledger, checking).unwrap();
    AccountService::add(&mut ledger, savings).unwrap();
    (ledger, checking_id, savings_id)
}

#[test]
fn duplicate_account_names_are_rejected() {
    let (mut ledger, _, _) = prepared_ledger();
    let clash = Account::new(
        " checking ",
        CurrencyCode::default(),
        Decimal::ZERO,
        date(2025, 2, 1),
    );
    let err = AccountService::add(&mut ledger, clash).expect_err("duplicate should fail");
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn removing_a_referenced_account_is_refused() {
    let (mut ledger, checking, savings) = prepared_ledger();
    TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Stash",
            TransactionKind::transfer(savings),
            Decimal::from(25),
            checking,
            date(2025, 1, 15),
        ),
    )
    .unwrap();

    // Both legs pin their account.
    assert!(AccountService::remove(&mut ledger, checking).is_err());
    assert!(AccountService::remove(&mut ledger, savings).is_err());

    let id = ledger.transactions[0].id;
    TransactionService::remove(&mut ledger, id).unwrap();
    assert!(AccountService::remove(&mut ledger, savings).is_ok());
}

#[test]
fn transfer_to_self_is_rejected() {
    let (mut ledger, checking, _) = prepared_ledger();
    let err = TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Loop",
            TransactionKind::transfer(checking),
            Decimal::from(10),
            checking,
            date(2025, 1, 5),
        ),
    )
    .expect_err("self transfer should fail");
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn transfer_to_unknown_account_is_rejected() {
    let (mut ledger, checking, _) = prepared_ledger();
    let err = TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Nowhere",
            TransactionKind::transfer(Uuid::new_v4()),
            Decimal::from(10),
            checking,
            date(2025, 1, 5),
        ),
    )
    .expect_err("unknown destination should fail");
    assert!(matches!(err, ServiceError::Ledger(_)));
}

#[test]
fn negative_amounts_are_rejected() {
    let (mut ledger, checking, _) = prepared_ledger();
    let err = TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Refund gone wrong",
            TransactionKind::Expense,
            Decimal::from(-5),
            checking,
            date(2025, 1, 5),
        ),
    )
    .expect_err("negative amount should fail");
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn category_removal_nulls_transaction_references() {
    let (mut ledger, checking, _) = prepared_ledger();
    let groceries = Category::new("Groceries");
    let groceries_id = groceries.id;
    CategoryService::add(&mut ledger, groceries).unwrap();
    TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Market",
            TransactionKind::Expense,
            Decimal::from(30),
            checking,
            date(2025, 1, 8),
        )
        .with_category(groceries_id),
    )
    .unwrap();

    CategoryService::remove(&mut ledger, groceries_id).unwrap();
    assert!(ledger.transactions[0].category.is_none());
    // The expense still folds into the balance; only the grouping is gone.
    assert_eq!(
        ReportService::balance(&ledger, checking, date(2025, 1, 31)).unwrap(),
        Decimal::from(470)
    );
}

#[test]
fn restating_the_opening_balance_resets_the_checkpoint() {
    let (mut ledger, checking, _) = prepared_ledger();
    let mut changes = ledger.account(checking).unwrap().clone();
    changes.initial_balance = Decimal::from(750);
    let today = date(2025, 3, 1);
    AccountService::edit(&mut ledger, checking, changes, today).unwrap();

    let account = ledger.account(checking).unwrap();
    assert_eq!(account.initial_balance, Decimal::from(750));
    assert_eq!(account.checkpoint_balance, Decimal::from(750));
    assert_eq!(account.checkpoint_date, today);
    assert_eq!(
        ReportService::balance(&ledger, checking, today).unwrap(),
        Decimal::from(750)
    );
}

#[test]
fn backdated_transaction_refreshes_the_checkpoint() {
    let (mut ledger, checking, _) = prepared_ledger();
    AccountService::recheckpoint(&mut ledger, checking, date(2025, 2, 1)).unwrap();
    assert_eq!(
        ledger.account(checking).unwrap().checkpoint_balance,
        Decimal::from(500)
    );

    // Lands behind the checkpoint; the cache must absorb it or the replay
    // window would never see it again.
    TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Forgotten bill",
            TransactionKind::Expense,
            Decimal::from(120),
            checking,
            date(2025, 1, 20),
        ),
    )
    .unwrap();

    let account = ledger.account(checking).unwrap();
    assert_eq!(account.checkpoint_balance, Decimal::from(380));
    assert!(balance::verify_checkpoint(&ledger, account));
    assert_eq!(
        ReportService::balance(&ledger, checking, date(2025, 2, 28)).unwrap(),
        Decimal::from(380)
    );
}

#[test]
fn editing_a_backdated_transaction_keeps_checkpoints_reconciled() {
    let (mut ledger, checking, savings) = prepared_ledger();
    TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Stash",
            TransactionKind::transfer(savings),
            Decimal::from(50),
            checking,
            date(2025, 1, 10),
        ),
    )
    .unwrap();
    AccountService::recheckpoint(&mut ledger, checking, date(2025, 2, 1)).unwrap();
    AccountService::recheckpoint(&mut ledger, savings, date(2025, 2, 1)).unwrap();

    let id = ledger.transactions[0].id;
    let mut changes = ledger.transactions[0].clone();
    changes.amount = Decimal::from(80);
    TransactionService::edit(&mut ledger, id, changes).unwrap();

    assert!(ReportService::unreconciled_accounts(&ledger).is_empty());
    assert_eq!(
        ReportService::balance(&ledger, checking, date(2025, 2, 28)).unwrap(),
        Decimal::from(420)
    );
    assert_eq!(
        ReportService::balance(&ledger, savings, date(2025, 2, 28)).unwrap(),
        Decimal::from(180)
    );
}

#[test]
fn period_summary_reports_monthly_flows() {
    let (mut ledger, checking, _) = prepared_ledger();
    TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Salary",
            TransactionKind::Income,
            Decimal::from(2000),
            checking,
            date(2025, 1, 2),
        ),
    )
    .unwrap();
    TransactionService::add(
        &mut ledger,
        Transaction::new(
            "Rent",
            TransactionKind::Expense,
            Decimal::from(900),
            checking,
            date(2025, 1, 3),
        ),
    )
    .unwrap();

    let summary = ReportService::period_summary(&ledger, DateWindow::month_of(date(2025, 1, 15)));
    assert_eq!(summary.income, Decimal::from(2000));
    assert_eq!(summary.expense, Decimal::from(900));
    assert_eq!(summary.net, Decimal::from(1100));
}

#[test]
fn recent_listing_orders_newest_first() {
    let (mut ledger, checking, _) = prepared_ledger();
    for (name, day) in [("Old", 5), ("New", 20), ("Middle", 12)] {
        TransactionService::add(
            &mut ledger,
            Transaction::new(
                name,
                TransactionKind::Expense,
                Decimal::from(10),
                checking,
                date(2025, 1, day),
            ),
        )
        .unwrap();
    }
    let listed = TransactionService::list_recent(&ledger);
    let names: Vec<&str> = listed.iter().map(|txn| txn.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Middle", "Old"]);
}
