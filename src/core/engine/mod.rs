//! The ledger balance computation engine.
//!
//! Everything here is a pure function over a [`Ledger`](crate::domain::Ledger)
//! snapshot: balance reconstruction from a checkpoint baseline, aggregate
//! summaries, and net-worth time series. Presentation contexts share these
//! implementations instead of reimplementing the fold per view.

pub mod balance;
pub mod series;
pub mod summary;

pub use balance::{balance_of, full_replay_balance, verify_checkpoint};
pub use series::{net_worth_series, NetWorthPoint, SampleRange};
pub use summary::{net_worth, period_total, period_total_by_category, FlowKind, NetWorthReport};
