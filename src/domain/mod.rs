//! Ledger domain models and the snapshot the engine computes over.

pub mod account;
pub mod category;
pub mod common;
pub mod ledger;
pub mod time_interval;
pub mod transaction;

pub use account::Account;
pub use category::Category;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use ledger::{DateWindow, Ledger};
pub use time_interval::{TimeInterval, TimeUnit};
pub use transaction::{Transaction, TransactionKind};
