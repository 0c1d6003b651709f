#![doc(test(attr(deny(warnings))))]

//! Ledger Core offers foundational account, transaction, and balance
//! reconstruction primitives that power personal-finance summary views.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
