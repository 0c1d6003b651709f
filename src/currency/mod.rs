//! Currency codes, minor-unit precision, and the single rounding rule used
//! by every monetary computation in the crate.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
///
/// Codes are stored uppercased but are not validated against a registry; the
/// ledger trusts whatever code the account was created with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Rounds an amount to the currency's minor units using banker's rounding.
///
/// This is the only rounding rule in the crate; amounts are never truncated.
pub fn round_minor(amount: Decimal, code: &CurrencyCode) -> Decimal {
    amount.round_dp_with_strategy(
        minor_units_for(code.as_str()) as u32,
        RoundingStrategy::MidpointNearestEven,
    )
}

/// Formats an amount with its currency symbol for logs and summaries.
pub fn format_amount(amount: Decimal, code: &CurrencyCode) -> String {
    let rounded = round_minor(amount, code);
    if rounded.is_sign_negative() {
        format!("-{}{}", symbol_for(code.as_str()), rounded.abs())
    } else {
        format!("{}{}", symbol_for(code.as_str()), rounded)
    }
}
