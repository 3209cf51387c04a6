//! Names of the records mirrored to the key-value store.

/// Ordered array of ledger entries.
pub const RECORDS_KEY: &str = "records-data";
/// In-progress entry form.
pub const FORM_KEY: &str = "form-data";
/// Savings goal amount.
pub const TARGET_KEY: &str = "target-savings";
/// Accumulated savings balance.
pub const SAVINGS_KEY: &str = "current-savings";

pub const ALL_KEYS: [&str; 4] = [RECORDS_KEY, FORM_KEY, TARGET_KEY, SAVINGS_KEY];
