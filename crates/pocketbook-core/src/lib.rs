//! pocketbook-core
//!
//! Ledger and savings models plus the aggregate calculations built on them.
//! Depends on pocketbook-domain. No CLI, no terminal I/O; persistence is reached
//! only through the [`storage::KeyValueStore`] capability.

pub mod error;
pub mod format;
pub mod ledger;
pub mod savings;
pub mod storage;
pub mod summary;
pub mod time;
pub mod validation;

pub use error::{StoreError, ValidationError, ValidationErrors};
pub use format::format_amount;
pub use ledger::Ledger;
pub use savings::{Savings, DISPLAY_PROGRESS_CAP};
pub use storage::{KeyValueStore, MemoryStore};
pub use summary::{net_total, BalanceStatus, Summary};
pub use time::{Clock, SystemClock};

#[cfg(test)]
mod tests;
