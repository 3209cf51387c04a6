//! pocketbook-domain
//!
//! Pure domain models (Entry, EntryDraft, SavingsState) and the persisted record keys.
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod entry;
pub mod keys;
pub mod savings;

pub use entry::*;
pub use savings::*;
