#![doc(test(attr(deny(warnings))))]

//! Pocketbook tracks income and expense entries alongside a savings target,
//! keeping every record mirrored to a key-value store.

pub mod cli;
pub mod state;
pub mod utils;

pub use state::AppState;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter.
pub fn init() {
    init_with_filter(&pocketbook_config::Config::default_log_filter());
}

/// Initializes global tracing using `directive` unless `RUST_LOG` is set.
pub fn init_with_filter(directive: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::debug!("Pocketbook tracing initialized.");
    });
}
