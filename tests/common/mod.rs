use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use pocketbook_core::Clock;
use pocketbook_storage_json::JsonFileStore;
use tempfile::TempDir;

/// Creates a file store in a fresh temporary directory; keep the guard alive.
pub fn setup_test_store() -> (JsonFileStore, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonFileStore::new(temp.path().join("data")).expect("create json store");
    (store, temp)
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    ))
}
