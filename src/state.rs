//! Session state mirrored to a key-value store.
//!
//! [`AppState`] owns the ledger, the savings model and the entry draft. Each
//! successful mutation rewrites the affected record in full; a failed write is
//! logged and counted but never undoes the in-memory change.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use pocketbook_core::{
    net_total, validation::validate_stored_entries, Clock, KeyValueStore, Ledger, Savings,
    StoreError, Summary, SystemClock, ValidationError, ValidationErrors,
};
use pocketbook_domain::{
    keys::{FORM_KEY, RECORDS_KEY, SAVINGS_KEY, TARGET_KEY},
    DraftField, Entry, EntryDraft, SavingsState,
};

pub struct AppState<S: KeyValueStore> {
    store: S,
    ledger: Ledger,
    savings: Savings,
    draft: EntryDraft,
    failed_writes: usize,
}

impl<S: KeyValueStore> AppState<S> {
    /// Rehydrates every record from `store`, falling back to defaults per key.
    pub fn load(store: S) -> Self {
        Self::load_with_clock(store, Arc::new(SystemClock))
    }

    pub fn load_with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        let entries = read_entries(&store);
        let draft: EntryDraft = read_record(&store, FORM_KEY).unwrap_or_default();
        let target: f64 = read_record(&store, TARGET_KEY).unwrap_or_default();
        let accumulated: f64 = read_record(&store, SAVINGS_KEY).unwrap_or_default();

        tracing::debug!(
            entries = entries.len(),
            target,
            accumulated,
            "tracker state loaded"
        );

        Self {
            store,
            ledger: Ledger::from_entries_with_clock(entries, clock),
            savings: Savings::from_state(SavingsState::new(target, accumulated)),
            draft,
            failed_writes: 0,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn savings(&self) -> &Savings {
        &self.savings
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    pub fn net_total(&self) -> f64 {
        net_total(&self.ledger, &self.savings)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.ledger, &self.savings)
    }

    /// Number of store writes that failed since the state was loaded.
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn add_entry(&mut self, candidate: &EntryDraft) -> Result<Entry, ValidationErrors> {
        let entry = self.ledger.add_entry(candidate)?;
        tracing::debug!(id = entry.id, category = %entry.category, "entry added");
        self.persist_records();
        Ok(entry)
    }

    /// Adds the current draft as an entry and clears the draft.
    ///
    /// The draft is kept as-is when validation fails.
    pub fn submit_draft(&mut self) -> Result<Entry, ValidationErrors> {
        let candidate = self.draft.clone();
        let entry = self.add_entry(&candidate)?;
        self.draft = EntryDraft::default();
        self.persist_draft();
        Ok(entry)
    }

    pub fn remove_entry(&mut self, id: u64) -> bool {
        let removed = self.ledger.remove_entry(id);
        if removed {
            tracing::debug!(id, "entry removed");
            self.persist_records();
        }
        removed
    }

    /// Moves the entry into the draft, removing it from the ledger.
    pub fn edit_entry(&mut self, id: u64) -> Option<EntryDraft> {
        let draft = self.ledger.edit_entry(id)?;
        tracing::debug!(id, "entry moved into draft");
        self.persist_records();
        self.draft = draft.clone();
        self.persist_draft();
        Some(draft)
    }

    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
        self.persist_draft();
    }

    pub fn clear_draft(&mut self) {
        self.draft = EntryDraft::default();
        self.persist_draft();
    }

    pub fn set_target(&mut self, value: f64) -> Result<(), ValidationError> {
        self.savings.set_target(value)?;
        self.persist_target();
        Ok(())
    }

    pub fn reset_target(&mut self) {
        self.savings.reset_target();
        self.persist_target();
    }

    pub fn transfer(&mut self, amount: f64) -> Result<(), ValidationError> {
        self.savings.transfer(amount)?;
        tracing::debug!(amount, accumulated = self.savings.accumulated(), "savings transfer");
        self.persist_savings();
        Ok(())
    }

    pub fn reset_savings(&mut self) {
        self.savings.reset_savings();
        self.persist_savings();
    }

    fn persist_records(&mut self) {
        let outcome = write_record(&mut self.store, RECORDS_KEY, self.ledger.entries());
        self.note_outcome(RECORDS_KEY, outcome);
    }

    fn persist_draft(&mut self) {
        let outcome = write_record(&mut self.store, FORM_KEY, &self.draft);
        self.note_outcome(FORM_KEY, outcome);
    }

    fn persist_target(&mut self) {
        let outcome = write_record(&mut self.store, TARGET_KEY, &self.savings.target());
        self.note_outcome(TARGET_KEY, outcome);
    }

    fn persist_savings(&mut self) {
        let outcome = write_record(&mut self.store, SAVINGS_KEY, &self.savings.accumulated());
        self.note_outcome(SAVINGS_KEY, outcome);
    }

    fn note_outcome(&mut self, key: &str, outcome: Result<(), StoreError>) {
        if let Err(err) = outcome {
            self.failed_writes += 1;
            tracing::warn!(key, error = %err, "failed to persist record; keeping in-memory state");
        }
    }
}

fn read_record<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored record is corrupt; using default");
                None
            }
        },
        Ok(None) => {
            tracing::debug!(key, "no stored record; using default");
            None
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read stored record; using default");
            None
        }
    }
}

/// Stored entries that break an entry rule are dropped as a whole array.
fn read_entries(store: &impl KeyValueStore) -> Vec<Entry> {
    let entries: Vec<Entry> = read_record(store, RECORDS_KEY).unwrap_or_default();
    match validate_stored_entries(&entries) {
        Ok(()) => entries,
        Err(err) => {
            tracing::warn!(key = RECORDS_KEY, error = %err, "stored records are invalid; using default");
            Vec::new()
        }
    }
}

fn write_record<T: Serialize + ?Sized>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
