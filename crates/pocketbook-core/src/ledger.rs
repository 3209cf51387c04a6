//! Ordered collection of income and expense entries.

use std::{fmt, sync::Arc};

use pocketbook_domain::{Entry, EntryCategory, EntryDraft};

use crate::{
    time::{Clock, SystemClock},
    validation::validate_draft,
    ValidationErrors,
};

/// Entries in insertion order plus the id sequence that labels them.
///
/// Totals are recomputed from the entries on every call.
#[derive(Clone)]
pub struct Ledger {
    entries: Vec<Entry>,
    last_id: u64,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            last_id: 0,
            clock,
        }
    }

    /// Rehydrates a ledger; new ids continue above the largest restored id.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::from_entries_with_clock(entries, Arc::new(SystemClock))
    }

    pub fn from_entries_with_clock(entries: Vec<Entry>, clock: Arc<dyn Clock>) -> Self {
        let last_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0);
        Self {
            entries,
            last_id,
            clock,
        }
    }

    /// Validates `candidate` and appends it with a fresh id.
    pub fn add_entry(&mut self, candidate: &EntryDraft) -> Result<Entry, ValidationErrors> {
        let valid = validate_draft(candidate)?;
        let entry = Entry::new(
            self.next_id(),
            valid.name,
            valid.amount,
            valid.category,
            valid.date,
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Removes the entry with `id`; returns whether anything was removed.
    pub fn remove_entry(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Takes the entry out of the ledger and hands back its fields for re-editing.
    ///
    /// The entry is gone until the draft is resubmitted through [`Ledger::add_entry`],
    /// which assigns it a new id.
    pub fn edit_entry(&mut self, id: u64) -> Option<EntryDraft> {
        let index = self.position(id)?;
        let entry = self.entries.remove(index);
        Some(entry.to_draft())
    }

    /// Income minus expenses.
    pub fn total(&self) -> f64 {
        compensated_sum(self.entries.iter().map(Entry::signed_amount))
    }

    pub fn income_total(&self) -> f64 {
        self.category_total(EntryCategory::Income)
    }

    pub fn expense_total(&self) -> f64 {
        self.category_total(EntryCategory::Expense)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn category_total(&self, category: EntryCategory) -> f64 {
        compensated_sum(
            self.entries
                .iter()
                .filter(|entry| entry.category == category)
                .map(|entry| entry.amount),
        )
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.clock.now_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("entries", &self.entries)
            .field("last_id", &self.last_id)
            .finish_non_exhaustive()
    }
}

/// Neumaier summation. Once the running sum overflows, the plain IEEE result
/// is returned so an infinite total stays infinite.
pub(crate) fn compensated_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for value in values {
        let next = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - next) + value;
        } else {
            compensation += (value - next) + sum;
        }
        sum = next;
    }
    if sum.is_finite() {
        sum + compensation
    } else {
        sum
    }
}
