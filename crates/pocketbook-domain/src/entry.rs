//! Domain models for ledger entries and the entry form draft.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub name: String,
    pub amount: f64,
    pub category: EntryCategory,
    /// ISO calendar date, kept as entered.
    pub date: String,
}

impl Entry {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        amount: f64,
        category: EntryCategory,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            category,
            date: date.into(),
        }
    }

    /// Amount with the sign it contributes to the ledger total.
    pub fn signed_amount(&self) -> f64 {
        match self.category {
            EntryCategory::Income => self.amount,
            EntryCategory::Expense => -self.amount,
        }
    }

    /// Turns the entry back into editable form fields.
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            name: self.name.clone(),
            amount: self.amount.to_string(),
            category: self.category.to_string(),
            date: self.date.clone(),
        }
    }
}

/// Closed set of entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryCategory {
    Income,
    Expense,
}

impl EntryCategory {
    pub const ALL: [EntryCategory; 2] = [EntryCategory::Income, EntryCategory::Expense];

    /// Parses a category label, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Some(EntryCategory::Income),
            "expense" => Some(EntryCategory::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryCategory::Income => "Income",
            EntryCategory::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// The in-progress entry form. Every field is raw user text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

impl EntryDraft {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.amount.is_empty()
            && self.category.is_empty()
            && self.date.is_empty()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Amount => &self.amount,
            DraftField::Category => &self.category,
            DraftField::Date => &self.date,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Amount => self.amount = value,
            DraftField::Category => self.category = value,
            DraftField::Date => self.date = value,
        }
    }
}

/// Addressable fields of an [`EntryDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Amount,
    Category,
    Date,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Amount,
        DraftField::Category,
        DraftField::Date,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(DraftField::Name),
            "amount" => Some(DraftField::Amount),
            "category" => Some(DraftField::Category),
            "date" => Some(DraftField::Date),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Amount => "amount",
            DraftField::Category => "category",
            DraftField::Date => "date",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
