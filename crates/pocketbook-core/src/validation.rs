//! Input checks shared by the ledger and savings models.

use std::collections::HashSet;

use pocketbook_domain::{Entry, EntryCategory, EntryDraft};

use crate::{ValidationError, ValidationErrors};

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_DATE: &str = "date";
pub const FIELD_TARGET: &str = "target";
pub const FIELD_TRANSFER: &str = "transfer";

/// Entry fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub name: String,
    pub amount: f64,
    pub category: EntryCategory,
    pub date: String,
}

/// Parses user text as a positive, finite amount.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::new(field, format!("{field} must be a number")))?;
    require_positive(field, value)
}

/// Accepts only finite values strictly greater than zero.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, format!("{field} must be a number")));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(
            field,
            format!("{field} must be greater than zero"),
        ));
    }
    Ok(value)
}

pub fn require_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(field, format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn parse_category(raw: &str) -> Result<EntryCategory, ValidationError> {
    EntryCategory::parse(raw).ok_or_else(|| {
        let labels: Vec<String> = EntryCategory::ALL.iter().map(ToString::to_string).collect();
        ValidationError::new(
            FIELD_CATEGORY,
            format!("category must be {}", labels.join(" or ")),
        )
    })
}

/// Validates every field of `draft`, collecting all failures.
pub fn validate_draft(draft: &EntryDraft) -> Result<ValidEntry, ValidationErrors> {
    let mut errors = Vec::new();

    let name = require_text(FIELD_NAME, &draft.name).map_err(|err| errors.push(err));
    let amount = parse_amount(FIELD_AMOUNT, &draft.amount).map_err(|err| errors.push(err));
    let category = parse_category(&draft.category).map_err(|err| errors.push(err));
    let date = require_text(FIELD_DATE, &draft.date).map_err(|err| errors.push(err));

    if let (Ok(name), Ok(amount), Ok(category), Ok(date)) = (name, amount, category, date) {
        return Ok(ValidEntry {
            name,
            amount,
            category,
            date,
        });
    }
    Err(ValidationErrors::new(errors))
}

/// Checks entries read back from storage: non-empty text, positive finite
/// amounts and unique ids.
pub fn validate_stored_entries(entries: &[Entry]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(ValidationError::new(
                FIELD_ID,
                format!("id {} appears more than once", entry.id),
            ));
        }
        require_text(FIELD_NAME, &entry.name)?;
        require_positive(FIELD_AMOUNT, entry.amount)?;
        require_text(FIELD_DATE, &entry.date)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_decimal_text() {
        assert_eq!(parse_amount(FIELD_AMOUNT, " 12.75 ").unwrap(), 12.75);
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        for raw in ["", "   ", "abc", "0", "-5", "NaN", "inf"] {
            let err = parse_amount(FIELD_TRANSFER, raw).unwrap_err();
            assert_eq!(err.field, FIELD_TRANSFER, "input {raw:?}");
        }
    }

    #[test]
    fn validate_draft_reports_every_failing_field() {
        let draft = EntryDraft::new("  ", "-1", "Gift", "");
        let report = validate_draft(&draft).unwrap_err();
        assert_eq!(
            report.fields(),
            vec![FIELD_NAME, FIELD_AMOUNT, FIELD_CATEGORY, FIELD_DATE]
        );
    }

    #[test]
    fn category_error_lists_known_categories() {
        let err = parse_category("Gift").unwrap_err();
        assert_eq!(err.message, "category must be Income or Expense");
    }

    #[test]
    fn stored_entries_must_keep_entry_rules() {
        let salary = Entry::new(1, "Salary", 1000.0, EntryCategory::Income, "2024-01-01");
        assert!(validate_stored_entries(&[salary.clone()]).is_ok());

        let negative = Entry::new(2, "Refund", -5.0, EntryCategory::Income, "2024-01-01");
        assert_eq!(
            validate_stored_entries(&[salary.clone(), negative]).unwrap_err().field,
            FIELD_AMOUNT
        );

        let unnamed = Entry::new(3, " ", 5.0, EntryCategory::Expense, "2024-01-01");
        assert_eq!(validate_stored_entries(&[unnamed]).unwrap_err().field, FIELD_NAME);

        let undated = Entry::new(4, "Rent", 5.0, EntryCategory::Expense, "");
        assert_eq!(validate_stored_entries(&[undated]).unwrap_err().field, FIELD_DATE);

        let twin = Entry::new(1, "Bonus", 10.0, EntryCategory::Income, "2024-01-02");
        assert_eq!(validate_stored_entries(&[salary, twin]).unwrap_err().field, FIELD_ID);
    }

    #[test]
    fn validate_draft_normalizes_fields() {
        let draft = EntryDraft::new(" Salary ", "1000", "income", " 2024-01-01 ");
        let valid = validate_draft(&draft).unwrap();
        assert_eq!(valid.name, "Salary");
        assert_eq!(valid.amount, 1000.0);
        assert_eq!(valid.category, EntryCategory::Income);
        assert_eq!(valid.date, "2024-01-01");
    }
}
