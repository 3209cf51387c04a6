use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::{net_total, BalanceStatus, Clock, Ledger, Savings, Summary};
use pocketbook_domain::{EntryCategory, EntryDraft};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_ledger() -> Ledger {
    let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Ledger::with_clock(Arc::new(FixedClock(instant)))
}

fn draft(name: &str, amount: &str, category: &str) -> EntryDraft {
    EntryDraft::new(name, amount, category, "2024-01-01")
}

#[test]
fn add_entry_stores_numeric_amount() {
    let mut ledger = fixed_ledger();

    let entry = ledger
        .add_entry(&EntryDraft::new("Salary", "1000", "Income", "2024-01-01"))
        .expect("valid entry");

    assert_eq!(entry.amount, 1000.0);
    assert_eq!(entry.category, EntryCategory::Income);
    assert_eq!(ledger.entries(), &[entry]);
    assert_eq!(ledger.total(), 1000.0);
}

#[test]
fn add_entry_rejects_invalid_candidate_without_mutation() {
    let mut ledger = fixed_ledger();
    ledger.add_entry(&draft("Salary", "1000", "Income")).unwrap();

    let report = ledger
        .add_entry(&EntryDraft::new("", "0", "Income", "2024-01-02"))
        .unwrap_err();

    assert!(report.contains("name"));
    assert!(report.contains("amount"));
    assert!(!report.contains("category"));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn ids_are_unique_and_increasing_under_a_frozen_clock() {
    let mut ledger = fixed_ledger();
    let first = ledger.add_entry(&draft("A", "1", "Income")).unwrap();
    let second = ledger.add_entry(&draft("B", "2", "Income")).unwrap();
    ledger.remove_entry(second.id);
    let third = ledger.add_entry(&draft("C", "3", "Income")).unwrap();

    assert!(second.id > first.id);
    assert!(third.id > second.id, "removed ids are never reissued");
}

#[test]
fn rehydrated_ledger_continues_after_largest_id() {
    let mut source = fixed_ledger();
    source.add_entry(&draft("A", "1", "Income")).unwrap();
    let last = source.add_entry(&draft("B", "1", "Expense")).unwrap();

    let instant = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let mut restored =
        Ledger::from_entries_with_clock(source.entries().to_vec(), Arc::new(FixedClock(instant)));
    let next = restored.add_entry(&draft("C", "1", "Income")).unwrap();

    assert_eq!(next.id, last.id + 1);
}

#[test]
fn total_is_independent_of_insertion_order() {
    let rows = [
        ("Salary", "1000", "Income"),
        ("Rent", "300", "Expense"),
        ("Gift", "0.5", "Income"),
        ("Coffee", "4.25", "Expense"),
    ];

    let mut forward = fixed_ledger();
    for (name, amount, category) in rows {
        forward.add_entry(&draft(name, amount, category)).unwrap();
    }
    let mut backward = fixed_ledger();
    for (name, amount, category) in rows.iter().rev() {
        backward.add_entry(&draft(name, amount, category)).unwrap();
    }

    assert_eq!(forward.total(), 696.25);
    assert_eq!(forward.total(), backward.total());
    assert_eq!(forward.income_total(), 1000.5);
    assert_eq!(forward.expense_total(), 304.25);
}

#[test]
fn remove_entry_is_idempotent() {
    let mut ledger = fixed_ledger();
    let kept = ledger.add_entry(&draft("Salary", "1000", "Income")).unwrap();
    let gone = ledger.add_entry(&draft("Rent", "300", "Expense")).unwrap();

    assert!(ledger.remove_entry(gone.id));
    assert!(!ledger.remove_entry(gone.id));
    assert_eq!(ledger.entries(), &[kept]);
}

#[test]
fn edit_entry_removes_exactly_once() {
    let mut ledger = fixed_ledger();
    let entry = ledger.add_entry(&draft("Rent", "300", "Expense")).unwrap();

    let draft = ledger.edit_entry(entry.id).expect("draft for existing entry");
    assert_eq!(draft, EntryDraft::new("Rent", "300", "Expense", "2024-01-01"));
    assert!(ledger.is_empty());

    assert_eq!(ledger.edit_entry(entry.id), None);
    assert_eq!(ledger.edit_entry(424242), None);
}

#[test]
fn resubmitted_draft_returns_with_new_id() {
    let mut ledger = fixed_ledger();
    let original = ledger.add_entry(&draft("Rent", "300", "Expense")).unwrap();

    let draft = ledger.edit_entry(original.id).unwrap();
    let resubmitted = ledger.add_entry(&draft).unwrap();

    assert_ne!(resubmitted.id, original.id);
    assert_eq!(resubmitted.amount, original.amount);
    assert_eq!(ledger.total(), -300.0);
}

#[test]
fn net_total_subtracts_transferred_savings() {
    let mut ledger = fixed_ledger();
    let mut savings = Savings::new();
    ledger.add_entry(&draft("Salary", "1000", "Income")).unwrap();
    ledger.add_entry(&draft("Rent", "300", "Expense")).unwrap();
    assert_eq!(ledger.total(), 700.0);

    savings.transfer(200.0).unwrap();

    assert_eq!(savings.accumulated(), 200.0);
    assert_eq!(net_total(&ledger, &savings), 500.0);
}

#[test]
fn overspending_savings_flags_warning() {
    let mut ledger = fixed_ledger();
    let mut savings = Savings::new();
    ledger.add_entry(&draft("Salary", "100", "Income")).unwrap();
    savings.transfer(150.0).unwrap();
    savings.set_target(300.0).unwrap();

    let summary = Summary::compute(&ledger, &savings);

    assert_eq!(summary.net_total, -50.0);
    assert_eq!(summary.status, BalanceStatus::Warning);
    assert_eq!(summary.progress_percent, 50.0);
    assert!(!summary.target_reached);
    assert_eq!(summary.entry_count, 1);
}

#[test]
fn set_target_failure_keeps_previous_value() {
    let mut savings = Savings::new();
    savings.set_target(1000.0).unwrap();

    let err = savings.set_target(-5.0).unwrap_err();

    assert_eq!(err.field, "target");
    assert_eq!(savings.target(), 1000.0);

    savings.reset_target();
    assert_eq!(savings.target(), 0.0);
}

#[test]
fn overflowing_income_total_is_infinite_not_nan() {
    let mut ledger = fixed_ledger();
    ledger.add_entry(&draft("Windfall", "1e308", "Income")).unwrap();
    ledger.add_entry(&draft("Windfall", "1e308", "Income")).unwrap();

    let summary = Summary::compute(&ledger, &Savings::new());

    assert_eq!(ledger.total(), f64::INFINITY);
    assert_eq!(summary.net_total, f64::INFINITY);
    assert_eq!(summary.status, BalanceStatus::Healthy);
}

#[test]
fn overflowing_expense_total_warns() {
    let mut ledger = fixed_ledger();
    ledger.add_entry(&draft("Loss", "1e308", "Expense")).unwrap();
    ledger.add_entry(&draft("Loss", "1e308", "Expense")).unwrap();

    let summary = Summary::compute(&ledger, &Savings::new());

    assert_eq!(summary.total, f64::NEG_INFINITY);
    assert_eq!(summary.status, BalanceStatus::Warning);
}
