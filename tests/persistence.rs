use std::path::PathBuf;

use budget_rocket::models::{Budget, Entry, Report};
use budget_rocket::storage::{self, BudgetStore, LoadPolicy};
use chrono::NaiveDate;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn date(year: i32, month0: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap()
}

fn check_entry(entry: &Entry, description: &str, amount: f64, year: i32, month0: u32, day: u32) {
    assert_eq!(entry.description(), description);
    assert_eq!(entry.amount(), amount);
    assert_eq!(entry.year(), year);
    assert_eq!(entry.month0(), month0);
    assert_eq!(entry.day(), day);
}

fn check_expenses(report: &Report) {
    let expenses = report.all_entries();
    check_entry(&expenses[0], "test expense 1", 100.0, 2020, 10, 25);
    check_entry(&expenses[1], "test expense 2", 1234.56, 1995, 2, 14);
    check_entry(&expenses[2], "test expense 3", 1.50, 2008, 5, 30);
}

fn check_incomes(report: &Report) {
    let incomes = report.all_entries();
    check_entry(&incomes[0], "test income 1", 14100.0, 2019, 8, 29);
    check_entry(&incomes[1], "test income 2", 2000.00, 2020, 2, 1);
    check_entry(&incomes[2], "test income 3", 340.00, 2001, 10, 20);
}

#[test]
fn reader_non_existent_file() {
    let store = BudgetStore::new(fixture("noSuchFile.json"));
    let err = store.load().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn reader_empty_budget() {
    let budget = BudgetStore::new(fixture("testReaderEmptyBudget.json"))
        .load()
        .unwrap();
    assert!(budget.expense_report().is_empty());
    assert!(budget.income_report().is_empty());
}

#[test]
fn reader_general_budget() {
    let budget = BudgetStore::new(fixture("testReaderGeneralBudget.json"))
        .load()
        .unwrap();

    assert_eq!(budget.expense_report().size(), 3);
    assert_eq!(budget.income_report().size(), 3);

    check_expenses(budget.expense_report());
    check_incomes(budget.income_report());
}

#[test]
fn writer_general_budget() {
    let mut budget = Budget::new();
    budget
        .add_expense(Entry::expense("test expense 1", 100.0, date(2020, 10, 25)).unwrap())
        .unwrap();
    budget
        .add_expense(Entry::expense("test expense 2", 1234.56, date(1995, 2, 14)).unwrap())
        .unwrap();
    budget
        .add_expense(Entry::expense("test expense 3", 1.50, date(2008, 5, 30)).unwrap())
        .unwrap();
    budget
        .add_income(Entry::income("test income 1", 14100.0, date(2019, 8, 29)).unwrap())
        .unwrap();
    budget
        .add_income(Entry::income("test income 2", 2000.00, date(2020, 2, 1)).unwrap())
        .unwrap();
    budget
        .add_income(Entry::income("test income 3", 340.00, date(2001, 10, 20)).unwrap())
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let store = BudgetStore::new(temp_dir.path().join("testWriterGeneralBudget.json"));
    store.save(&budget).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.expense_report().size(), 3);
    assert_eq!(loaded.income_report().size(), 3);
    check_expenses(loaded.expense_report());
    check_incomes(loaded.income_report());
}

#[test]
fn rewritten_fixture_loads_identically() {
    let original = BudgetStore::new(fixture("testReaderGeneralBudget.json"))
        .load()
        .unwrap();

    let reloaded = storage::from_json(&storage::to_json(&original).unwrap()).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn lenient_load_from_file_skips_bad_entries() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("budget.json");
    std::fs::write(
        &path,
        r#"{"expenseReport": {"entries": [
               {"description": "   ", "amount": 1, "date": {"year": 2020, "month": 0, "day": 1}}
           ]},
           "incomeReport": {"entries": [
               {"description": "pay", "amount": 10, "date": {"year": 2020, "month": 0, "day": 1}}
           ]}}"#,
    )
    .unwrap();

    let store = BudgetStore::new(&path);
    assert!(store.load().unwrap_err().is_validation());

    let budget = store.load_with(LoadPolicy::Lenient).unwrap();
    assert!(budget.expense_report().is_empty());
    assert_eq!(budget.income_report().size(), 1);
    assert!(budget.is_surplus());
}
