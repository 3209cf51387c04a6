use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook_cli").unwrap();
    cmd.env("POCKETBOOK_HOME", home)
        .env("POCKETBOOK_CLI_SCRIPT", "1")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = tempdir().unwrap();
    let input = "add Salary 1000 Income 2024-01-01\n\
                 add Rent 300 Expense 2024-01-02\n\
                 transfer 200\n\
                 target 1000\n\
                 summary\n\
                 exit\n";

    cli(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added Income `Salary` ($1000.00)"))
        .stdout(contains("$500.00"))
        .stdout(contains("20% of target"));

    let records = std::fs::read_to_string(home.path().join("data").join("records-data.json"))
        .expect("records persisted");
    assert!(records.contains("\"Salary\""));
    let savings = std::fs::read_to_string(home.path().join("data").join("current-savings.json"))
        .expect("savings persisted");
    assert_eq!(savings.trim(), "200.0");
}

#[test]
fn script_mode_restores_previous_session() {
    let home = tempdir().unwrap();

    cli(home.path())
        .write_stdin("add Coffee 4.5 Expense 2024-02-01\nexit\n")
        .assert()
        .success();

    cli(home.path())
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(contains("Coffee"))
        .stdout(contains("$4.50"));
}

#[test]
fn script_mode_reports_validation_errors() {
    let home = tempdir().unwrap();

    cli(home.path())
        .write_stdin("add \"\" abc Income 2024-01-01\ntarget 0\nexit\n")
        .assert()
        .success()
        .stdout(contains("name: name is required"))
        .stdout(contains("amount: amount must be a number"))
        .stdout(contains("target: target must be greater than zero"));
}

#[test]
fn script_mode_suggests_close_commands() {
    let home = tempdir().unwrap();

    cli(home.path())
        .write_stdin("sumary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn config_file_changes_currency_symbol() {
    let home = tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "currency_symbol": "€", "ui_color_enabled": false }"#,
    )
    .unwrap();

    cli(home.path())
        .write_stdin("transfer 12.5\nexit\n")
        .assert()
        .success()
        .stdout(contains("€12.50"));
}
