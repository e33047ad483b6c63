use assert_cmd::Command;
use chrono::NaiveDate;
use paychat::storage::{Database, NewOrder};
use predicates::prelude::*;
use tempfile::TempDir;

fn paychat(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paychat").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("PAYCHAT_DB")
        .env_remove("PAYCHAT_CONFIG");
    cmd
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_db(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("reports.db");
    let db = Database::open_at(&path).unwrap();

    let ann = db.add_employee("Ann Closer", "ann@example.com", Some("Sales")).unwrap();
    let ben = db.add_employee("Ben Setter", "ben@example.com", None).unwrap();
    db.add_payout(ann, Some(1200.0), "Commission", date(2024, 2, 2)).unwrap();
    db.add_payout(ben, Some(34.5), "Commission", date(2024, 2, 29)).unwrap();
    db.add_payout(ben, Some(500.0), "Bonus", date(2024, 3, 1)).unwrap();

    db.add_order(&NewOrder {
        pid: 501,
        customer_name: "Alice Johnson".to_string(),
        email: Some("alice@example.com".to_string()),
        contract_price: Some(32_500.0),
        stage: Some("Permitting".to_string()),
        closer: Some(ann),
        ..NewOrder::default()
    })
    .unwrap();

    path
}

#[test]
fn parse_payroll_json() {
    let home = TempDir::new().unwrap();
    paychat(&home)
        .args(["parse", "payroll this month", "--today", "2024-02-15", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""query_type": "payroll""#))
        .stdout(predicate::str::contains(r#""start_date": "2024-02-01""#))
        .stdout(predicate::str::contains(r#""end_date": "2024-02-29""#));
}

#[test]
fn parse_customer_from_words() {
    let home = TempDir::new().unwrap();
    paychat(&home)
        .args(["parse", "Show", "orders", "for", "Alice", "Johnson", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""customer_name": "Alice Johnson""#));
}

#[test]
fn parse_missing_customer_reports_guidance() {
    let home = TempDir::new().unwrap();
    paychat(&home)
        .args(["parse", "orders", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""error": true"#))
        .stdout(predicate::str::contains("Please specify a customer name"));
}

#[test]
fn ask_payroll_summary() {
    let home = TempDir::new().unwrap();
    let db = seeded_db(&home);

    paychat(&home)
        .args(["ask", "payroll this month", "--today", "2024-02-15", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Payroll Summary for this month"))
        .stdout(predicate::str::contains("**Total Amount:** $1,234.50"))
        .stdout(predicate::str::contains("(2 transactions)"))
        .stdout(predicate::str::contains("**Employees Paid:** 2"))
        .stdout(predicate::str::contains("2024-02-01 to 2024-02-29"));
}

#[test]
fn ask_customer_orders_via_env_db() {
    let home = TempDir::new().unwrap();
    let db = seeded_db(&home);

    paychat(&home)
        .env("PAYCHAT_DB", &db)
        .args(["ask", "Find orders for alice johnson", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": true"#))
        .stdout(predicate::str::contains("Order Found for Alice Johnson"))
        .stdout(predicate::str::contains("$32,500.00"));
}

#[test]
fn ask_unknown_customer() {
    let home = TempDir::new().unwrap();
    let db = seeded_db(&home);

    paychat(&home)
        .args(["ask", "orders for zed zimmer", "--db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No orders found for customer matching 'Zed Zimmer'.",
        ));
}

#[test]
fn ask_empty_message_fails() {
    let home = TempDir::new().unwrap();
    paychat(&home)
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty query"));
}

#[test]
fn config_sets_default_output() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");
    std::fs::write(&config, "general:\n  default_output: json\n").unwrap();

    paychat(&home)
        .args(["parse", "hello", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""query_type": "unknown""#));
}

#[test]
fn invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.yaml");
    std::fs::write(&config, "general: [").unwrap();

    paychat(&home)
        .args(["parse", "hello", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    paychat(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paychat"));
}
