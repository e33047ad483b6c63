//! Database migrations for paychat.
//!
//! Each migration upgrades the schema by one version and runs automatically
//! when the database is opened. Table and column names follow the reporting
//! database the chat answers from.

use rusqlite::Connection;
use tracing::debug;

use crate::error::PaychatError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, PaychatError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| PaychatError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), PaychatError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| PaychatError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), PaychatError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        debug!(version, "running migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), PaychatError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(PaychatError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// - `user_employees`: staff who receive payouts and close orders
/// - `payout`: individual payroll payments, dated by `PayingDate`
/// - `orders`: customer projects
fn migrate_v1(conn: &Connection) -> Result<(), PaychatError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS user_employees (
            EmpID INTEGER PRIMARY KEY,
            Name TEXT NOT NULL,
            Email TEXT NOT NULL UNIQUE,
            Position TEXT,
            Status TEXT NOT NULL DEFAULT 'Active'
        );

        -- Dates are ISO text so BETWEEN compares calendar order
        CREATE TABLE IF NOT EXISTS payout (
            PayoutID INTEGER PRIMARY KEY AUTOINCREMENT,
            EmpID INTEGER NOT NULL REFERENCES user_employees(EmpID),
            Amount REAL,
            Type TEXT NOT NULL,
            PayingDate TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_payout_paying_date
        ON payout(PayingDate);

        CREATE TABLE IF NOT EXISTS orders (
            PID INTEGER PRIMARY KEY,
            CustomerName TEXT NOT NULL,
            Email TEXT,
            Phone TEXT,
            ContractPrice REAL,
            SystemSize TEXT,
            Stage TEXT,
            Redline TEXT,
            Closer INTEGER REFERENCES user_employees(EmpID)
        );

        CREATE INDEX IF NOT EXISTS idx_orders_customer_name
        ON orders(CustomerName);
        ",
    )
    .map_err(|e| PaychatError::Database(format!("Migration v1 failed: {e}")))
}
