//! `SQLite` report database.
//!
//! Holds the employees, payroll payouts and customer orders that chat
//! questions are answered from. The default location is
//! `~/.paychat/paychat.db`.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::{debug, trace};

use crate::config::Paths;
use crate::core::{DateRange, OrderRecord, PayoutTypeTotal, ReportSource, ISO_DATE_FORMAT};
use crate::error::PaychatError;

use super::migrations;

/// Fields for inserting an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOrder {
    pub pid: i64,
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contract_price: Option<f64>,
    pub system_size: Option<String>,
    pub stage: Option<String>,
    pub redline: Option<String>,
    /// `EmpID` of the closing employee.
    pub closer: Option<i64>,
}

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the default location under `paths`.
    ///
    /// Creates the data directory and database file and runs migrations if
    /// necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the database
    /// cannot be opened, or migrations fail.
    pub fn open(paths: &Paths) -> Result<Self, PaychatError> {
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, PaychatError> {
        debug!(path = %path.display(), "opening report database");
        let conn = Connection::open(path).map_err(|e| {
            PaychatError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, PaychatError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            PaychatError::Database(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, PaychatError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| PaychatError::Database(format!("Failed to enable foreign keys: {e}")))?;

        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, PaychatError> {
        migrations::get_version(&self.conn)
    }

    /// Insert an active employee and return its `EmpID`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. on a duplicate email.
    pub fn add_employee(
        &self,
        name: &str,
        email: &str,
        position: Option<&str>,
    ) -> Result<i64, PaychatError> {
        self.conn
            .execute(
                "INSERT INTO user_employees (Name, Email, Position) VALUES (?1, ?2, ?3)",
                params![name, email, position],
            )
            .map_err(|e| PaychatError::Database(format!("Failed to add employee: {e}")))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Record a payroll payment and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. for an unknown employee.
    pub fn add_payout(
        &self,
        emp_id: i64,
        amount: Option<f64>,
        payout_type: &str,
        paying_date: NaiveDate,
    ) -> Result<i64, PaychatError> {
        self.conn
            .execute(
                "INSERT INTO payout (EmpID, Amount, Type, PayingDate) VALUES (?1, ?2, ?3, ?4)",
                params![
                    emp_id,
                    amount,
                    payout_type,
                    paying_date.format(ISO_DATE_FORMAT).to_string()
                ],
            )
            .map_err(|e| PaychatError::Database(format!("Failed to add payout: {e}")))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. on a duplicate project id.
    pub fn add_order(&self, order: &NewOrder) -> Result<(), PaychatError> {
        self.conn
            .execute(
                "INSERT INTO orders
                    (PID, CustomerName, Email, Phone, ContractPrice, SystemSize, Stage, Redline, Closer)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    order.pid,
                    order.customer_name,
                    order.email,
                    order.phone,
                    order.contract_price,
                    order.system_size,
                    order.stage,
                    order.redline,
                    order.closer,
                ],
            )
            .map_err(|e| PaychatError::Database(format!("Failed to add order: {e}")))?;
        Ok(())
    }
}

fn range_params(range: &DateRange) -> (String, String) {
    (
        range.start().format(ISO_DATE_FORMAT).to_string(),
        range.end().format(ISO_DATE_FORMAT).to_string(),
    )
}

/// Build a `LIKE` pattern matching `needle` anywhere, with wildcards escaped.
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<OrderRecord> {
    Ok(OrderRecord {
        pid: row.get(0)?,
        customer_name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        contract_price: row.get(4)?,
        system_size: row.get(5)?,
        stage: row.get(6)?,
        redline: row.get(7)?,
        closer_name: row.get(8)?,
    })
}

impl ReportSource for Database {
    fn payroll_breakdown(&self, range: &DateRange) -> Result<Vec<PayoutTypeTotal>, PaychatError> {
        let (start, end) = range_params(range);
        trace!(%start, %end, "querying payroll breakdown");

        let mut stmt = self.conn.prepare(
            "SELECT Type, SUM(Amount), COUNT(*), COUNT(DISTINCT EmpID)
             FROM payout
             WHERE PayingDate BETWEEN ?1 AND ?2
             GROUP BY Type
             ORDER BY Type",
        )?;

        let rows = stmt
            .query_map(params![start, end], |row| {
                Ok(PayoutTypeTotal {
                    payout_type: row.get(0)?,
                    total_amount: row.get(1)?,
                    transaction_count: row.get(2)?,
                    employee_count: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn employees_paid(&self, range: &DateRange) -> Result<u32, PaychatError> {
        let (start, end) = range_params(range);

        self.conn
            .query_row(
                "SELECT COUNT(DISTINCT EmpID) FROM payout WHERE PayingDate BETWEEN ?1 AND ?2",
                params![start, end],
                |row| row.get(0),
            )
            .map_err(|e| PaychatError::Database(format!("Failed to count employees paid: {e}")))
    }

    fn orders_for_customer(&self, name: &str) -> Result<Vec<OrderRecord>, PaychatError> {
        trace!(customer = name, "querying customer orders");

        let mut stmt = self.conn.prepare(
            r"SELECT o.PID, o.CustomerName, o.Email, o.Phone, o.ContractPrice,
                     o.SystemSize, o.Stage, o.Redline, e.Name
              FROM orders o
              LEFT JOIN user_employees e ON o.Closer = e.EmpID
              WHERE o.CustomerName LIKE ?1 ESCAPE '\'
              ORDER BY o.PID DESC",
        )?;

        let rows = stmt
            .query_map(params![contains_pattern(name)], order_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}
