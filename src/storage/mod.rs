//! Storage layer for paychat.
//!
//! `SQLite` holds the employees, payouts and orders that reports read.

mod database;
mod migrations;

pub use database::{Database, NewOrder};
