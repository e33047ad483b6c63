//! paychat - chat-style payroll and customer order reports
//!
//! This crate turns free-text questions such as "Show me payroll for this
//! month" or "Find orders for Alice Johnson" into structured queries, and
//! answers them from a `SQLite` report database.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PaychatError;
pub use features::nlp::{parse_query, ParsedQuery};
