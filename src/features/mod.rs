//! Feature implementations for paychat.
//!
//! - Natural language query parsing
//! - Report replies
//! - Shell completions

pub mod nlp;
pub mod report;
pub mod shell;
