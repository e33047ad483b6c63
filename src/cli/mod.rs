//! Command-line interface for paychat.

pub mod args;
pub mod commands;
