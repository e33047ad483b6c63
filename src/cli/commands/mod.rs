//! Command implementations for paychat.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::cli::args::{AskArgs, OutputFormat, ParseArgs};
use crate::config::{Config, Paths};
use crate::error::PaychatError;
use crate::features::nlp::parse_query;
use crate::features::report::ask as answer_message;
use crate::features::shell::{completion_install_instructions, generate_completions, shell_from_str};
use crate::output::{format_query, format_reply};
use crate::storage::Database;

/// Execute parse command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(args: &ParseArgs, format: OutputFormat) -> Result<String, PaychatError> {
    let query = parse_query(&args.text(), today_or_local(args.today));
    format_query(&query, format)
}

/// Execute ask command
///
/// # Errors
///
/// Returns an error if the message is empty, the database cannot be opened
/// or queried, or output formatting fails.
pub fn ask(
    args: &AskArgs,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, PaychatError> {
    let db = match args.db.as_deref().or(config.database.path.as_deref()) {
        Some(path) => Database::open_at(path)?,
        None => Database::open(paths)?,
    };
    let reply = answer_message(&args.query.text(), today_or_local(args.query.today), &db)?;
    format_reply(&reply, format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown or script generation fails.
pub fn completions(shell: &str, install: bool) -> Result<String, PaychatError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        PaychatError::InvalidInput(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}

/// The date relative periods are measured from.
fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| {
        let today = Local::now().date_naive();
        debug!(%today, "using local date");
        today
    })
}
