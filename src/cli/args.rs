use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::parse_iso_date;

#[derive(Parser)]
#[command(name = "paychat")]
#[command(about = "Ask payroll and customer order questions in plain English")]
#[command(long_about = "paychat - chat-style payroll and customer order reports

Type a question the way you would in a chat window. paychat works out
whether you are asking about payroll or about a customer's orders, pulls
out the date range or customer name, and answers from the report database.

QUICK START:
  paychat ask \"Show me payroll for this month\"
  paychat ask \"payroll from 2024-01-01 to 2024-01-31\"
  paychat ask \"Find orders for Alice Johnson\"
  paychat parse \"payroll last month\"      Show how a question is understood

OUTPUT FORMATS:
  --output pretty    Human-readable output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of ~/.paychat/config.yaml
    #[arg(long, global = true, env = "PAYCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a question from the report database
    ///
    /// # Examples
    ///
    ///   paychat ask "Show me payroll for this month"
    ///   paychat ask payroll between 2024-01-01 and 2024-03-31
    ///   paychat ask "What orders does Bob Smith have"
    ///   paychat ask "orders for acme" --db ./reports.db -o json
    ///
    /// # Supported Questions
    ///
    ///   Payroll:    this week, this month, last month, this year,
    ///               from YYYY-MM-DD to YYYY-MM-DD
    ///   Customers:  orders for <name>, find customer <name>,
    ///               does <name> have any projects
    Ask(AskArgs),

    /// Show how a question is understood, without querying anything
    ///
    /// # Examples
    ///
    ///   paychat parse "payroll last month" --today 2024-01-10
    ///   paychat parse "find customer john doe" -o json
    Parse(ParseArgs),

    /// Generate shell completions
    ///
    /// Example: paychat completions bash > ~/.bash_completion.d/paychat
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for parsing a question.
#[derive(Args)]
pub struct ParseArgs {
    /// The question; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Date that relative periods are measured from (default: today)
    #[arg(long, value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,
}

/// Arguments for answering a question.
#[derive(Args)]
pub struct AskArgs {
    #[command(flatten)]
    pub query: ParseArgs,

    /// Report database (default: database.path from config, then ~/.paychat/paychat.db)
    #[arg(long, env = "PAYCHAT_DB")]
    pub db: Option<PathBuf>,
}

impl ParseArgs {
    /// The message words joined back into one string.
    #[must_use]
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_iso_date(s).ok_or_else(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_joins_words() {
        let cli = Cli::try_parse_from(["paychat", "parse", "orders", "for", "bob", "smith"]).unwrap();
        let Commands::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(args.text(), "orders for bob smith");
        assert_eq!(args.today, None);
    }

    #[test]
    fn test_ask_with_options() {
        let cli = Cli::try_parse_from([
            "paychat",
            "ask",
            "payroll this month",
            "--today",
            "2024-02-15",
            "--db",
            "/tmp/r.db",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask command");
        };
        assert_eq!(args.query.today, NaiveDate::from_ymd_opt(2024, 2, 15));
        assert_eq!(args.db, Some(PathBuf::from("/tmp/r.db")));
    }

    #[test]
    fn test_invalid_today_rejected() {
        let result = Cli::try_parse_from(["paychat", "parse", "x", "--today", "2024-02-30"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_message_required() {
        assert!(Cli::try_parse_from(["paychat", "ask"]).is_err());
    }
}
