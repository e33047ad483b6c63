//! Shell integration for paychat.

pub mod completions;

pub use completions::{completion_install_instructions, generate_completions, shell_from_str};
