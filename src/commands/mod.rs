//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod compare;
mod count;
mod decrypt;
mod encrypt;
mod pdf_count;

pub use compare::CompareCommand;
pub use count::CountCommand;
pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;
pub use pdf_count::PdfCountCommand;

use std::path::Path;

use anyhow::{Context, Result};
use rotfreq::{FrequencyMap, Settings};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Loads settings from `--config` if given, otherwise from `~/.rotfreq/config.toml`.
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    Settings::resolve(path).with_context(|| match path {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load default config".to_string(),
    })
}

/// Prints `letter count` lines sorted by letter, or a JSON object.
fn print_counts(counts: &FrequencyMap, json: bool) -> Result<()> {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = counts
            .sorted()
            .into_iter()
            .map(|(letter, count)| (letter.to_string(), count.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (letter, count) in counts.sorted() {
            println!("{} {}", letter, count);
        }
    }
    Ok(())
}
