//! Encrypt command - Caesar-rotate a file line by line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rotfreq::{transform_file, SubstitutionTable};

use super::CommandExecutor;

/// Encrypt a text file with a Caesar rotation.
///
/// Only Latin letters are rotated; case, digits, punctuation and line
/// breaks are kept as they are.
#[derive(Args, Debug)]
pub struct EncryptCommand {
    /// Clear text file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination file (created or overwritten)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Rotation amount (any integer, reduced modulo 26)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rot: i64,

    /// Verbose output (shows the table and what was written)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self) -> Result<()> {
        let table = SubstitutionTable::encrypt(self.rot);
        if self.verbose {
            eprintln!("Rotation: {} (effective shift {})", self.rot, table.shift());
        }

        let report = transform_file(&self.input, &table, &self.output).with_context(|| {
            format!(
                "Failed to encrypt {} into {}",
                self.input.display(),
                self.output.display()
            )
        })?;

        if self.verbose {
            eprintln!(
                "Wrote {} lines ({} bytes) to {}",
                report.lines,
                report.bytes,
                self.output.display()
            );
        }
        Ok(())
    }
}
