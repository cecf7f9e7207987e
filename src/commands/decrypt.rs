//! Decrypt command - undo a Caesar rotation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rotfreq::{transform_file, SubstitutionTable};

use super::CommandExecutor;

/// Decrypt a file produced by `encrypt`.
///
/// Pass the same rotation amount that was used for encryption.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    /// Encrypted file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination file (created or overwritten)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Rotation amount used for encryption
    #[arg(short, long, allow_negative_numbers = true)]
    pub rot: i64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self) -> Result<()> {
        let table = SubstitutionTable::decrypt(self.rot);
        if self.verbose {
            eprintln!(
                "Rotation: {} (reversed, effective shift {})",
                self.rot,
                table.shift()
            );
        }

        let report = transform_file(&self.input, &table, &self.output).with_context(|| {
            format!(
                "Failed to decrypt {} into {}",
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
