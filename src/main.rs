//! rotfreq - letter frequencies and Caesar rotation
//!
//! A CLI tool for counting letters in text files and PDF body text, and for
//! encrypting/decrypting files with a Caesar cipher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CommandExecutor, CompareCommand, CountCommand, DecryptCommand, EncryptCommand,
    PdfCountCommand,
};

/// rotfreq - letter frequencies and Caesar rotation
///
/// Count letters, rotate text, and compare distributions before and after.
#[derive(Parser)]
#[command(name = "rotfreq")]
#[command(version)]
#[command(about = "Letter frequency counting and Caesar cipher for text files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count letter frequencies in a text file
    Count(CountCommand),

    /// Encrypt a text file with a Caesar rotation
    Encrypt(EncryptCommand),

    /// Decrypt a file encrypted with a Caesar rotation
    Decrypt(DecryptCommand),

    /// Count letter frequencies in PDF pages (from a fragment dump)
    #[command(name = "pdf-count")]
    PdfCount(PdfCountCommand),

    /// Compare letter frequencies of a clear text and a cipher text
    Compare(CompareCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count(cmd) => cmd.execute(),
        Commands::Encrypt(cmd) => cmd.execute(),
        Commands::Decrypt(cmd) => cmd.execute(),
        Commands::PdfCount(cmd) => cmd.execute(),
        Commands::Compare(cmd) => cmd.execute(),
    }
}
