//! Line-by-line file encryption and decryption.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::rotate::rotate_text;
use super::table::SubstitutionTable;

/// Errors that can occur while ciphering a file.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Summary of a completed file transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineReport {
    /// Lines written to the destination.
    pub lines: usize,
    /// Bytes written to the destination.
    pub bytes: usize,
}

/// Applies `table` to every line of `source` and writes the result to
/// `destination`, creating or truncating it.
///
/// Line terminators are kept exactly as read, including a missing final
/// newline. The source is opened before the destination is touched; on a
/// later read or write error the destination may be left partially written.
pub fn transform_file(
    source: impl AsRef<Path>,
    table: &SubstitutionTable,
    destination: impl AsRef<Path>,
) -> Result<PipelineReport, CipherError> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    let input = File::open(source).map_err(|e| CipherError::Open {
        path: source.to_path_buf(),
        source: e,
    })?;
    let output = File::create(destination).map_err(|e| CipherError::Create {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let mut report = PipelineReport::default();
    let mut line = String::new();

    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|e| CipherError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
        if read == 0 {
            break;
        }

        let rotated = rotate_text(&line, table);
        writer
            .write_all(rotated.as_bytes())
            .map_err(|e| CipherError::Write {
                path: destination.to_path_buf(),
                source: e,
            })?;

        report.lines += 1;
        report.bytes += rotated.len();
    }

    writer.flush().map_err(|e| CipherError::Write {
        path: destination.to_path_buf(),
        source: e,
    })?;

    Ok(report)
}

/// Encrypts `clear_text_path` with a Caesar rotation of `rot` into `output_path`.
pub fn caesar_cipher(
    clear_text_path: impl AsRef<Path>,
    rot: i64,
    output_path: impl AsRef<Path>,
) -> Result<PipelineReport, CipherError> {
    transform_file(clear_text_path, &SubstitutionTable::encrypt(rot), output_path)
}

/// Decrypts `cipher_text_path`, previously encrypted with rotation `rot`, into `output_path`.
pub fn caesar_decipher(
    cipher_text_path: impl AsRef<Path>,
    rot: i64,
    output_path: impl AsRef<Path>,
) -> Result<PipelineReport, CipherError> {
    transform_file(cipher_text_path, &SubstitutionTable::decrypt(rot), output_path)
}
