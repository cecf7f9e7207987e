//! Caesar cipher operations.
//!
//! This module provides:
//! - Substitution tables for any rotation amount, in either direction
//! - Text rotation through a table
//! - Line-preserving file encryption/decryption
//! - Rotation recovery by frequency analysis

pub mod analysis;
pub mod pipeline;
pub mod rotate;
pub mod table;

pub use analysis::estimate_rotation;
pub use pipeline::{caesar_cipher, caesar_decipher, transform_file, CipherError, PipelineReport};
pub use rotate::rotate_text;
pub use table::{normalize_rotation, SubstitutionTable, TABLE_SIZE};
