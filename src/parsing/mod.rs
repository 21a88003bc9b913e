//! Loading of input sequences.
//!
//! The describer itself works on plain byte slices; this module only exists
//! for the command-line front end, which accepts FASTA files:
//!
//! - **FASTA files**: first record of a plain, gzip or bgzip compressed file
//!
//! ## Example
//!
//! ```rust,no_run
//! use hgvs_describe::parsing::fasta::read_first_sequence;
//! use hgvs_describe::utils::validation::MAX_SEQUENCE_LENGTH;
//! use std::path::Path;
//!
//! let reference = read_first_sequence(Path::new("reference.fa"), MAX_SEQUENCE_LENGTH).unwrap();
//! println!("{}: {} bases", reference.name, reference.sequence.len());
//! ```

use thiserror::Error;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Sequence too long: {0} symbols exceeds the configured maximum")]
    SequenceTooLong(usize),
}
