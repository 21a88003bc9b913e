//! # hgvs-describe
//!
//! A library for describing the difference between two DNA sequences in HGVS
//! notation.
//!
//! Given a reference sequence and an observed sequence, `hgvs-describe` finds
//! the changed region and reports the shortest description of it as an
//! allele: a substitution, deletion, insertion, duplication, inversion,
//! deletion-insertion, or a bracketed list of several of these.
//!
//! ## Features
//!
//! - **3' shifting**: insertions and deletions in repeats are reported at their rightmost position
//! - **Duplication detection**: insertions that copy the preceding sequence become `dup`
//! - **Inversion detection**: reverse-complement runs become `inv`, except on palindromes
//! - **Compound alleles**: independent edits are split when that shortens the description
//! - **Diagnostics**: every edit keeps the roll freedom (`shift`) it was normalized with
//!
//! ## Example
//!
//! ```rust
//! use hgvs_describe::describe;
//!
//! let allele = describe(b"ATGATGATCGATCGACTAGCTAG", b"ATGATGATCGATCGAGCTAGTCTAG").unwrap();
//! assert_eq!(allele.to_string(), "16_19delinsGCTAGT");
//!
//! let allele = describe(b"TGTGATGCA", b"TGGGATTGC").unwrap();
//! assert_eq!(allele.to_string(), "[3T>G;7_9inv]");
//!
//! // Every description reproduces the observed sequence
//! assert_eq!(allele.apply(b"TGTGATGCA").unwrap(), b"TGGGATTGC".to_vec());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Edit operations, alleles, and sequence helpers
//! - [`describe`]: The description algorithm and its primitives
//! - [`parsing`]: FASTA input for the command-line tool
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input limits and validation

pub mod cli;
pub mod core;
pub mod describe;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::allele::{Allele, ApplyError};
pub use crate::core::types::VariantKind;
pub use crate::core::variant::RawVar;
pub use describe::{describe, describe_with_config, DescribeConfig, DescribeError, Describer};
