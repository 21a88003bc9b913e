//! Core data types for describing sequence variants.
//!
//! - [`RawVar`](variant::RawVar): a single edit operation with 1-based reference positions
//! - [`Allele`](allele::Allele): an ordered list of edits, rendered as one description
//! - [`VariantKind`](types::VariantKind): the edit classes of the notation
//! - [`sequence`]: complement and reverse-complement helpers
//!
//! ## Notation
//!
//! | Kind | Example |
//! |------|---------|
//! | none | `=` |
//! | substitution | `100A>T` |
//! | deletion | `7del`, `7_9del` |
//! | insertion | `8_9insGTT` |
//! | duplication | `4dup`, `1_3dup` |
//! | inversion | `6_9inv` |
//! | deletion-insertion | `3delinsTGT`, `16_19delinsGCTAGT` |
//! | allele | `[3T>G;7_9inv]` |

pub mod allele;
pub mod sequence;
pub mod types;
pub mod variant;
