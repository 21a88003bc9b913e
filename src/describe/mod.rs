//! Variant description: from a reference/observed pair to an allele.
//!
//! This module provides the description algorithm and its primitives:
//!
//! - [`Describer`]: Main entry point; trims, classifies, and returns an [`Allele`](crate::core::allele::Allele)
//! - [`trim`]: Common prefix/suffix removal
//! - [`lcs`]: Longest common substring with a first-seen tie-break
//! - [`roll`]: Freedom of insertions and deletions inside tandem repeats
//! - [`palindrome`]: Reverse-complement palindrome detection
//! - [`classify`]: The recursive classifier
//!
//! ## Algorithm
//!
//! 1. **Trim**: strip the common prefix and suffix, leaving the changed window
//! 2. **Simple shapes**: empty reference window is an insertion or
//!    duplication, empty observed window a deletion, single bases a
//!    substitution or delins
//! 3. **Roll**: insertions and deletions are moved to their rightmost (3')
//!    equivalent position; the freedom is kept as `shift`
//! 4. **Split**: larger windows are split around their longest forward match
//!    (compound variant) or longest reverse-complement match (inversion) and
//!    each side is classified recursively
//! 5. **Select**: a split is kept only if its text is more than
//!    [`SELECTION_MARGIN`](classify::SELECTION_MARGIN) characters shorter than
//!    a single delins over the window
//!
//! ## Example
//!
//! ```rust
//! use hgvs_describe::describe::{Describer, DescribeConfig};
//!
//! let describer = Describer::new(DescribeConfig::default());
//! let allele = describer.describe(b"ACGTTTTGCA", b"ACGTTTGCA").unwrap();
//!
//! assert_eq!(allele.to_string(), "7del");
//! assert_eq!(allele.variants()[0].shift, 3);
//! ```

pub mod classify;
pub mod engine;
pub mod lcs;
pub mod palindrome;
pub mod roll;
pub mod trim;

pub use engine::{
    describe, describe_with_config, DescribeConfig, DescribeError, Describer, DEFAULT_MAX_DEPTH,
};
