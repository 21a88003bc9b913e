use std::ops::Range;

use thiserror::Error;
use tracing::debug;

use crate::core::allele::Allele;
use crate::describe::classify::{Classifier, Window};
use crate::describe::trim::{common_prefix_len, common_suffix_len, trim_window};

/// Default bound on nested decompositions.
///
/// Every nesting level holds a classifier frame on the stack; this bound
/// keeps an unoptimized build within a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    #[error("Invalid {sequence} range {start}..{end} for a sequence of length {length}")]
    InvalidRange {
        sequence: &'static str,
        start: usize,
        end: usize,
        length: usize,
    },

    #[error("Recursion limit exceeded: more than {0} nested decompositions")]
    RecursionLimit(usize),
}

/// Configuration for the describer
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DescribeConfig {
    /// Maximum depth of nested compound/inversion splits before giving up
    pub max_depth: usize,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Describes how an observed sequence differs from a reference
#[derive(Debug, Clone, Default)]
pub struct Describer {
    config: DescribeConfig,
}

impl Describer {
    #[must_use]
    pub fn new(config: DescribeConfig) -> Self {
        Self { config }
    }

    /// Describe the whole of `observed` against the whole of `reference`.
    ///
    /// # Errors
    ///
    /// Returns `DescribeError::RecursionLimit` if the input needs more nested
    /// decompositions than the configured maximum.
    pub fn describe(&self, reference: &[u8], observed: &[u8]) -> Result<Allele, DescribeError> {
        self.describe_range(reference, observed, 0..reference.len(), 0..observed.len())
    }

    /// Describe `observed[observed_range]` against `reference[reference_range]`.
    ///
    /// Both windows are trimmed of their common prefix and suffix before
    /// classification, so the result does not depend on whether the caller
    /// already did so. Sequence outside the windows is consulted only to roll
    /// insertions and deletions through identical flanking context.
    ///
    /// # Errors
    ///
    /// Returns `DescribeError::InvalidRange` if a range is reversed or extends
    /// past its sequence, or `DescribeError::RecursionLimit` if the input needs
    /// more nested decompositions than the configured maximum.
    pub fn describe_range(
        &self,
        reference: &[u8],
        observed: &[u8],
        reference_range: Range<usize>,
        observed_range: Range<usize>,
    ) -> Result<Allele, DescribeError> {
        check_range("reference", &reference_range, reference.len())?;
        check_range("observed", &observed_range, observed.len())?;

        let trimmed = trim_window(reference, observed, reference_range, observed_range);
        let window = Window {
            anchor_left: common_suffix_len(
                &reference[..trimmed.reference.start],
                &observed[..trimmed.observed.start],
            ),
            anchor_right: common_prefix_len(
                &reference[trimmed.reference.end..],
                &observed[trimmed.observed.end..],
            ),
            reference: trimmed.reference,
            observed: trimmed.observed,
        };
        debug!(?window, "classifying changed window");

        let variants =
            Classifier::new(reference, observed, self.config.max_depth).classify(&window, 0)?;
        Ok(Allele::new(variants))
    }
}

fn check_range(
    sequence: &'static str,
    range: &Range<usize>,
    length: usize,
) -> Result<(), DescribeError> {
    if range.start > range.end || range.end > length {
        return Err(DescribeError::InvalidRange {
            sequence,
            start: range.start,
            end: range.end,
            length,
        });
    }
    Ok(())
}

/// Describe `observed` against `reference` with the default configuration.
///
/// # Examples
///
/// ```
/// use hgvs_describe::describe;
///
/// let allele = describe(b"CAT", b"CATCAT").unwrap();
/// assert_eq!(allele.to_string(), "1_3dup");
/// ```
///
/// # Errors
///
/// Returns `DescribeError::RecursionLimit` for inputs needing more than
/// [`DEFAULT_MAX_DEPTH`] nested decompositions.
pub fn describe(reference: &[u8], observed: &[u8]) -> Result<Allele, DescribeError> {
    Describer::default().describe(reference, observed)
}

/// Describe `observed` against `reference` with a custom configuration.
///
/// # Errors
///
/// Returns `DescribeError::RecursionLimit` for inputs needing more than
/// `config.max_depth` nested decompositions.
pub fn describe_with_config(
    reference: &[u8],
    observed: &[u8],
    config: &DescribeConfig,
) -> Result<Allele, DescribeError> {
    Describer::new(config.clone()).describe(reference, observed)
}
