//! Common prefix/suffix trimming.

use std::ops::Range;

/// Length of the longest common prefix of `a` and `b`
#[must_use]
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Length of the longest common suffix of `a` and `b`
#[must_use]
pub fn common_suffix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// The minimal changed window of a reference/observed pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimmed {
    /// Changed window on the reference
    pub reference: Range<usize>,
    /// Changed window on the observed sequence
    pub observed: Range<usize>,
}

/// Narrow `reference[range_ref]` / `observed[range_obs]` to the window that differs.
///
/// The common prefix is removed first and the common suffix is computed on
/// what remains, so the two never overlap.
#[must_use]
pub fn trim_window(
    reference: &[u8],
    observed: &[u8],
    range_ref: Range<usize>,
    range_obs: Range<usize>,
) -> Trimmed {
    let r = &reference[range_ref.clone()];
    let o = &observed[range_obs.clone()];

    let prefix = common_prefix_len(r, o);
    let suffix = common_suffix_len(&r[prefix..], &o[prefix..]);

    Trimmed {
        reference: range_ref.start + prefix..range_ref.end - suffix,
        observed: range_obs.start + prefix..range_obs.end - suffix,
    }
}
