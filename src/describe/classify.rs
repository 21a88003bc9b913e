//! Recursive classification of a changed window.
//!
//! The classifier receives a window on the reference and the matching window
//! on the observed sequence, both already stripped of their common prefix and
//! suffix, and returns the edits that turn one into the other. Simple shapes
//! (insertion, deletion, substitution, single-base delins) are recognized
//! directly. Anything larger is split around its longest forward match
//! (compound variant) or its longest reverse-complement match (inversion),
//! and the split is kept only if it describes the window in fewer characters
//! than a single delins.

use std::ops::Range;

use tracing::{debug, trace};

use crate::core::allele::rendered_len;
use crate::core::sequence::reverse_complement;
use crate::core::variant::RawVar;
use crate::describe::engine::DescribeError;
use crate::describe::lcs::{longest_common_substring, CommonRun};
use crate::describe::palindrome::{palindrome_flanks, Palindrome};
use crate::describe::roll::roll;
use crate::describe::trim::{common_prefix_len, common_suffix_len};

/// Characters a decomposition must save, beyond a tie, over the single delins.
///
/// Accounts for the brackets needed to join several edits.
pub const SELECTION_MARGIN: usize = 2;

/// A pair of windows to classify.
///
/// `anchor_left` and `anchor_right` are the lengths of sequence immediately
/// outside the windows that is identical on both sequences. A zero-length
/// edit may roll through the anchors but never beyond them, since past them
/// lies another edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub reference: Range<usize>,
    pub observed: Range<usize>,
    pub anchor_left: usize,
    pub anchor_right: usize,
}

pub(crate) struct Classifier<'a> {
    reference: &'a [u8],
    observed: &'a [u8],
    max_depth: usize,
}

impl<'a> Classifier<'a> {
    pub(crate) fn new(reference: &'a [u8], observed: &'a [u8], max_depth: usize) -> Self {
        Self {
            reference,
            observed,
            max_depth,
        }
    }

    /// Classify `window`. Returns a single `none` edit when the windows hold
    /// identical content.
    pub(crate) fn classify(
        &self,
        window: &Window,
        depth: usize,
    ) -> Result<Vec<RawVar>, DescribeError> {
        if depth > self.max_depth {
            return Err(DescribeError::RecursionLimit(self.max_depth));
        }

        let r = &self.reference[window.reference.clone()];
        let o = &self.observed[window.observed.clone()];
        let position = window.reference.start + 1;

        if r == o {
            return Ok(vec![RawVar::none()]);
        }
        if r.is_empty() {
            return Ok(vec![self.insertion(window)]);
        }
        if o.is_empty() {
            return Ok(vec![self.deletion(window)]);
        }

        match (r.len(), o.len()) {
            (1, 1) => Ok(vec![RawVar::substitution(position, r[0], o[0])]),
            (1, _) => Ok(vec![RawVar::delins(position, position, r, o)]),
            _ => self.decompose(window, r, o, depth),
        }
    }

    /// Classify a sub-window produced by a split. Identical windows yield no
    /// edits at all.
    fn flank(&self, window: &Window, depth: usize) -> Result<Vec<RawVar>, DescribeError> {
        if self.reference[window.reference.clone()] == self.observed[window.observed.clone()] {
            return Ok(Vec::new());
        }
        self.classify(window, depth)
    }

    /// Insertion or duplication, shifted fully 3'
    fn insertion(&self, window: &Window) -> RawVar {
        let Range { start, end } = window.observed;
        let freedom = roll(
            self.observed,
            start,
            end,
            start.saturating_sub(window.anchor_left),
            end + window.anchor_right,
        );

        let at = window.reference.start + freedom.shift3;
        let inserted = &self.observed[start + freedom.shift3..end + freedom.shift3];
        let len = inserted.len();

        if at >= len && &self.reference[at - len..at] == inserted {
            trace!(at, len, "insertion repeats preceding reference content");
            RawVar::duplication(at - len + 1, at, freedom.total())
        } else {
            RawVar::insertion(at, inserted, freedom.total())
        }
    }

    /// Deletion, shifted fully 3'
    fn deletion(&self, window: &Window) -> RawVar {
        let Range { start, end } = window.reference;
        let freedom = roll(
            self.reference,
            start,
            end,
            start.saturating_sub(window.anchor_left),
            end + window.anchor_right,
        );

        let start = start + freedom.shift3;
        let end = end + freedom.shift3;
        RawVar::deletion(start + 1, end, &self.reference[start..end], freedom.total())
    }

    /// Multi-base window: inversion, compound variant, or plain delins.
    fn decompose(
        &self,
        window: &Window,
        r: &[u8],
        o: &[u8],
        depth: usize,
    ) -> Result<Vec<RawVar>, DescribeError> {
        let default = vec![RawVar::delins(
            window.reference.start + 1,
            window.reference.end,
            r,
            o,
        )];

        let forward = longest_common_substring(r, o);
        let mut reverse = longest_common_substring(r, &reverse_complement(o));

        // A self-complementary match reads the same inverted or not
        let palindrome = palindrome_flanks(&r[reverse.start_a()..reverse.end_a]);
        if palindrome == Palindrome::Full {
            reverse.len = 0;
        }
        trace!(?forward, ?reverse, ?palindrome, "common runs");

        if forward.is_empty() && reverse.is_empty() {
            return Ok(default);
        }

        let partial = if forward.len <= reverse.len {
            let trim = palindrome.trim();
            reverse.end_a -= trim;
            reverse.end_b -= trim;
            reverse.len -= 2 * trim;

            if r.len() == reverse.len && o.len() == reverse.len {
                return Ok(vec![RawVar::inversion(
                    window.reference.start + 1,
                    window.reference.end,
                )]);
            }
            self.around_inversion(window, r, o, reverse, depth)?
        } else {
            self.around_match(window, r, o, forward, depth)?
        };

        let partial_len = rendered_len(&partial);
        let default_len = rendered_len(&default);
        if partial_len + SELECTION_MARGIN < default_len {
            Ok(partial)
        } else {
            debug!(
                partial_len,
                default_len, "decomposition not short enough, keeping delins"
            );
            Ok(default)
        }
    }

    /// Edits left of an inverted core, the inversion itself, and edits right of it.
    ///
    /// `run` locates the core in `r` and in the reverse complement of `o`.
    fn around_inversion(
        &self,
        window: &Window,
        r: &[u8],
        o: &[u8],
        run: CommonRun,
        depth: usize,
    ) -> Result<Vec<RawVar>, DescribeError> {
        let (s1_start, s1_end) = (window.reference.start, window.reference.end);
        let (s2_start, s2_end) = (window.observed.start, window.observed.end);

        // Reference flanks
        let r_left = run.start_a();
        let r_right = r.len() - run.end_a;
        // Observed flanks; the reverse complement swaps left and right
        let o_left = o.len() - run.end_b;
        let o_right = run.start_b();

        let mut variants = Vec::new();

        if r_left > 0 || o_left > 0 {
            let shared = common_suffix_len(&r[..r_left], &o[..o_left]);
            let left = Window {
                reference: s1_start..s1_start + r_left - shared,
                observed: s2_start..s2_start + o_left - shared,
                anchor_left: window.anchor_left,
                anchor_right: shared,
            };
            variants.extend(self.flank(&left, depth + 1)?);
        }

        variants.push(RawVar::inversion(s1_start + r_left + 1, s1_end - r_right));

        if r_right > 0 || o_right > 0 {
            let shared = common_prefix_len(&r[r.len() - r_right..], &o[o.len() - o_right..]);
            let right = Window {
                reference: s1_end - r_right + shared..s1_end,
                observed: s2_end - o_right + shared..s2_end,
                anchor_left: shared,
                anchor_right: window.anchor_right,
            };
            variants.extend(self.flank(&right, depth + 1)?);
        }

        Ok(variants)
    }

    /// Edits left and right of a forward match.
    fn around_match(
        &self,
        window: &Window,
        r: &[u8],
        o: &[u8],
        run: CommonRun,
        depth: usize,
    ) -> Result<Vec<RawVar>, DescribeError> {
        let left = Window {
            reference: window.reference.start..window.reference.start + run.start_a(),
            observed: window.observed.start..window.observed.start + run.start_b(),
            anchor_left: window.anchor_left,
            anchor_right: run.len,
        };
        let right = Window {
            reference: window.reference.end - (r.len() - run.end_a)..window.reference.end,
            observed: window.observed.end - (o.len() - run.end_b)..window.observed.end,
            anchor_left: run.len,
            anchor_right: window.anchor_right,
        };

        let mut variants = self.flank(&left, depth + 1)?;
        variants.extend(self.flank(&right, depth + 1)?);
        Ok(variants)
    }
}
