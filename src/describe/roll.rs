//! Rolling of zero-length edits through tandem repeats.
//!
//! # Coordinate System
//!
//! All positions are **0-based half-open**:
//!
//! | Parameter | Notes |
//! |-----------|-------|
//! | `start`, `end` | The inserted or deleted pattern is `seq[start..end]` |
//! | `lo` | Leftmost index the pattern may roll over (inclusive) |
//! | `hi` | Rightmost limit (exclusive) |
//!
//! An insertion is rolled over the observed sequence, a deletion over the
//! reference. Either way the edit leaves the sequence unchanged when moved by
//! up to `shift5` positions left or `shift3` positions right.

/// Freedom of a zero-length edit within `[lo, hi)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Roll {
    /// Positions the pattern can move towards the 5' end
    pub shift5: usize,
    /// Positions the pattern can move towards the 3' end
    pub shift3: usize,
}

impl Roll {
    /// Total freedom, reported as the edit's `shift`
    #[must_use]
    pub fn total(&self) -> usize {
        self.shift5 + self.shift3
    }
}

/// Determine how far `seq[start..end]` can roll left and right.
///
/// Rolling left compares the symbol before the pattern with the pattern read
/// cyclically from its end; rolling right compares the symbol after it with
/// the pattern read cyclically from its start. Each direction stops at the
/// first mismatch or at the bound. An empty pattern cannot roll.
///
/// # Examples
///
/// ```
/// use hgvs_describe::describe::roll::roll;
///
/// let seq = b"abcccccde";
/// let r = roll(seq, 3, 4, 0, seq.len());
/// assert_eq!((r.shift5, r.shift3), (1, 3));
/// ```
#[must_use]
pub fn roll(seq: &[u8], start: usize, end: usize, lo: usize, hi: usize) -> Roll {
    let pattern = &seq[start..end];
    let n = pattern.len();
    if n == 0 {
        return Roll::default();
    }
    let hi = hi.min(seq.len());

    let mut shift5 = 0;
    while start - shift5 > lo && seq[start - shift5 - 1] == pattern[n - 1 - shift5 % n] {
        shift5 += 1;
    }

    let mut shift3 = 0;
    while end + shift3 < hi && seq[end + shift3] == pattern[shift3 % n] {
        shift3 += 1;
    }

    Roll { shift5, shift3 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_repeated_motif() {
        let seq = b"abbabbabbabb";
        let r = roll(seq, 3, 6, 0, seq.len());
        assert_eq!((r.shift5, r.shift3), (3, 6));
        assert_eq!(r.total(), 9);
    }

    #[test]
    fn test_roll_single_symbol() {
        let seq = b"abbabbabbabb";
        let r = roll(seq, 4, 5, 0, seq.len());
        assert_eq!((r.shift5, r.shift3), (0, 1));
    }

    #[test]
    fn test_roll_homopolymer_insertion() {
        // Inserted A at the end of AAAA can roll all the way to the start
        let r = roll(b"AAAAA", 4, 5, 0, 5);
        assert_eq!((r.shift5, r.shift3), (4, 0));
    }

    #[test]
    fn test_roll_respects_bounds() {
        let seq = b"abcccccde";
        let r = roll(seq, 3, 4, 2, 6);
        assert_eq!((r.shift5, r.shift3), (1, 2));

        let r = roll(seq, 3, 4, 3, 4);
        assert_eq!(r, Roll::default());
    }

    #[test]
    fn test_roll_empty_pattern() {
        assert_eq!(roll(b"AAAA", 2, 2, 0, 4), Roll::default());
    }

    #[test]
    fn test_roll_no_repeat() {
        let seq = b"ACGTTTGCA";
        let r = roll(seq, 3, 4, 0, seq.len());
        // T at index 3 sits in a run of three T's
        assert_eq!((r.shift5, r.shift3), (0, 2));
        let r = roll(seq, 1, 2, 0, seq.len());
        assert_eq!(r, Roll::default());
    }
}
