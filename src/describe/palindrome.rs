//! Reverse-complement palindrome detection.

use crate::core::sequence::complement;

/// Outcome of [`palindrome_flanks`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palindrome {
    /// The whole sequence equals its reverse complement
    Full,
    /// Number of symmetric flank pairs that are reverse complements of each
    /// other (possibly zero)
    Flanks(usize),
}

impl Palindrome {
    /// Flank pairs to trim; zero for a full palindrome
    #[must_use]
    pub fn trim(self) -> usize {
        match self {
            Self::Full => 0,
            Self::Flanks(n) => n,
        }
    }
}

/// Count the reverse-complement-palindromic flank pairs of `seq`.
///
/// Position `i` is compared with the complement of position `len - 1 - i`
/// for the first half of the sequence (rounded up). The first mismatch gives
/// the flank count. The empty sequence is a full palindrome.
///
/// # Examples
///
/// ```
/// use hgvs_describe::describe::palindrome::{palindrome_flanks, Palindrome};
///
/// assert_eq!(palindrome_flanks(b"TACGCTA"), Palindrome::Flanks(2));
/// assert_eq!(palindrome_flanks(b"TACGTA"), Palindrome::Full);
/// assert_eq!(palindrome_flanks(b"TACGCTT"), Palindrome::Flanks(0));
/// ```
#[must_use]
pub fn palindrome_flanks(seq: &[u8]) -> Palindrome {
    let n = seq.len();
    (0..n.div_ceil(2))
        .find(|&i| seq[i] != complement(seq[n - 1 - i]))
        .map_or(Palindrome::Full, Palindrome::Flanks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restriction_site_is_full() {
        assert_eq!(palindrome_flanks(b"GAATTC"), Palindrome::Full);
        assert_eq!(palindrome_flanks(b""), Palindrome::Full);
    }

    #[test]
    fn test_odd_length_middle_base() {
        // The middle base is compared with its own complement
        assert_eq!(palindrome_flanks(b"ACGGT"), Palindrome::Flanks(2));
        assert_eq!(palindrome_flanks(b"ANT"), Palindrome::Full);
    }

    #[test]
    fn test_single_base() {
        assert_eq!(palindrome_flanks(b"A"), Palindrome::Flanks(0));
    }

    #[test]
    fn test_trim() {
        assert_eq!(Palindrome::Full.trim(), 0);
        assert_eq!(Palindrome::Flanks(3).trim(), 3);
    }
}
