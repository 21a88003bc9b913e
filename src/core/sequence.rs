//! Nucleotide sequence helpers.
//!
//! Sequences are plain byte slices. Complementing follows the IUPAC
//! nucleotide alphabet and preserves case; symbols outside the alphabet are
//! passed through unchanged.

/// Complement of a single nucleotide symbol.
#[must_use]
pub const fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'a' => b't',
        b't' | b'u' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        b'r' => b'y',
        b'y' => b'r',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        // N, S, W and anything unknown are their own complement
        other => other,
    }
}

/// Reverse complement of a sequence.
///
/// # Examples
///
/// ```
/// use hgvs_describe::core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement(b"AACG"), b"CGTT".to_vec());
/// assert_eq!(reverse_complement(b"GAATTC"), b"GAATTC".to_vec());
/// ```
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// Sequence bytes as text, for rendering and serialization.
pub(crate) fn to_text(seq: &[u8]) -> String {
    String::from_utf8_lossy(seq).into_owned()
}
