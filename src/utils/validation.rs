//! Centralized input limits and helper functions.

/// Maximum number of symbols accepted per input sequence.
///
/// The classifier is quadratic in the length of the changed window, so
/// callers cap their input before calling in.
pub const MAX_SEQUENCE_LENGTH: usize = 100_000;

/// Input validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Sequence too long: {length} symbols exceeds maximum of {limit}")]
    SequenceTooLong { length: usize, limit: usize },
    #[error("Sequence contains a non-printable or non-ASCII character at offset {0}")]
    InvalidCharacter(usize),
}

/// Check that a sequence of `length` symbols fits within `limit`.
///
/// # Errors
///
/// Returns `ValidationError::SequenceTooLong` if `length` exceeds `limit`.
///
/// # Examples
///
/// ```
/// use hgvs_describe::utils::validation::check_sequence_length;
///
/// assert!(check_sequence_length(10, 10).is_ok());
/// assert!(check_sequence_length(11, 10).is_err());
/// ```
pub fn check_sequence_length(length: usize, limit: usize) -> Result<(), ValidationError> {
    if length > limit {
        return Err(ValidationError::SequenceTooLong { length, limit });
    }
    Ok(())
}

/// Normalize a sequence typed on the command line.
///
/// Whitespace is dropped and letters are upper-cased. Symbols are not checked
/// against any alphabet; only control and non-ASCII characters are refused.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCharacter` for control or non-ASCII
/// characters, or `ValidationError::SequenceTooLong` if the result exceeds
/// `limit`.
pub fn normalize_sequence(text: &str, limit: usize) -> Result<Vec<u8>, ValidationError> {
    let mut sequence = Vec::with_capacity(text.len());

    for (offset, byte) in text.bytes().enumerate() {
        if byte.is_ascii_whitespace() {
            continue;
        }
        if !byte.is_ascii_graphic() {
            return Err(ValidationError::InvalidCharacter(offset));
        }
        sequence.push(byte.to_ascii_uppercase());
    }

    check_sequence_length(sequence.len(), limit)?;
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sequence_length() {
        assert!(check_sequence_length(0, 0).is_ok());
        assert!(check_sequence_length(MAX_SEQUENCE_LENGTH, MAX_SEQUENCE_LENGTH).is_ok());
        assert_eq!(
            check_sequence_length(5, 4),
            Err(ValidationError::SequenceTooLong {
                length: 5,
                limit: 4
            })
        );
    }

    #[test]
    fn test_normalize_sequence() {
        assert_eq!(
            normalize_sequence(" acgt\tNNac \n", 100).unwrap(),
            b"ACGTNNAC".to_vec()
        );
        assert_eq!(normalize_sequence("", 100).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_normalize_rejects_control_characters() {
        assert_eq!(
            normalize_sequence("AC\0GT", 100),
            Err(ValidationError::InvalidCharacter(2))
        );
        assert_eq!(
            normalize_sequence("ACÉ", 100),
            Err(ValidationError::InvalidCharacter(2))
        );
    }

    #[test]
    fn test_normalize_applies_limit() {
        assert!(matches!(
            normalize_sequence("A C G T A", 4),
            Err(ValidationError::SequenceTooLong { length: 5, .. })
        ));
    }
}
