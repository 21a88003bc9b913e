use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::sequence::{reverse_complement, to_text};
use crate::core::types::VariantKind;

/// A single raw edit operation on the reference sequence.
///
/// Positions are 1-based and inclusive. `end` is left unset for edits that
/// touch a single position; setting it turns the rendering into a range, so
/// the constructors below are the only supported way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawVar {
    /// First affected reference position (0 for `none`, or for an insertion
    /// before the first base)
    pub start: usize,

    /// Intronic offset of `start`; not produced by the describer
    #[serde(default)]
    pub start_offset: i64,

    /// Last affected reference position, unset for single-position edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,

    /// Intronic offset of `end`; not produced by the describer
    #[serde(default)]
    pub end_offset: i64,

    #[serde(rename = "type")]
    pub kind: VariantKind,

    /// Removed reference content
    #[serde(default)]
    pub deleted: String,

    /// Added observed content
    #[serde(default)]
    pub inserted: String,

    /// Roll freedom (5' + 3') that existed when the edit was normalized
    #[serde(default)]
    pub shift: usize,
}

impl RawVar {
    /// The empty change
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn substitution(position: usize, deleted: u8, inserted: u8) -> Self {
        Self {
            start: position,
            kind: VariantKind::Substitution,
            deleted: to_text(&[deleted]),
            inserted: to_text(&[inserted]),
            ..Self::default()
        }
    }

    /// Deletion of reference positions `start..=end`
    #[must_use]
    pub fn deletion(start: usize, end: usize, deleted: &[u8], shift: usize) -> Self {
        Self {
            start,
            end: (end != start).then_some(end),
            kind: VariantKind::Deletion,
            deleted: to_text(deleted),
            shift,
            ..Self::default()
        }
    }

    /// Insertion between reference positions `after` and `after + 1`
    #[must_use]
    pub fn insertion(after: usize, inserted: &[u8], shift: usize) -> Self {
        Self {
            start: after,
            end: Some(after + 1),
            kind: VariantKind::Insertion,
            inserted: to_text(inserted),
            shift,
            ..Self::default()
        }
    }

    /// Duplication of reference positions `start..=end`
    #[must_use]
    pub fn duplication(start: usize, end: usize, shift: usize) -> Self {
        Self {
            start,
            end: (end != start).then_some(end),
            kind: VariantKind::Duplication,
            shift,
            ..Self::default()
        }
    }

    /// Inversion of reference positions `start..=end`. Always a range.
    #[must_use]
    pub fn inversion(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
            kind: VariantKind::Inversion,
            ..Self::default()
        }
    }

    /// Replacement of reference positions `start..=end` by `inserted`
    #[must_use]
    pub fn delins(start: usize, end: usize, deleted: &[u8], inserted: &[u8]) -> Self {
        Self {
            start,
            end: (end != start).then_some(end),
            kind: VariantKind::DelIns,
            deleted: to_text(deleted),
            inserted: to_text(inserted),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.kind == VariantKind::None
    }

    /// Last affected position, `start` for single-position edits
    #[must_use]
    pub fn last(&self) -> usize {
        self.end.unwrap_or(self.start)
    }

    /// 0-based half-open reference interval replaced by this edit.
    ///
    /// Zero-length for insertions and duplications (the insertion point),
    /// `None` for the empty change.
    #[must_use]
    pub fn reference_span(&self) -> Option<Range<usize>> {
        match self.kind {
            VariantKind::None => None,
            VariantKind::Substitution => Some(self.start.saturating_sub(1)..self.start),
            VariantKind::Deletion | VariantKind::Inversion | VariantKind::DelIns => {
                Some(self.start.saturating_sub(1)..self.last())
            }
            VariantKind::Insertion => Some(self.start..self.start),
            VariantKind::Duplication => Some(self.last()..self.last()),
        }
    }

    /// Content that replaces [`Self::reference_span`] in the observed sequence.
    ///
    /// Returns `None` when the edit refers to reference positions that do not
    /// exist.
    #[must_use]
    pub fn replacement(&self, reference: &[u8]) -> Option<Vec<u8>> {
        let covered = || reference.get(self.start.checked_sub(1)?..self.last());
        match self.kind {
            VariantKind::None | VariantKind::Deletion => Some(Vec::new()),
            VariantKind::Substitution | VariantKind::Insertion | VariantKind::DelIns => {
                Some(self.inserted.as_bytes().to_vec())
            }
            VariantKind::Duplication => covered().map(<[u8]>::to_vec),
            VariantKind::Inversion => covered().map(reverse_complement),
        }
    }
}

impl std::fmt::Display for RawVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return write!(f, "=");
        }

        write!(f, "{}", self.start)?;
        if let Some(end) = self.end {
            write!(f, "_{end}")?;
        }

        match self.kind {
            VariantKind::Substitution => write!(f, "{}>{}", self.deleted, self.inserted),
            kind if kind.writes_inserted() => write!(f, "{}{}", kind.tag(), self.inserted),
            kind => write!(f, "{}", kind.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_kind() {
        assert_eq!(RawVar::none().to_string(), "=");
        assert_eq!(RawVar::substitution(100, b'A', b'T').to_string(), "100A>T");
        assert_eq!(RawVar::deletion(7, 7, b"T", 3).to_string(), "7del");
        assert_eq!(RawVar::deletion(7, 9, b"TTG", 0).to_string(), "7_9del");
        assert_eq!(RawVar::insertion(8, b"GTT", 0).to_string(), "8_9insGTT");
        assert_eq!(RawVar::duplication(4, 4, 4).to_string(), "4dup");
        assert_eq!(RawVar::duplication(1, 3, 3).to_string(), "1_3dup");
        assert_eq!(RawVar::inversion(6, 9).to_string(), "6_9inv");
        assert_eq!(RawVar::delins(3, 3, b"G", b"TGT").to_string(), "3delinsTGT");
        assert_eq!(
            RawVar::delins(16, 19, b"CTAG", b"GCTAGT").to_string(),
            "16_19delinsGCTAGT"
        );
    }

    #[test]
    fn test_insertion_before_first_base() {
        assert_eq!(RawVar::insertion(0, b"A", 0).to_string(), "0_1insA");
    }

    #[test]
    fn test_reference_span() {
        assert_eq!(RawVar::none().reference_span(), None);
        assert_eq!(RawVar::substitution(3, b'G', b'T').reference_span(), Some(2..3));
        assert_eq!(RawVar::deletion(2, 4, b"CGT", 0).reference_span(), Some(1..4));
        assert_eq!(RawVar::insertion(5, b"A", 0).reference_span(), Some(5..5));
        assert_eq!(RawVar::duplication(1, 3, 0).reference_span(), Some(3..3));
    }

    #[test]
    fn test_replacement() {
        let reference = b"CCCCACGTTTGGGG";
        assert_eq!(
            RawVar::inversion(6, 9).replacement(reference),
            Some(b"AACG".to_vec())
        );
        assert_eq!(
            RawVar::duplication(1, 3, 0).replacement(reference),
            Some(b"CCC".to_vec())
        );
        assert_eq!(RawVar::inversion(12, 20).replacement(reference), None);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(RawVar::deletion(7, 7, b"T", 3)).unwrap();
        assert_eq!(json["type"], "del");
        assert_eq!(json["start"], 7);
        assert!(json.get("end").is_none());
        assert_eq!(json["deleted"], "T");
        assert_eq!(json["shift"], 3);
    }
}
