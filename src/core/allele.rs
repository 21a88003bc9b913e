use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::variant::RawVar;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("Variant {variant} refers to positions beyond the reference (length {length})")]
    OutOfBounds { variant: String, length: usize },

    #[error("Variant {variant} overlaps or precedes the previous variant")]
    Unordered { variant: String },
}

/// An ordered, non-empty list of edits describing one observed sequence.
///
/// Edits are ordered left to right along the reference and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RawVar>", into = "Vec<RawVar>")]
pub struct Allele {
    variants: Vec<RawVar>,
}

impl Allele {
    /// Wrap an edit list. An empty list is the empty change.
    #[must_use]
    pub fn new(variants: Vec<RawVar>) -> Self {
        if variants.is_empty() {
            return Self::unchanged();
        }
        Self { variants }
    }

    /// The allele identical to its reference
    #[must_use]
    pub fn unchanged() -> Self {
        Self {
            variants: vec![RawVar::none()],
        }
    }

    #[must_use]
    pub fn variants(&self) -> &[RawVar] {
        &self.variants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false: an allele holds at least the empty change
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// True when the allele is the single empty change
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.variants.iter().all(RawVar::is_none)
    }

    /// Rebuild the observed sequence by applying every edit to `reference`.
    ///
    /// # Errors
    ///
    /// Returns `ApplyError::OutOfBounds` if an edit refers to positions the
    /// reference does not have, or `ApplyError::Unordered` if edits overlap or
    /// are not sorted along the reference.
    pub fn apply(&self, reference: &[u8]) -> Result<Vec<u8>, ApplyError> {
        let mut observed = Vec::with_capacity(reference.len());
        let mut cursor = 0;

        for variant in &self.variants {
            let Some(span) = variant.reference_span() else {
                continue;
            };
            let out_of_bounds = || ApplyError::OutOfBounds {
                variant: variant.to_string(),
                length: reference.len(),
            };

            if span.end > reference.len() {
                return Err(out_of_bounds());
            }
            if span.start < cursor {
                return Err(ApplyError::Unordered {
                    variant: variant.to_string(),
                });
            }

            let replacement = variant.replacement(reference).ok_or_else(out_of_bounds)?;
            observed.extend_from_slice(&reference[cursor..span.start]);
            observed.extend_from_slice(&replacement);
            cursor = span.end;
        }

        observed.extend_from_slice(&reference[cursor..]);
        Ok(observed)
    }
}

impl From<Vec<RawVar>> for Allele {
    fn from(variants: Vec<RawVar>) -> Self {
        Self::new(variants)
    }
}

impl From<Allele> for Vec<RawVar> {
    fn from(allele: Allele) -> Self {
        allele.variants
    }
}

/// Renders a single edit as-is and several edits as `[a;b;...]`
impl std::fmt::Display for Allele {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.variants.as_slice() {
            [single] => write!(f, "{single}"),
            variants => {
                write!(f, "[")?;
                for (i, variant) in variants.iter().enumerate() {
                    if i > 0 {
                        write!(f, ";")?;
                    }
                    write!(f, "{variant}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Rendered length of an edit list as an allele, without building the allele.
pub(crate) fn rendered_len(variants: &[RawVar]) -> usize {
    let inner: usize = variants.iter().map(|v| v.to_string().len()).sum();
    match variants.len() {
        0 | 1 => inner,
        n => inner + (n - 1) + 2,
    }
}
