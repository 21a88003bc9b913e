use serde::{Deserialize, Serialize};

/// Kind of a single edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VariantKind {
    /// No change between reference and observed sequence
    #[default]
    #[serde(rename = "none")]
    None,
    /// One symbol replaced by another (e.g. `100A>T`)
    #[serde(rename = "subst")]
    Substitution,
    /// Removal of one or more reference symbols
    #[serde(rename = "del")]
    Deletion,
    /// Symbols inserted between two adjacent reference positions
    #[serde(rename = "ins")]
    Insertion,
    /// Tandem copy of the reference content immediately 5' of the insertion
    #[serde(rename = "dup")]
    Duplication,
    /// Reference content replaced by its reverse complement
    #[serde(rename = "inv")]
    Inversion,
    /// Reference content replaced by arbitrary observed content
    #[serde(rename = "delins")]
    DelIns,
}

impl VariantKind {
    /// Notation tag written after the position(s).
    ///
    /// Substitutions have no tag of their own; their text is `<ref>><obs>`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "=",
            Self::Substitution => ">",
            Self::Deletion => "del",
            Self::Insertion => "ins",
            Self::Duplication => "dup",
            Self::Inversion => "inv",
            Self::DelIns => "delins",
        }
    }

    /// Short name used in diagnostic tables
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Substitution => "subst",
            other => other.tag(),
        }
    }

    /// True for kinds that carry inserted sequence in their notation
    #[must_use]
    pub const fn writes_inserted(self) -> bool {
        matches!(self, Self::Insertion | Self::DelIns)
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
