// crates/engine/src/options.rs
use serde::{Deserialize, Serialize};

/// Columns of the dependency format, in file order.
///
/// `ID FORM LEMMA POS FEATS HEAD DEPREL`; anything past `DEPREL` is kept
/// unnamed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Id,
    Form,
    Lemma,
    Pos,
    #[default]
    Feats,
    Head,
    Deprel,
}

impl Column {
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Form,
        Self::Lemma,
        Self::Pos,
        Self::Feats,
        Self::Head,
        Self::Deprel,
    ];

    /// Zero-based position within a data line.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Minimum token count a data line needs for this column to exist.
    #[inline]
    pub const fn required_tokens(self) -> usize {
        self.index() + 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Form => "form",
            Self::Lemma => "lemma",
            Self::Pos => "pos",
            Self::Feats => "feats",
            Self::Head => "head",
            Self::Deprel => "deprel",
        }
    }
}

/// What to do with a data line that is too short to hold the marker column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedPolicy {
    /// Fail the whole run on the first short line.
    #[default]
    Abort,
    /// Count the line as an unmarked token line and log a warning.
    Skip,
}
