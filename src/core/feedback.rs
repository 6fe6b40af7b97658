//! Per-letter feedback classification

use std::fmt;

/// Classification of a single cell of the grid
///
/// `Empty` marks cells whose row has not been submitted yet. The derived
/// ordering ranks feedback by strength, which is what the keyboard hint uses
/// to keep the best result seen for each letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Feedback {
    #[default]
    Empty,
    /// Letter does not contribute any further match at this position
    Absent,
    /// Letter is in the secret but at another position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

impl Feedback {
    /// Emoji used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Single-letter code: `G`reen, `Y`ellow, `X` for absent, `.` for empty
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
            Self::Empty => '.',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
