/// Drive letters and free-letter allocation.
use std::fmt;

use crate::error::MapError;

/// Letter reserved by deployment policy — never handed out, even when it
/// is the only one left.
pub const RESERVED_LETTER: char = 'U';

/// A single local drive letter A-Z.
///
/// Displays in the OS's `"X:"` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DriveLetter(char);

impl DriveLetter {
    /// Build from a letter, accepting either case. Returns `None` for
    /// anything outside A-Z.
    pub fn new(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        upper.is_ascii_uppercase().then_some(Self(upper))
    }

    /// Parse the leading letter of a drive root such as `"C:"` or `"C:\"`.
    pub fn from_root(root: &str) -> Option<Self> {
        let mut chars = root.chars();
        let letter = chars.next()?;
        match chars.next() {
            Some(':') => Self::new(letter),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// `"X:"` — the local-name form the WNet APIs expect.
    pub fn with_colon(self) -> String {
        format!("{}:", self.0)
    }

    /// `"X:\"` — the root-path form the drive-type query expects.
    pub fn root(self) -> String {
        format!("{}:\\", self.0)
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.0)
    }
}

/// Pick the first free drive letter: `{A..Z}` minus the letters in use
/// minus [`RESERVED_LETTER`], smallest first.
pub fn next_free_letter(in_use: &[DriveLetter]) -> Result<DriveLetter, MapError> {
    ('A'..='Z')
        .filter(|&c| c != RESERVED_LETTER)
        .map(DriveLetter)
        .find(|letter| !in_use.contains(letter))
        .ok_or(MapError::NoLettersAvailable)
}
