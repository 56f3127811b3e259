use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validated Canadian postal code held in its normalized `XXX XXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalCode(String);

// Deserialization re-validates so a wire value can never bypass `parse`.
impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PostalCode::parse(&raw).map_err(D::Error::custom)
    }
}

/// Why a candidate string failed structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    WrongLength { found: usize },
    ExpectedLetter { position: usize },
    ExpectedDigit { position: usize },
    DisallowedLetter { position: usize, letter: char },
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::WrongLength { found } => {
                write!(f, "expected 6 characters, found {found}")
            }
            FormatIssue::ExpectedLetter { position } => {
                write!(f, "expected a letter at position {position}")
            }
            FormatIssue::ExpectedDigit { position } => {
                write!(f, "expected a digit at position {position}")
            }
            FormatIssue::DisallowedLetter { position, letter } => {
                write!(
                    f,
                    "letter '{letter}' at position {position} is not used in postal codes"
                )
            }
        }
    }
}

/// Structural validation failure; the caller must not proceed to the region lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("postal code '{input}' is not a valid Canadian postal code: {reason}")]
pub struct InvalidFormat {
    pub input: String,
    pub reason: FormatIssue,
}

// Canada Post excludes D, F, I, O, Q, U everywhere; W and Z additionally never lead.
const FIRST_LETTERS: &str = "ABCEGHJKLMNPRSTVXY";
const OTHER_LETTERS: &str = "ABCEGHJKLMNPRSTVWXYZ";

impl PostalCode {
    /// Validate a raw user-supplied string, tolerating stray whitespace and mixed
    /// case, and return the normalized form.
    pub fn parse(raw: &str) -> Result<Self, InvalidFormat> {
        let stripped: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let chars: Vec<char> = stripped.chars().collect();
        if chars.len() != 6 {
            return Err(InvalidFormat {
                reason: FormatIssue::WrongLength { found: chars.len() },
                input: stripped,
            });
        }

        for (position, &c) in chars.iter().enumerate() {
            let issue = match position {
                // Alternating letter-digit-letter digit-letter-digit.
                0 | 2 | 4 if !c.is_ascii_alphabetic() => {
                    Some(FormatIssue::ExpectedLetter { position })
                }
                0 if !FIRST_LETTERS.contains(c) => Some(FormatIssue::DisallowedLetter {
                    position,
                    letter: c,
                }),
                2 | 4 if !OTHER_LETTERS.contains(c) => Some(FormatIssue::DisallowedLetter {
                    position,
                    letter: c,
                }),
                1 | 3 | 5 if !c.is_ascii_digit() => Some(FormatIssue::ExpectedDigit { position }),
                _ => None,
            };

            if let Some(reason) = issue {
                return Err(InvalidFormat {
                    input: stripped,
                    reason,
                });
            }
        }

        let normalized = format!("{} {}", &stripped[..3], &stripped[3..]);
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The forward sortation area: the first three characters, which identify the
    /// geographic area the region directory is keyed by.
    pub fn forward_sortation_area(&self) -> &str {
        &self.0[..3]
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
