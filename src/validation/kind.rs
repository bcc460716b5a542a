use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Form-level policy deciding whether a triggered validation asks each
/// validator to surface its error.
///
/// The policy is fixed when the form is built.
///
/// # Examples
///
/// ```
/// use form_rail::validation::ValidationType;
///
/// assert!(ValidationType::Immediate.should_show_error());
/// assert!(ValidationType::Deferred.should_show_error());
/// assert!(!ValidationType::Silent.should_show_error());
///
/// let parsed: ValidationType = "deferred".parse().unwrap();
/// assert_eq!(parsed, ValidationType::Deferred);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ValidationType {
    Immediate,
    Deferred,
    Silent,
}

impl ValidationType {
    #[must_use]
    #[inline]
    pub const fn should_show_error(self) -> bool {
        match self {
            Self::Immediate | Self::Deferred => true,
            Self::Silent => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Deferred => "deferred",
            Self::Silent => "silent",
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`ValidationType`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseValidationTypeError {
    input: String,
}

impl ParseValidationTypeError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseValidationTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown validation type '{}' (expected immediate, deferred or silent)",
            self.input
        )
    }
}

impl std::error::Error for ParseValidationTypeError {}

impl FromStr for ValidationType {
    type Err = ParseValidationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "deferred" => Ok(Self::Deferred),
            "silent" => Ok(Self::Silent),
            _ => Err(ParseValidationTypeError { input: s.to_string() }),
        }
    }
}
