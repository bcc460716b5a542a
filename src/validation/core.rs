use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a single validator against its current value.
///
/// `Validation` is either a success or a failure carrying a human-readable
/// message. A failure whose message is the empty string is "invalid but
/// silent": it counts against form validity but never shows up in a list of
/// displayed messages.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when the `serde`
/// feature is enabled.
///
/// # Examples
///
/// ```
/// use form_rail::validation::Validation;
///
/// let ok = Validation::success();
/// assert!(ok.is_success());
///
/// let bad = Validation::failure("too short");
/// assert_eq!(bad.message(), Some("too short"));
///
/// let silent = Validation::silent_failure();
/// assert!(silent.is_failure());
/// assert_eq!(silent.visible_message(), None);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
pub enum Validation {
    #[default]
    Success,
    Failure {
        message: String,
    },
}

impl Validation {
    /// Creates a successful validation.
    #[inline]
    pub fn success() -> Self {
        Self::Success
    }

    /// Creates a failed validation carrying `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::failure("required");
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure { message: message.into() }
    }

    /// Creates a failure with an empty message.
    ///
    /// Silent failures make a form invalid without contributing an entry to
    /// its message list.
    #[inline]
    pub fn silent_failure() -> Self {
        Self::Failure { message: String::new() }
    }

    /// Builds a validation from a boolean outcome, using `message` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// assert!(Validation::check(3 > 2, "unreachable").is_success());
    /// assert_eq!(
    ///     Validation::check(false, "nope").message(),
    ///     Some("nope")
    /// );
    /// ```
    #[inline]
    pub fn check(passed: bool, message: impl Into<String>) -> Self {
        if passed {
            Self::Success
        } else {
            Self::failure(message)
        }
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` for a failure whose message is empty.
    #[must_use]
    #[inline]
    pub fn is_silent_failure(&self) -> bool {
        matches!(self, Self::Failure { message } if message.is_empty())
    }

    /// Returns the failure message, if any. Silent failures yield `Some("")`.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message } => Some(message),
        }
    }

    /// Returns the failure message only when it should be displayed.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// assert_eq!(Validation::failure("x").visible_message(), Some("x"));
    /// assert_eq!(Validation::silent_failure().visible_message(), None);
    /// assert_eq!(Validation::success().visible_message(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn visible_message(&self) -> Option<&str> {
        self.message().filter(|message| !message.is_empty())
    }

    /// Consumes the validation and returns its failure message, if any.
    #[must_use]
    #[inline]
    pub fn into_message(self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::Failure { message } => Some(message),
        }
    }

    /// Keeps the first failure of `self` and `other`.
    ///
    /// Useful for validators that check several rules in sequence and want
    /// to report the earliest one that failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::success()
    ///     .and(Validation::failure("first"))
    ///     .and(Validation::failure("second"));
    /// assert_eq!(v.message(), Some("first"));
    /// ```
    #[inline]
    pub fn and(self, other: Validation) -> Self {
        match self {
            Self::Success => other,
            failure => failure,
        }
    }

    /// Like [`and`](Self::and), but only evaluates `f` when `self` succeeded.
    #[inline]
    pub fn and_then<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Validation,
    {
        match self {
            Self::Success => f(),
            failure => failure,
        }
    }

    /// Converts into a `Result`, with the failure message on the error side.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// assert_eq!(Validation::success().to_result(), Ok(()));
    /// assert_eq!(Validation::failure("bad").to_result(), Err("bad".to_string()));
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<(), String> {
        match self {
            Self::Success => Ok(()),
            Self::Failure { message } => Err(message),
        }
    }

    /// Wraps a `Result`, turning its error into the failure message.
    #[inline]
    pub fn from_result<E: Into<String>>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(message) => Self::failure(message),
        }
    }
}

impl From<Validation> for Result<(), String> {
    #[inline]
    fn from(validation: Validation) -> Self {
        validation.to_result()
    }
}

impl<E: Into<String>> From<Result<(), E>> for Validation {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        Self::from_result(result)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("valid"),
            Self::Failure { message } if message.is_empty() => f.write_str("invalid"),
            Self::Failure { message } => write!(f, "invalid: {message}"),
        }
    }
}
