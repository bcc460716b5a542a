#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three aggregate outputs of a form at one point in time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormSnapshot {
    pub all_valid: bool,
    pub all_filled: bool,
    pub validation_messages: Vec<String>,
}

impl FormSnapshot {
    /// The messages joined with newlines; empty when there are none.
    #[must_use]
    pub fn errors_description(&self) -> String {
        self.validation_messages.join("\n")
    }
}
