//! Form-level aggregation over an ordered slice of containers.
//!
//! These are the pure computations behind [`FormValidation`](super::FormValidation);
//! they evaluate every predicate and validator afresh on each call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::container::ValidatorContainer;

/// Whether disabled containers take part in the "all filled" computation.
///
/// `IncludeDisabled` is the established behavior: a disabled, empty,
/// failing field still makes the form "not filled", even though it no longer
/// affects validity or messages. `SkipDisabled` applies the same exclusion
/// used everywhere else.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum FilledPolicy {
    #[default]
    IncludeDisabled,
    SkipDisabled,
}

/// `true` iff no enabled container currently fails.
///
/// Stops at the first enabled failure. Disabled containers are never
/// validated here.
pub fn all_valid(containers: &[ValidatorContainer]) -> bool {
    containers
        .iter()
        .filter(|container| container.is_enabled())
        .all(|container| container.validate().is_success())
}

/// `true` iff every considered container validates or holds content.
pub fn all_filled(containers: &[ValidatorContainer], policy: FilledPolicy) -> bool {
    containers
        .iter()
        .filter(|container| match policy {
            FilledPolicy::IncludeDisabled => true,
            FilledPolicy::SkipDisabled => container.is_enabled(),
        })
        .all(ValidatorContainer::is_filled)
}

/// Failure messages of enabled containers, in container order.
///
/// Silent (empty-message) failures are left out.
pub fn validation_messages(containers: &[ValidatorContainer]) -> Vec<String> {
    containers
        .iter()
        .filter(|container| container.is_enabled())
        .filter_map(|container| container.validate().into_message())
        .filter(|message| !message.is_empty())
        .collect()
}
