use crate::validation::core::Validation;

/// Iterator adapter yielding the displayable failure messages of a sequence
/// of validations, in order.
///
/// Successes and silent failures are skipped.
pub struct VisibleMessages<I> {
    inner: I,
}

impl<'a, I> Iterator for VisibleMessages<I>
where
    I: Iterator<Item = &'a Validation>,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Validation::visible_message)
    }
}

/// Extension methods for iterators over borrowed validations.
///
/// # Examples
///
/// ```
/// use form_rail::validation::{Validation, ValidationIterExt};
///
/// let results = [
///     Validation::failure("first"),
///     Validation::success(),
///     Validation::silent_failure(),
///     Validation::failure("second"),
/// ];
///
/// let messages: Vec<_> = results.iter().visible_messages().collect();
/// assert_eq!(messages, ["first", "second"]);
/// assert!(!results.iter().all_success());
/// ```
pub trait ValidationIterExt<'a>: Iterator<Item = &'a Validation> + Sized {
    fn visible_messages(self) -> VisibleMessages<Self> {
        VisibleMessages { inner: self }
    }

    /// Short-circuits on the first failure.
    fn all_success(mut self) -> bool {
        self.all(Validation::is_success)
    }

    fn first_failure(mut self) -> Option<&'a Validation> {
        self.find(|validation| validation.is_failure())
    }
}

impl<'a, I> ValidationIterExt<'a> for I where I: Iterator<Item = &'a Validation> {}

/// Collecting validations keeps the first failure.
///
/// # Examples
///
/// ```
/// use form_rail::validation::Validation;
///
/// let combined: Validation = vec![
///     Validation::success(),
///     Validation::failure("boom"),
///     Validation::failure("later"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(combined.message(), Some("boom"));
/// ```
impl FromIterator<Validation> for Validation {
    fn from_iter<T: IntoIterator<Item = Validation>>(iter: T) -> Self {
        iter.into_iter()
            .find(Validation::is_failure)
            .unwrap_or(Validation::Success)
    }
}
