use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

impl From<bool> for Validity {
    fn from(value: bool) -> Self {
        if value {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

pub type ValidatorFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Caller-supplied predicate over the proposed full text.
///
/// A predicate that panics is reported as [`Validity::Invalid`].
#[derive(Clone)]
pub struct Validator {
    check: ValidatorFn,
}

impl Validator {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    pub fn max_chars(limit: usize) -> Self {
        Self::new(move |text| text.chars().count() <= limit)
    }

    pub fn validate(&self, text: &str) -> Validity {
        match catch_unwind(AssertUnwindSafe(|| (self.check)(text))) {
            Ok(result) => Validity::from(result),
            Err(_) => {
                warn!(len = text.len(), "validator panicked, treating text as invalid");
                Validity::Invalid
            }
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

pub(crate) fn validate(validator: Option<&Validator>, text: &str) -> Validity {
    validator
        .map(|validator| validator.validate(text))
        .unwrap_or(Validity::Valid)
}
