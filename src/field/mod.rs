mod event;
mod machine;
mod state;
mod validator;
#[cfg(test)]
mod tests;

pub use event::{Action, EditDecision, Effect, FieldEvent, TextEdit};
pub use machine::{Rules, transition};
pub use state::{FieldState, Phase};
pub use validator::{Validator, ValidatorFn, Validity};
