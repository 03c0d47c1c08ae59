mod field;
mod surface;

pub use field::{DEFAULT_MAX_CHARACTERS, ThemedTextField};
pub use surface::{BufferSurface, Caption, TextSurface};
