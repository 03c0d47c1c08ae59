mod app;
mod message;
mod screen;
mod tasks;
#[cfg(test)]
mod tests;

pub use app::{App, AppConfig};
pub use message::AppMessage;
pub use screen::{Screen, ScreenControl};
pub use tasks::{DefaultRuntimeDriver, RuntimeDriver};
