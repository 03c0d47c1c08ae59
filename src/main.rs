use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use feedback_field::runtime::AppConfig;
use feedback_field::{App, FeedbackScreen, Stylesheet};

const APP_NAME: &str = "Feedback";
const STYLES: &str = include_str!("../styles/feedback.css");
const STYLES_PATH: &str = "styles/feedback.css";
const WATCH_STYLES_ENV: &str = "FEEDBACK_WATCH_STYLES";
const LOG_PATH_ENV: &str = "FEEDBACK_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging()?;
    let stylesheet = load_stylesheet();
    let mut app = App::new(APP_NAME, FeedbackScreen::from_stylesheet(&stylesheet)).with_config(
        AppConfig {
            tick_rate: Duration::from_millis(500),
        },
    );
    if env_flag(WATCH_STYLES_ENV) {
        if Path::new(STYLES_PATH).exists() {
            app = app.watch_stylesheet(STYLES_PATH);
        } else {
            warn!(
                path = STYLES_PATH,
                "{WATCH_STYLES_ENV} was set but stylesheet file was not found",
            );
        }
    }
    let screen = app.run().await?;
    info!(
        chars = screen.field().count(),
        "feedback screen closed"
    );
    Ok(())
}

/// Logs go to a file because the terminal belongs to the UI.
fn init_logging() -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("{LOG_PATH_ENV} must name a file: {}", path.display()))?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("install log subscriber")?;
    Ok(Some(guard))
}

fn load_stylesheet() -> Stylesheet {
    match Stylesheet::from_file(STYLES_PATH) {
        Ok(sheet) => sheet,
        Err(err) => {
            warn!(
                path = STYLES_PATH,
                error = ?err,
                "unable to read stylesheet from disk, falling back to embedded styles",
            );
            Stylesheet::parse(STYLES).unwrap_or_default()
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"))
        .unwrap_or(false)
}
