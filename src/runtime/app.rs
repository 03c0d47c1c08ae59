use std::collections::hash_map::DefaultHasher;
use std::env;
use std::hash::{Hash, Hasher};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::fs;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{info, trace, warn};

use crate::events::DEFAULT_TICK_RATE;
use crate::renderer::Renderer;
use crate::theme::Stylesheet;

use super::message::AppMessage;
use super::screen::{Screen, ScreenControl};
use super::tasks::{DefaultRuntimeDriver, RuntimeDriver};

const STYLESHEET_POLL_INTERVAL: Duration = Duration::from_millis(400);

#[derive(Clone, Copy)]
enum RendererMode {
    Interactive,
    Headless,
}

#[derive(Clone, Copy, Debug)]
pub struct AppConfig {
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

pub struct App<S: Screen> {
    name: &'static str,
    screen: S,
    config: AppConfig,
    driver: Arc<dyn RuntimeDriver>,
    stylesheet_watch: Option<PathBuf>,
    renderer_mode: RendererMode,
}

impl<S: Screen> App<S> {
    pub fn new(name: &'static str, screen: S) -> Self {
        Self {
            name,
            screen,
            config: AppConfig::default(),
            driver: Arc::new(DefaultRuntimeDriver),
            stylesheet_watch: None,
            renderer_mode: RendererMode::Interactive,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Re-applies the stylesheet at `path` whenever its contents change.
    pub fn watch_stylesheet<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        let candidate = path.into();
        let resolved = if candidate.is_absolute() {
            candidate
        } else {
            match env::current_dir() {
                Ok(cwd) => cwd.join(&candidate),
                Err(_) => candidate,
            }
        };
        self.stylesheet_watch = Some(resolved);
        self
    }

    pub fn with_driver<D>(mut self, driver: D) -> Self
    where
        D: RuntimeDriver + 'static,
    {
        self.driver = Arc::new(driver);
        self
    }

    pub fn headless(mut self) -> Self {
        self.renderer_mode = RendererMode::Headless;
        self
    }

    /// Runs until shutdown and hands the screen back.
    pub async fn run(mut self) -> anyhow::Result<S> {
        info!(app = self.name, "starting runtime");
        let (tx, mut rx) = mpsc::channel(128);
        let mut renderer = match self.renderer_mode {
            RendererMode::Interactive => Renderer::new(self.name).context("initialize renderer")?,
            RendererMode::Headless => Renderer::headless().context("initialize renderer")?,
        };

        let event_task = self.driver.spawn_terminal_events(tx.clone());
        let tick_task = self
            .driver
            .spawn_tick_loop(tx.clone(), self.config.tick_rate);
        let shutdown_task = self.driver.spawn_shutdown_watcher(tx.clone());
        let stylesheet_task = self
            .stylesheet_watch
            .clone()
            .map(|path| spawn_stylesheet_watcher(path, tx.clone()));

        if tx.send(AppMessage::RequestRender).await.is_err() {
            warn!(app = self.name, "failed to enqueue initial render request");
        }
        drop(tx);

        while let Some(message) = rx.recv().await {
            trace!(app = self.name, message = ?message, "processing app message");
            match message {
                AppMessage::RequestRender => {}
                AppMessage::ExternalEvent(event) => {
                    if self.screen.handle_event(&event) == ScreenControl::Quit {
                        info!(app = self.name, "screen requested exit");
                        break;
                    }
                }
                AppMessage::Shutdown => {
                    info!(app = self.name, "shutdown requested");
                    break;
                }
                AppMessage::StylesheetUpdated(stylesheet) => {
                    self.screen.apply_stylesheet(&stylesheet);
                    info!(app = self.name, "stylesheet reloaded");
                }
            }
            let screen = &self.screen;
            renderer
                .draw(|frame| {
                    let area = frame.size();
                    screen.render(frame, area);
                })
                .inspect_err(|err| warn!(app = self.name, error = ?err, "renderer draw failed"))?;
        }

        drop(renderer);
        trace!(app = self.name, "tearing down runtime tasks");
        abort_and_log("terminal_events", event_task).await;
        abort_and_log("tick_loop", tick_task).await;
        abort_and_log("shutdown_watcher", shutdown_task).await;
        if let Some(task) = stylesheet_task {
            abort_and_log("stylesheet_watcher", task).await;
        }
        info!(app = self.name, "runtime stopped");
        Ok(self.screen)
    }
}

fn spawn_stylesheet_watcher(path: PathBuf, tx: mpsc::Sender<AppMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(path = %path.display(), "stylesheet watcher started");
        let mut fingerprint = fingerprint_if_exists(&path).await;
        loop {
            sleep(STYLESHEET_POLL_INTERVAL).await;
            match maybe_reload_stylesheet(&path, &mut fingerprint).await {
                Ok(Some(stylesheet)) => {
                    info!(path = %path.display(), "stylesheet change detected");
                    if tx
                        .send(AppMessage::StylesheetUpdated(stylesheet))
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => warn!(path = %path.display(), error = ?err, "stylesheet reload failed"),
            }
        }
    })
}

async fn fingerprint_if_exists(path: &Path) -> Option<u64> {
    fs::read_to_string(path)
        .await
        .ok()
        .map(|contents| fingerprint(&contents))
}

/// Returns a freshly parsed sheet when the file content changed since the
/// last successful read.
pub(crate) async fn maybe_reload_stylesheet(
    path: &Path,
    last: &mut Option<u64>,
) -> anyhow::Result<Option<Arc<Stylesheet>>> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let current = fingerprint(&contents);
    if *last == Some(current) {
        return Ok(None);
    }
    let stylesheet = Stylesheet::parse(&contents)
        .with_context(|| format!("parse stylesheet {}", path.display()))?;
    *last = Some(current);
    Ok(Some(Arc::new(stylesheet)))
}

fn fingerprint(input: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish()
}

async fn abort_and_log(label: &str, handle: JoinHandle<()>) {
    handle.abort();
    match handle.await {
        Ok(_) => trace!(task = label, "task finished before abort"),
        Err(err) if err.is_cancelled() => trace!(task = label, "task cancellation confirmed"),
        Err(err) => warn!(task = label, error = ?err, "task join failed"),
    }
}
