use std::io::{Stdout, stdout};

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{CrosstermBackend, TestBackend};
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

mod field;

pub use field::{FieldView, render_field};

pub const HEADLESS_SIZE: (u16, u16) = (80, 24);

enum Target {
    Terminal(Terminal<CrosstermBackend<Stdout>>),
    Headless(Terminal<TestBackend>),
}

pub struct Renderer {
    target: Target,
}

impl Renderer {
    /// Takes over the terminal until the renderer is dropped.
    pub fn new(title: &str) -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste,
            Hide,
            SetTitle(title)
        )
        .context("prepare terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("build terminal")?;
        Ok(Self {
            target: Target::Terminal(terminal),
        })
    }

    pub fn headless() -> anyhow::Result<Self> {
        let (width, height) = HEADLESS_SIZE;
        Self::headless_sized(width, height)
    }

    pub fn headless_sized(width: u16, height: u16) -> anyhow::Result<Self> {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).context("build headless terminal")?;
        Ok(Self {
            target: Target::Headless(terminal),
        })
    }

    pub fn draw<F>(&mut self, render: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        match &mut self.target {
            Target::Terminal(terminal) => {
                terminal.draw(render).context("draw frame")?;
            }
            Target::Headless(terminal) => {
                terminal.draw(render).context("draw headless frame")?;
            }
        }
        Ok(())
    }

    /// Last drawn buffer of a headless renderer.
    pub fn buffer(&self) -> Option<&Buffer> {
        match &self.target {
            Target::Terminal(_) => None,
            Target::Headless(terminal) => Some(terminal.backend().buffer()),
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        if let Target::Terminal(_) = self.target {
            let _ = disable_raw_mode();
            let mut stdout = stdout();
            let _ = execute!(
                stdout,
                Show,
                DisableBracketedPaste,
                DisableMouseCapture,
                LeaveAlternateScreen,
                SetTitle("Terminal")
            );
        }
    }
}
