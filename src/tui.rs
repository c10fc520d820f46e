//! Terminal lifecycle and event polling.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEvent, KeyEventKind, MouseEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Frame<'a> = ratatui::Frame<'a>;

/// Terminal events, normalised for the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No input arrived within one tick.
    Tick,
    Resize(u16, u16),
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// What a component did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse<A> {
    /// Let other components see the event as well.
    Continue(A),
    /// The event was consumed.
    Stop(A),
}

impl<A> EventResponse<A> {
    pub fn into_inner(self) -> A {
        match self {
            Self::Continue(a) | Self::Stop(a) => a,
        }
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(250),
            entered: false,
        })
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.terminal.clear()?;
        self.entered = true;
        tracing::debug!("terminal entered");
        Ok(())
    }

    /// Restore the terminal.  Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        tracing::debug!("terminal restored");
        Ok(())
    }

    pub fn draw(&mut self, f: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for the next input event.
    pub fn next(&mut self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        let ev = match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            event::Event::Mouse(mouse) => Event::Mouse(mouse),
            event::Event::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        };
        Ok(ev)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
