use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

use crate::action::Action;
use crate::app::state::{GeneratedPattern, SharedState};
use crate::config::Config;
use crate::dialogs::TextPatternDialog;
use crate::i18n::Dictionary;
use crate::patterns::{PixelFont, TextToGrid};
use crate::theme::tui_palette as tp;
use crate::tui::{Event, EventResponse, Frame, Tui};

/// Host application: owns the pattern dialog's visibility and turns the text
/// it submits into the pattern on the canvas.
pub struct App {
    pub state: SharedState,
    pub pattern_dialog: TextPatternDialog,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        let pattern_dialog =
            TextPatternDialog::new(PixelFont).with_close_on_backdrop(config.close_on_backdrop);
        Self {
            state: SharedState::new(config, dictionary),
            pattern_dialog,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        tracing::info!(locale = %self.state.dictionary.locale, "app started");

        loop {
            self.draw(&mut tui)?;

            let event = tui.next()?;
            let mut action = self.handle_event(&event);
            while let Some(act) = action {
                action = self.dispatch_action(act);
            }

            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        tracing::info!(patterns = self.state.history.len(), "app stopped");
        Ok(())
    }

    /// Turn an input event into the action to dispatch.
    pub fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Tick => None,
            Event::Resize(w, h) => Some(Action::Resize(*w, *h)),
            _ if self.pattern_dialog.is_open() => {
                if let Some(EventResponse::Stop(action)) = self.handle_pattern_dialog_event(event) {
                    return Some(action);
                }
                match event {
                    Event::Key(key)
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && key.code == KeyCode::Char('c') =>
                    {
                        Some(Action::Quit)
                    }
                    _ => None,
                }
            }
            Event::Key(key) => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Char('c') if ctrl => Some(Action::Quit),
                    KeyCode::Char('q') => Some(Action::Quit),
                    KeyCode::Char('n') | KeyCode::Enter => Some(Action::OpenPatternDialog),
                    _ => None,
                }
            }
            Event::Mouse(_) => None,
        }
    }

    /// Apply an action; may yield a follow-up action.
    pub fn dispatch_action(&mut self, action: Action) -> Option<Action> {
        if action != Action::Noop {
            tracing::trace!(%action, "dispatch");
        }
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::OpenPatternDialog => {
                self.pattern_dialog.set_open(true);
            }
            Action::SubmitPatternText(text) => {
                let grid = PixelFont.to_grid(&text);
                tracing::info!(text = %text, width = grid.width(), "pattern generated");
                self.state.push_pattern(GeneratedPattern { text, grid });
                return Some(Action::ClosePatternDialog);
            }
            Action::ClosePatternDialog => {
                self.pattern_dialog.set_open(false);
            }
            Action::Resize(w, h) => {
                tracing::debug!(w, h, "terminal resized");
            }
            Action::Update | Action::Noop => {}
        }
        None
    }

    pub fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| self.render(frame))
    }

    /// Draw the whole screen, dialog last so it sits on top.
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let labels = &self.state.dictionary.app;
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", labels.title), tp::title_focused())),
            chunks[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(24)])
            .split(chunks[1]);
        self.draw_canvas(frame, body[0]);
        self.draw_history(frame, body[1]);

        let footer = Line::from(vec![
            Span::styled(" n ", tp::prompt_active()),
            Span::styled(labels.open_hint.as_str(), tp::hint()),
            Span::raw("  "),
            Span::styled("q ", tp::prompt_active()),
            Span::styled(labels.quit_hint.as_str(), tp::hint()),
        ]);
        frame.render_widget(Paragraph::new(footer), chunks[2]);

        self.pattern_dialog
            .draw(frame, area, &self.state.dictionary.text_modal);
    }

    fn draw_canvas(&self, frame: &mut Frame<'_>, area: Rect) {
        let title = match self.state.current() {
            Some(p) => format!(" {} ", p.text),
            None => format!(" {} ", self.state.dictionary.app.title),
        };
        let block = Block::default()
            .title(Span::styled(title, tp::title_focused()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(tp::focused_border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(pattern) = self.state.current() else {
            frame.render_widget(
                Paragraph::new(Span::styled(self.state.dictionary.app.empty.as_str(), tp::hint())),
                inner,
            );
            return;
        };

        let on = self.state.config.on_char.to_string();
        let off = self.state.config.off_char.to_string();
        let lines: Vec<Line<'_>> = pattern
            .grid
            .rows()
            .iter()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|&lit| {
                            if lit {
                                Span::styled(on.clone(), tp::cell_on())
                            } else {
                                Span::styled(off.clone(), tp::cell_off())
                            }
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_history(&self, frame: &mut Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .state
            .history
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let style = if i == 0 {
                    tp::title_focused()
                } else {
                    Style::default().fg(tp::TEXT_DIM)
                };
                ListItem::new(Span::styled(p.text.clone(), style))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", self.state.dictionary.app.history),
                    tp::title_focused(),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(tp::unfocused_border()),
        );
        frame.render_widget(list, area);
    }
}
