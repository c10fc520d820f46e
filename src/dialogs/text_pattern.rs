//! Text-to-pattern dialog: type text, watch it as a dot-matrix preview, hand
//! the final text to the owner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use tui_input::{Input, InputRequest};
use unicode_width::UnicodeWidthChar;

use crate::action::Action;
use crate::i18n::TextModalLabels;
use crate::patterns::{GLYPH_HEIGHT, Grid, PixelFont, TextToGrid};
use crate::theme::tui_palette as tp;
use crate::tui::{EventResponse, Frame};

/// Rows in the preview area, whatever the text.
pub const PREVIEW_ROWS: usize = GLYPH_HEIGHT;
/// Terminal columns used to draw one preview cell.
pub const CELL_WIDTH: u16 = 2;
/// Rows reserved for the wrapped description.
const DESCRIPTION_ROWS: u16 = 3;

const CELL_ON: &str = "●";
const CELL_OFF: &str = "·";
const CLOSE_GLYPH: &str = " × ";

/// Columns the preview is laid out with: the width of the first row, or 1
/// for an empty grid.
pub fn preview_columns(grid: &Grid) -> usize {
    match grid.width() {
        0 => 1,
        w => w,
    }
}

/// Control holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Cancel,
    Generate,
    Close,
}

/// Screen areas of the clickable parts, as of the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitAreas {
    dialog: Rect,
    input: Rect,
    close: Rect,
    cancel: Rect,
    generate: Rect,
}

/// Rectangles for one draw of the dialog.
struct DialogLayout {
    dialog: Rect,
    description: Rect,
    input: Rect,
    preview_label: Rect,
    preview: Rect,
    buttons: Rect,
}

impl DialogLayout {
    fn new(area: Rect) -> Self {
        let dialog_w = 64.min(area.width.saturating_sub(4)).max(24.min(area.width));
        let dialog_h = 20u16.min(area.height);
        let x = area.x + (area.width.saturating_sub(dialog_w)) / 2;
        let y = area.y + (area.height.saturating_sub(dialog_h)) / 2;
        let dialog = Rect::new(x, y, dialog_w, dialog_h);

        let inner = Rect::new(
            dialog.x + 2,
            dialog.y + 1,
            dialog.width.saturating_sub(4),
            dialog.height.saturating_sub(2),
        );
        let row = |offset: u16, height: u16| {
            let top = (inner.y + offset).min(inner.bottom());
            let height = height.min(inner.bottom().saturating_sub(top));
            Rect::new(inner.x, top, inner.width, height).intersection(dialog)
        };

        Self {
            dialog,
            description: row(0, DESCRIPTION_ROWS),
            input: row(DESCRIPTION_ROWS + 1, 1),
            preview_label: row(DESCRIPTION_ROWS + 3, 1),
            preview: row(DESCRIPTION_ROWS + 4, PREVIEW_ROWS as u16 + 2),
            buttons: row(DESCRIPTION_ROWS + 14, 1),
        }
    }
}

/// Modal dialog turning typed text into a dot-matrix preview.
///
/// The owner controls visibility through [`set_open`](Self::set_open); the
/// dialog reports back only through the [`Action`]s its handlers return:
/// [`Action::SubmitPatternText`] when the user confirms and
/// [`Action::ClosePatternDialog`] when they dismiss it.  Neither closes the
/// dialog by itself.
pub struct TextPatternDialog<C: TextToGrid = PixelFont> {
    converter: C,
    open: bool,
    input: Input,
    preview: Grid,
    focus: Focus,
    close_on_backdrop: bool,
    hit: Option<HitAreas>,
}

impl Default for TextPatternDialog<PixelFont> {
    fn default() -> Self {
        Self::new(PixelFont)
    }
}

impl<C: TextToGrid> TextPatternDialog<C> {
    /// A closed dialog using `converter` for the preview.
    pub fn new(converter: C) -> Self {
        let preview = converter.to_grid("");
        Self {
            converter,
            open: false,
            input: Input::default(),
            preview,
            focus: Focus::Input,
            close_on_backdrop: false,
            hit: None,
        }
    }

    /// Treat a click outside the dialog as a dismissal.
    pub fn with_close_on_backdrop(mut self, close_on_backdrop: bool) -> Self {
        self.close_on_backdrop = close_on_backdrop;
        self
    }

    // ── State ───────────────────────────────────────────────────────────────

    /// Push the owner's visibility flag.
    ///
    /// Text, preview and focus are reset on the closed → open edge only;
    /// pushing `true` again while open leaves them alone.
    pub fn set_open(&mut self, open: bool) {
        match (self.open, open) {
            (false, true) => {
                self.open = true;
                self.input.reset();
                self.focus = Focus::Input;
                self.refresh_preview();
                tracing::debug!("text pattern dialog opened");
            }
            (true, false) => {
                self.open = false;
                self.hit = None;
                tracing::debug!("text pattern dialog closed");
            }
            _ => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current (uppercased) input text.
    pub fn text(&self) -> &str {
        self.input.value()
    }

    /// Preview grid for the current text.
    pub fn preview(&self) -> &Grid {
        &self.preview
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the Generate button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.input.value().is_empty()
    }

    // ── Operations ──────────────────────────────────────────────────────────

    /// Replace the input text.  The text is uppercased before it is stored
    /// and the preview is recomputed from it.
    pub fn set_text(&mut self, text: &str) -> Action {
        if !self.open {
            return Action::Noop;
        }
        let upper = text.to_uppercase();
        let cursor = upper.chars().count();
        self.input = Input::new(upper).with_cursor(cursor);
        self.refresh_preview();
        Action::Update
    }

    /// Confirm the dialog.  Yields the current text when there is any.
    pub fn submit(&mut self) -> Action {
        if !self.open || !self.can_submit() {
            return Action::Noop;
        }
        let text = self.input.value().to_string();
        tracing::info!(text = %text, "text pattern submitted");
        Action::SubmitPatternText(text)
    }

    /// Dismiss the dialog.  The text is left as it is.
    pub fn cancel(&mut self) -> Action {
        if !self.open {
            return Action::Noop;
        }
        tracing::debug!("text pattern dialog dismissed");
        Action::ClosePatternDialog
    }

    fn refresh_preview(&mut self) {
        self.preview = self.converter.to_grid(self.input.value());
    }

    /// Apply one editing request, keeping the text uppercase.
    fn edit(&mut self, request: InputRequest) -> Action {
        let Some(changed) = self.input.handle(request) else {
            return Action::Noop;
        };
        if changed.value {
            let value = self.input.value();
            let upper = value.to_uppercase();
            if upper != value {
                // Uppercasing can change the char count (ß → SS); keep the
                // cursor after the same logical prefix.
                let prefix: String = value.chars().take(self.input.cursor()).collect();
                let cursor = prefix.to_uppercase().chars().count();
                self.input = Input::new(upper).with_cursor(cursor);
            }
            self.refresh_preview();
        }
        Action::Update
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Input, Focus::Cancel];
        if self.can_submit() {
            order.push(Focus::Generate);
        }
        order.push(Focus::Close);
        order
    }

    fn cycle_focus(&mut self, forward: bool) -> Action {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        self.focus = order[next];
        Action::Update
    }

    // ── Events ──────────────────────────────────────────────────────────────

    /// Handle a key press.  Returns `None` when the dialog is closed and
    /// `Continue` for keys that belong to the owner (Ctrl-C).
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<EventResponse<Action>> {
        if !self.open {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(EventResponse::Continue(Action::Noop));
        }

        let action = match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Enter => match self.focus {
                Focus::Input | Focus::Generate => self.submit(),
                Focus::Cancel | Focus::Close => self.cancel(),
            },
            _ if self.focus == Focus::Input => match input_request(key) {
                Some(request) => self.edit(request),
                None => Action::Noop,
            },
            KeyCode::Left | KeyCode::Up => self.cycle_focus(false),
            KeyCode::Right | KeyCode::Down => self.cycle_focus(true),
            _ => Action::Noop,
        };
        Some(EventResponse::Stop(action))
    }

    /// Handle a mouse event.  While open the dialog is modal, so every mouse
    /// event is consumed.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Option<EventResponse<Action>> {
        if !self.open {
            return None;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Some(EventResponse::Stop(Action::Noop));
        }
        let Some(hit) = self.hit else {
            return Some(EventResponse::Stop(Action::Noop));
        };

        let pos = Position::new(mouse.column, mouse.row);
        let action = if hit.close.contains(pos) || hit.cancel.contains(pos) {
            self.cancel()
        } else if hit.generate.contains(pos) {
            self.submit()
        } else if hit.input.contains(pos) {
            self.focus = Focus::Input;
            Action::Update
        } else if !hit.dialog.contains(pos) && self.close_on_backdrop {
            self.cancel()
        } else {
            Action::Noop
        };
        Some(EventResponse::Stop(action))
    }

    // ── Drawing ─────────────────────────────────────────────────────────────

    /// Draw the dialog over `area`.  Draws nothing while closed.
    pub fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, labels: &TextModalLabels) {
        if !self.open {
            self.hit = None;
            return;
        }

        frame.buffer_mut().set_style(area, tp::backdrop());

        let layout = DialogLayout::new(area);
        frame.render_widget(Clear, layout.dialog);

        let block = Block::default()
            .title(Span::styled(format!(" {} ", labels.title), tp::title_focused()))
            .borders(Borders::ALL)
            .border_style(tp::focused_border())
            .border_type(BorderType::Rounded)
            .style(tp::popup_bg());
        frame.render_widget(block, layout.dialog);

        let close = Rect::new(
            layout.dialog.right().saturating_sub(text_width(CLOSE_GLYPH) + 1).max(layout.dialog.x),
            layout.dialog.y,
            3.min(layout.dialog.width),
            1.min(layout.dialog.height),
        );
        let close_style = if self.focus == Focus::Close {
            tp::button_focused()
        } else {
            tp::title_focused()
        };
        frame.render_widget(Paragraph::new(Span::styled(CLOSE_GLYPH, close_style)), close);

        frame.render_widget(
            Paragraph::new(Span::styled(labels.description.as_str(), tp::hint()))
                .wrap(Wrap { trim: true }),
            layout.description,
        );

        self.draw_input(frame, layout.input, labels);

        frame.render_widget(
            Paragraph::new(Span::styled(labels.preview.as_str(), tp::section())),
            layout.preview_label,
        );
        self.draw_preview(frame, layout.preview);

        let (cancel, generate) = self.draw_buttons(frame, layout.buttons, labels);

        self.hit = Some(HitAreas {
            dialog: layout.dialog,
            input: layout.input,
            close,
            cancel,
            generate,
        });
    }

    fn draw_input(&self, frame: &mut Frame<'_>, area: Rect, labels: &TextModalLabels) {
        if area.height == 0 {
            return;
        }
        let focused = self.focus == Focus::Input;
        let prefix = if focused {
            Span::styled("❯ ", tp::prompt_active())
        } else {
            Span::styled("❯ ", tp::prompt_inactive())
        };
        let prefix_width: u16 = 2;
        let input_width = area.width.saturating_sub(prefix_width);

        let line = if self.input.value().is_empty() {
            Line::from(vec![prefix, Span::styled(labels.placeholder.as_str(), tp::placeholder())])
        } else {
            let scroll = self.input.visual_scroll(input_width as usize);
            Line::from(vec![
                prefix,
                Span::styled(skip_columns(self.input.value(), scroll), Style::default().fg(tp::TEXT)),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);

        if focused {
            let scroll = self.input.visual_scroll(input_width as usize);
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            frame.set_cursor_position((area.x + prefix_width + cursor.min(input_width), area.y));
        }
    }

    fn draw_preview(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height < 3 || area.width < 3 {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(tp::unfocused_border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = preview_columns(&self.preview);
        let visible = (inner.width / CELL_WIDTH) as usize;
        // Keep the most recently typed columns in view.
        let start = columns.saturating_sub(visible);

        let lines: Vec<Line<'_>> = (0..PREVIEW_ROWS)
            .map(|r| {
                let Some(row) = self.preview.rows().get(r) else {
                    return Line::default();
                };
                let spans: Vec<Span<'_>> = row
                    .iter()
                    .skip(start)
                    .take(visible)
                    .map(|&lit| {
                        if lit {
                            Span::styled(format!("{CELL_ON} "), tp::cell_on())
                        } else {
                            Span::styled(format!("{CELL_OFF} "), tp::cell_off())
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Draw the right-aligned Cancel / Generate buttons, returning their
    /// areas.
    fn draw_buttons(&self, frame: &mut Frame<'_>, area: Rect, labels: &TextModalLabels) -> (Rect, Rect) {
        let cancel_label = format!(" {} ", labels.cancel);
        let generate_label = format!(" {} ", labels.generate);
        let cancel_w = text_width(&cancel_label).min(area.width);
        let generate_w = text_width(&generate_label).min(area.width);
        let gap = 2u16;

        let generate = Rect::new(
            area.right().saturating_sub(generate_w),
            area.y,
            generate_w,
            area.height,
        );
        let cancel = Rect::new(
            generate.x.saturating_sub(gap + cancel_w).max(area.x),
            area.y,
            cancel_w.min(generate.x.saturating_sub(area.x)),
            area.height,
        );

        let cancel_style = if self.focus == Focus::Cancel {
            tp::button_focused()
        } else {
            tp::button()
        };
        let generate_style = if !self.can_submit() {
            tp::button_disabled()
        } else if self.focus == Focus::Generate {
            tp::button_focused()
        } else {
            tp::button()
        };

        frame.render_widget(Paragraph::new(Span::styled(cancel_label, cancel_style)), cancel);
        frame.render_widget(Paragraph::new(Span::styled(generate_label, generate_style)), generate);
        (cancel, generate)
    }
}

/// Map a key press to a text-editing request.
fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let request = match key.code {
        KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
        KeyCode::Char('u') if ctrl => InputRequest::DeleteLine,
        KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
        KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
        KeyCode::Char(c) if !ctrl && !alt => InputRequest::InsertChar(c),
        KeyCode::Backspace => InputRequest::DeletePrevChar,
        KeyCode::Delete => InputRequest::DeleteNextChar,
        KeyCode::Left if ctrl => InputRequest::GoToPrevWord,
        KeyCode::Right if ctrl => InputRequest::GoToNextWord,
        KeyCode::Left => InputRequest::GoToPrevChar,
        KeyCode::Right => InputRequest::GoToNextChar,
        KeyCode::Home => InputRequest::GoToStart,
        KeyCode::End => InputRequest::GoToEnd,
        _ => return None,
    };
    Some(request)
}

fn text_width(s: &str) -> u16 {
    s.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>() as u16
}

/// Drop leading characters until `cols` display columns are skipped.
fn skip_columns(s: &str, cols: usize) -> &str {
    let mut skipped = 0;
    for (i, c) in s.char_indices() {
        if skipped >= cols {
            return &s[i..];
        }
        skipped += c.width().unwrap_or(0);
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, Locale};
    use crate::patterns::{GLYPH_WIDTH, text_to_grid};
    use ratatui::{Terminal, backend::TestBackend};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str<C: TextToGrid>(dialog: &mut TextPatternDialog<C>, s: &str) {
        for c in s.chars() {
            dialog.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    fn open_dialog() -> TextPatternDialog {
        let mut dialog = TextPatternDialog::default();
        dialog.set_open(true);
        dialog
    }

    fn labels() -> TextModalLabels {
        Dictionary::for_locale(Locale::En).text_modal
    }

    fn render<C: TextToGrid>(dialog: &mut TextPatternDialog<C>, w: u16, h: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        let labels = labels();
        terminal
            .draw(|f| {
                let area = f.area();
                dialog.draw(f, area, &labels);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(w as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Converter that records every text it was asked for.
    fn spy() -> (impl Fn(&str) -> Grid, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&calls);
        let converter = move |t: &str| {
            log.borrow_mut().push(t.to_string());
            text_to_grid(t)
        };
        (converter, calls)
    }

    #[test]
    fn test_typing_is_uppercased() {
        let mut dialog = open_dialog();
        type_str(&mut dialog, "hi");
        assert_eq!(dialog.text(), "HI");
        assert_eq!(dialog.preview(), &text_to_grid("HI"));
    }

    #[test]
    fn test_set_text_uppercases_and_recomputes() {
        let mut dialog = open_dialog();
        assert_eq!(dialog.set_text("Straße 9"), Action::Update);
        assert_eq!(dialog.text(), "STRASSE 9");
        assert_eq!(dialog.preview(), &text_to_grid("STRASSE 9"));
    }

    #[test]
    fn test_uppercasing_keeps_cursor_after_typed_char() {
        let mut dialog = open_dialog();
        type_str(&mut dialog, "ab");
        dialog.handle_key_event(key(KeyCode::Left));
        type_str(&mut dialog, "ß");
        assert_eq!(dialog.text(), "ASSB");
        type_str(&mut dialog, "x");
        assert_eq!(dialog.text(), "ASSXB");
    }

    #[test]
    fn test_preview_tracks_every_edit() {
        let mut dialog = open_dialog();
        type_str(&mut dialog, "cat");
        dialog.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(dialog.text(), "CA");
        assert_eq!(dialog.preview(), &text_to_grid("CA"));

        dialog.handle_key_event(ctrl('u'));
        assert_eq!(dialog.text(), "");
        assert_eq!(dialog.preview(), &text_to_grid(""));
    }

    #[test]
    fn test_open_resets_state() {
        let (converter, calls) = spy();
        let mut dialog = TextPatternDialog::new(converter);
        dialog.set_open(true);
        type_str(&mut dialog, "cat");
        dialog.set_open(false);
        calls.borrow_mut().clear();

        dialog.set_open(true);
        assert_eq!(dialog.text(), "");
        assert_eq!(dialog.preview(), &text_to_grid(""));
        assert_eq!(calls.borrow().as_slice(), [String::new()]);
        assert_eq!(dialog.focus(), Focus::Input);
    }

    #[test]
    fn test_reset_happens_only_on_open_edge() {
        let (converter, calls) = spy();
        let mut dialog = TextPatternDialog::new(converter);
        dialog.set_open(true);
        type_str(&mut dialog, "keep");

        // Re-asserting the flag while open is not an edge.
        dialog.set_open(true);
        assert_eq!(dialog.text(), "KEEP");

        // Rapid close/open/close/open resets once per open edge.
        calls.borrow_mut().clear();
        dialog.set_open(false);
        dialog.set_open(false);
        dialog.set_open(true);
        dialog.set_open(false);
        dialog.set_open(true);
        assert_eq!(calls.borrow().len(), 2);
        assert_eq!(dialog.text(), "");
    }

    #[test]
    fn test_submit_requires_text() {
        let mut dialog = open_dialog();
        assert!(!dialog.can_submit());
        assert_eq!(dialog.submit(), Action::Noop);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)),
            Some(EventResponse::Stop(Action::Noop))
        );

        type_str(&mut dialog, "go");
        assert_eq!(dialog.submit(), Action::SubmitPatternText("GO".into()));
        // Submitting leaves the state to the owner.
        assert!(dialog.is_open());
        assert_eq!(dialog.text(), "GO");
    }

    #[test]
    fn test_cancel_fires_once_per_request_and_keeps_text() {
        let mut dialog = open_dialog();
        type_str(&mut dialog, "abc");
        assert_eq!(dialog.cancel(), Action::ClosePatternDialog);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)),
            Some(EventResponse::Stop(Action::ClosePatternDialog))
        );
        assert_eq!(dialog.text(), "ABC");
    }

    #[test]
    fn test_closed_dialog_ignores_everything() {
        let mut dialog = TextPatternDialog::default();
        assert_eq!(dialog.handle_key_event(key(KeyCode::Char('a'))), None);
        assert_eq!(dialog.handle_mouse_event(click(1, 1)), None);
        assert_eq!(dialog.set_text("x"), Action::Noop);
        assert_eq!(dialog.submit(), Action::Noop);
        assert_eq!(dialog.cancel(), Action::Noop);
        assert_eq!(dialog.text(), "");
    }

    #[test]
    fn test_ctrl_c_is_left_to_the_owner() {
        let mut dialog = open_dialog();
        type_str(&mut dialog, "ab");
        assert_eq!(
            dialog.handle_key_event(ctrl('c')),
            Some(EventResponse::Continue(Action::Noop))
        );
        assert_eq!(dialog.text(), "AB");
    }

    #[test]
    fn test_tab_skips_disabled_generate() {
        let mut dialog = open_dialog();
        dialog.handle_key_event(key(KeyCode::Tab));
        assert_eq!(dialog.focus(), Focus::Cancel);
        dialog.handle_key_event(key(KeyCode::Tab));
        assert_eq!(dialog.focus(), Focus::Close);
        dialog.handle_key_event(key(KeyCode::Tab));
        assert_eq!(dialog.focus(), Focus::Input);

        type_str(&mut dialog, "a");
        dialog.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(dialog.focus(), Focus::Close);
        dialog.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(dialog.focus(), Focus::Generate);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)),
            Some(EventResponse::Stop(Action::SubmitPatternText("A".into())))
        );
    }

    #[test]
    fn test_enter_on_cancel_dismisses() {
        let mut dialog = open_dialog();
        type_str(&mut dialog, "a");
        dialog.handle_key_event(key(KeyCode::Tab));
        assert_eq!(dialog.focus(), Focus::Cancel);
        // Typing is ignored away from the input.
        dialog.handle_key_event(key(KeyCode::Char('z')));
        assert_eq!(dialog.text(), "A");
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)),
            Some(EventResponse::Stop(Action::ClosePatternDialog))
        );
    }

    #[test]
    fn test_preview_columns() {
        assert_eq!(preview_columns(&Grid::empty()), 1);
        assert_eq!(preview_columns(&text_to_grid("A")), GLYPH_WIDTH);
    }

    #[test]
    fn test_closed_dialog_draws_nothing() {
        let mut dialog = TextPatternDialog::default();
        let lines = render(&mut dialog, 80, 24);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_open_dialog_draws_labels_and_placeholder() {
        let mut dialog = open_dialog();
        let screen = render(&mut dialog, 80, 24).join("\n");
        let l = labels();
        for label in [&l.title, &l.description, &l.placeholder, &l.preview, &l.cancel, &l.generate] {
            assert!(screen.contains(label.as_str()), "missing {label:?}");
        }
        assert!(screen.contains('×'));
        // Empty text: no preview cells yet.
        assert!(!screen.contains(CELL_ON) && !screen.contains(CELL_OFF));
    }

    /// Text inside `area`, one string per row with padding removed.
    fn region_text(buffer: &Buffer, area: Rect) -> String {
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn squash(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_description_wraps_for_every_locale() {
        for locale in Locale::all() {
            let labels = Dictionary::for_locale(locale).text_modal;
            let mut dialog = open_dialog();
            let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
            terminal
                .draw(|f| {
                    let area = f.area();
                    dialog.draw(f, area, &labels);
                })
                .unwrap();

            let layout = DialogLayout::new(Rect::new(0, 0, 160, 40));
            let shown = region_text(terminal.backend().buffer(), layout.description);
            assert_eq!(
                squash(&shown),
                squash(&labels.description),
                "{locale}: description clipped"
            );
        }
    }

    #[test]
    fn test_bottom_border_has_no_fixed_text() {
        let mut dialog = open_dialog();
        let lines = render(&mut dialog, 80, 24);
        let layout = DialogLayout::new(Rect::new(0, 0, 80, 24));
        let bottom = &lines[layout.dialog.bottom() as usize - 1];
        assert!(
            bottom.trim().chars().all(|c| "╰─╯".contains(c)),
            "got {bottom:?}"
        );
    }

    #[test]
    fn test_preview_draws_seven_rows_of_cells() {
        let mut dialog = open_dialog();
        dialog.set_text("i");
        let lines = render(&mut dialog, 80, 24);
        let cell_rows: Vec<&String> = lines
            .iter()
            .filter(|l| l.contains(CELL_ON) || l.contains(CELL_OFF))
            .collect();
        assert_eq!(cell_rows.len(), PREVIEW_ROWS);
        // "I" is lit across the top row: .###.
        let top = cell_rows[0];
        assert_eq!(top.matches(CELL_ON).count(), 3);
        assert_eq!(top.matches(CELL_OFF).count(), 2);
        assert!(lines.iter().any(|l| l.contains("❯ I")));
    }

    #[test]
    fn test_wide_preview_shows_the_tail() {
        let mut dialog = open_dialog();
        dialog.set_text(&"W".repeat(20));
        dialog.set_text(&format!("{}I", "W".repeat(20)));
        let lines = render(&mut dialog, 80, 24);
        let bottom = lines
            .iter()
            .filter(|l| l.contains(CELL_ON) || l.contains(CELL_OFF))
            .last()
            .cloned()
            .unwrap();
        // The last glyph's bottom row (.###.) ends the visible row.
        let cells: String = bottom.chars().filter(|c| *c == '●' || *c == '·').collect();
        assert!(cells.ends_with("·●●●·"), "got {cells}");
    }

    #[test]
    fn test_mouse_buttons() {
        let mut dialog = open_dialog();
        render(&mut dialog, 80, 24);
        let hit = dialog.hit.unwrap();

        // Disabled Generate does nothing.
        assert_eq!(
            dialog.handle_mouse_event(click(hit.generate.x, hit.generate.y)),
            Some(EventResponse::Stop(Action::Noop))
        );

        dialog.set_text("ok");
        assert_eq!(
            dialog.handle_mouse_event(click(hit.generate.x, hit.generate.y)),
            Some(EventResponse::Stop(Action::SubmitPatternText("OK".into())))
        );
        assert_eq!(
            dialog.handle_mouse_event(click(hit.cancel.x, hit.cancel.y)),
            Some(EventResponse::Stop(Action::ClosePatternDialog))
        );
        assert_eq!(
            dialog.handle_mouse_event(click(hit.close.x + 1, hit.close.y)),
            Some(EventResponse::Stop(Action::ClosePatternDialog))
        );
    }

    #[test]
    fn test_backdrop_click_respects_owner_choice() {
        let mut dialog = open_dialog();
        render(&mut dialog, 80, 24);
        assert_eq!(
            dialog.handle_mouse_event(click(0, 0)),
            Some(EventResponse::Stop(Action::Noop))
        );

        let mut dialog = TextPatternDialog::default().with_close_on_backdrop(true);
        dialog.set_open(true);
        render(&mut dialog, 80, 24);
        assert_eq!(
            dialog.handle_mouse_event(click(0, 0)),
            Some(EventResponse::Stop(Action::ClosePatternDialog))
        );
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut dialog = open_dialog();
        dialog.set_text("hello");
        render(&mut dialog, 10, 5);
        render(&mut dialog, 1, 1);
    }

    #[test]
    fn test_skip_columns() {
        assert_eq!(skip_columns("ABC", 0), "ABC");
        assert_eq!(skip_columns("ABC", 2), "C");
        assert_eq!(skip_columns("ABC", 5), "");
        assert_eq!(skip_columns("日本", 2), "本");
    }
}
