use crate::action::Action;
use crate::app::App;
use crate::tui::{Event, EventResponse};

impl App {
    /// Route an input event to the pattern dialog.  Returns `None` when the
    /// dialog is closed; a `Continue` response leaves the event to the app
    /// as well.
    pub fn handle_pattern_dialog_event(&mut self, event: &Event) -> Option<EventResponse<Action>> {
        match event {
            Event::Key(key) => self.pattern_dialog.handle_key_event(*key),
            Event::Mouse(mouse) => self.pattern_dialog.handle_mouse_event(*mouse),
            Event::Tick | Event::Resize(..) => None,
        }
    }
}
