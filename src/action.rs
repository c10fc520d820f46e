use strum::Display;

/// Actions that drive the application.
///
/// Dialogs never call back into their owner; every event handler returns the
/// action the owner should apply instead.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Action {
    Resize(u16, u16),
    Quit,
    /// Show the text-to-pattern dialog
    OpenPatternDialog,
    /// The user confirmed the dialog with this (non-empty, uppercased) text
    SubmitPatternText(String),
    /// The user dismissed the dialog (cancel, close button, Esc or backdrop)
    ClosePatternDialog,
    /// The event was consumed and something visible changed
    Update,
    Noop,
}
