use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the profile dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileIntent {
    /// The trigger button was activated.
    Open,
    /// The explicit close control was activated.
    Close,
    /// Escape key or a click on the backdrop.
    Dismiss,
}

impl Intent for ProfileIntent {}
