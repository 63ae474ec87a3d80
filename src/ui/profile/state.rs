use crate::ui::mvi::UiState;

/// Visibility of the profile dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileDialogState {
    #[default]
    Closed,
    Open,
}

impl UiState for ProfileDialogState {}

impl ProfileDialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}
