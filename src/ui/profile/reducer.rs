use crate::ui::mvi::Reducer;

use super::intent::ProfileIntent;
use super::state::ProfileDialogState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileDialogState;
    type Intent = ProfileIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Open => ProfileDialogState::Open,
            ProfileIntent::Close | ProfileIntent::Dismiss => ProfileDialogState::Closed,
        }
    }
}
