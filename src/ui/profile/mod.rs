//! Profile dialog feature module.
//!
//! - `state.rs` - Closed/Open state
//! - `intent.rs` - Open, close control, dismissal
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{ProfileDialog, CLOSE_LABEL};
pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::ProfileDialogState;
