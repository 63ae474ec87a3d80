use crate::config::DisplayConfig;
use crate::data::ProfileData;
use crate::profile::{AssetRoot, ProfileView};
use crate::ui::layout::{body_rect, dialog_rect, trigger_rect, Viewport};
use crate::ui::mvi::Reducer;
use crate::ui::profile::{ProfileDialog, ProfileDialogState, ProfileIntent, ProfileReducer};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: (u16, u16),
    data: ProfileData,
    view: ProfileView,
    assets: AssetRoot,
    display: DisplayConfig,
    /// State of the profile dialog (MVI pattern).
    profile_dialog: ProfileDialogState,
}

impl App {
    pub fn new(data: ProfileData, display: DisplayConfig) -> Self {
        let view = ProfileView::build(
            &data.roster,
            data.account.as_ref(),
            data.social.as_ref(),
            &data.operators,
        );
        Self {
            should_quit: false,
            size: (80, 24),
            assets: AssetRoot::new(&display.asset_root),
            data,
            view,
            display,
            profile_dialog: ProfileDialogState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &ProfileView {
        &self.view
    }

    pub fn assets(&self) -> &AssetRoot {
        &self.assets
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn roster_size(&self) -> usize {
        self.data.roster.len()
    }

    pub fn profile_dialog(&self) -> ProfileDialogState {
        self.profile_dialog
    }

    pub fn is_dialog_open(&self) -> bool {
        self.profile_dialog.is_open()
    }

    pub fn open_profile(&mut self) {
        self.dispatch_profile(ProfileIntent::Open);
    }

    /// Explicit close control. Only offered on narrow viewports.
    pub fn close_profile(&mut self) {
        self.dispatch_profile(ProfileIntent::Close);
    }

    /// Escape or backdrop click.
    pub fn dismiss_profile(&mut self) {
        self.dispatch_profile(ProfileIntent::Dismiss);
    }

    fn dispatch_profile(&mut self, intent: ProfileIntent) {
        let before = self.profile_dialog;
        dispatch_mvi!(self, profile_dialog, ProfileReducer, intent);
        if before != self.profile_dialog {
            tracing::debug!(?intent, from = ?before, to = ?self.profile_dialog, "Profile dialog");
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.size.0, self.size.1)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::for_width(self.size.0, self.display.narrow_breakpoint)
    }

    pub fn dialog_rect(&self) -> Rect {
        dialog_area(self, self.area())
    }

    pub fn trigger_rect(&self) -> Rect {
        trigger_rect(body_rect(self.area()))
    }
}

/// Dialog placement within `area` for the current viewport.
pub fn dialog_area(app: &App, area: Rect) -> Rect {
    let viewport = Viewport::for_width(area.width, app.display.narrow_breakpoint);
    let width = match viewport {
        Viewport::Narrow => area.width,
        Viewport::Wide => app.display.max_width.min(area.width),
    };
    let height = ProfileDialog::new(&app.view, &app.assets, viewport).required_height(width);
    dialog_rect(area, viewport, app.display.max_width, height)
}
