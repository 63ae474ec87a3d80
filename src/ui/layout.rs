use ratatui::layout::Rect;

/// Label of the button that opens the profile dialog.
pub const TRIGGER_LABEL: &str = "Open Profile";

/// Responsive breakpoint class of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Dialog fills the screen and shows its own close control.
    Narrow,
    /// Dialog is a centred, width-capped panel.
    Wide,
}

impl Viewport {
    pub fn for_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, Viewport::Narrow)
    }
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Centre a `width` x `height` rect inside `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Bordered trigger button in the middle of the body.
pub fn trigger_rect(body: Rect) -> Rect {
    let width = TRIGGER_LABEL.chars().count() as u16 + 4;
    centered_rect_by_size(body, width, 3)
}

/// Area occupied by the profile dialog.
///
/// Narrow viewports get the whole screen. Wide viewports get a centred panel
/// at most `max_width` wide and three quarters of the screen tall.
pub fn dialog_rect(area: Rect, viewport: Viewport, max_width: u16, content_height: u16) -> Rect {
    match viewport {
        Viewport::Narrow => area,
        Viewport::Wide => {
            let max_height = (area.height.saturating_mul(3) / 4).max(1);
            centered_rect_by_size(area, max_width, content_height.min(max_height))
        }
    }
}

/// Close control drawn on the top border of a narrow dialog.
pub fn close_button_rect(dialog: Rect) -> Rect {
    let width = 3.min(dialog.width);
    Rect {
        x: dialog.right().saturating_sub(width + 1).max(dialog.x),
        y: dialog.y,
        width,
        height: 1.min(dialog.height),
    }
}
