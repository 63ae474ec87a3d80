//! Plain-text rendering of the dialog, for `--print` and snapshot tests.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::profile::{AssetRoot, ProfileView};
use crate::ui::layout::Viewport;
use crate::ui::profile::ProfileDialog;

/// Render the open dialog at `width` columns and return its text, one line
/// per row with trailing blanks trimmed.
pub fn render_dialog_text(
    view: &ProfileView,
    assets: &AssetRoot,
    width: u16,
    viewport: Viewport,
) -> String {
    let dialog = ProfileDialog::new(view, assets, viewport);
    let area = Rect::new(0, 0, width, dialog.required_height(width));
    let mut buffer = Buffer::empty(area);
    dialog.render(area, &mut buffer);
    buffer_to_text(&buffer)
}

pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
