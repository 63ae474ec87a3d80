use crate::ui::app::{dialog_area, App};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, trigger_rect, Viewport, TRIGGER_LABEL};
use crate::ui::profile::ProfileDialog;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let viewport = Viewport::for_width(area.width, app.display().narrow_breakpoint);
    let dialog_open = app.is_dialog_open();

    frame.render_widget(
        Header::new().widget(&app.view().display_name, app.roster_size()),
        header,
    );
    frame.render_widget(Clear, body);

    let button_style = if dialog_open {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    };
    let trigger = Paragraph::new(TRIGGER_LABEL)
        .style(button_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
    frame.render_widget(trigger, trigger_rect(body));

    frame.render_widget(
        Footer::new().widget(footer, dialog_open, viewport.is_narrow()),
        footer,
    );

    if dialog_open {
        // Backdrop: keep what is underneath but dim it.
        frame.render_widget(
            Block::default().style(Style::default().fg(GLOBAL_BORDER).add_modifier(Modifier::DIM)),
            area,
        );
        let dialog = ProfileDialog::new(app.view(), app.assets(), viewport);
        frame.render_widget(dialog, dialog_area(app, area));
    }
}
