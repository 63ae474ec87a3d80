use crate::ui::app::App;
use crate::ui::layout::close_button_rect;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C quits like Ctrl+Q.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.is_dialog_open() {
        match key.code {
            KeyCode::Esc => app.dismiss_profile(),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'x') && app.viewport().is_narrow() => {
                app.close_profile()
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.open_profile(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'p') => app.open_profile(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => app.request_quit(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let position = Position::new(mouse.column, mouse.row);

    if !app.is_dialog_open() {
        if app.trigger_rect().contains(position) {
            app.open_profile();
        }
        return;
    }

    let dialog = app.dialog_rect();
    if app.viewport().is_narrow() {
        if close_button_rect(dialog).contains(position) {
            app.close_profile();
        }
    } else if !dialog.contains(position) {
        app.dismiss_profile();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
