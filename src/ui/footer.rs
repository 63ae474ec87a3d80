use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(dialog_open: bool, narrow: bool) -> &'static str {
        match (dialog_open, narrow) {
            (false, _) => " Enter/P: Open Profile │ Q/Ctrl+C: Quit",
            (true, true) => " X: Close │ Esc: Close │ Ctrl+Q/Ctrl+C: Quit",
            (true, false) => " Esc/Click outside: Close │ Ctrl+Q/Ctrl+C: Quit",
        }
    }

    pub fn widget(&self, area: Rect, dialog_open: bool, narrow: bool) -> Paragraph<'static> {
        let hints = Self::hints(dialog_open, narrow);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_list_every_quit_key() {
        assert!(Footer::hints(false, false).contains("Q/Ctrl+C: Quit"));
        assert!(Footer::hints(true, true).contains("X: Close"));
        assert!(Footer::hints(true, true).contains("Ctrl+Q/Ctrl+C: Quit"));
        assert!(!Footer::hints(true, false).contains("X: Close"));
        assert!(Footer::hints(true, false).contains("Ctrl+Q/Ctrl+C: Quit"));
    }
}
