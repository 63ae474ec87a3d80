//! Rendering for the profile dialog.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::profile::{AssetRoot, ProfileView, SupportView};
use crate::ui::layout::Viewport;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, SECONDARY_TEXT};

/// Close control shown on narrow viewports.
pub const CLOSE_LABEL: &str = "[x]";

const ASSISTANT_LABEL: &str = "Assistant";
const COLUMN_GAP: u16 = 2;
const CELL_GAP: u16 = 1;
/// Space between the two social handles when they share a row.
const SOCIAL_GAP: &str = "  ";

pub struct ProfileDialog<'a> {
    view: &'a ProfileView,
    assets: &'a AssetRoot,
    viewport: Viewport,
}

impl<'a> ProfileDialog<'a> {
    pub fn new(view: &'a ProfileView, assets: &'a AssetRoot, viewport: Viewport) -> Self {
        Self {
            view,
            assets,
            viewport,
        }
    }

    /// Rows needed to show the whole dialog at `width` columns, borders
    /// included.
    pub fn required_height(&self, width: u16) -> u16 {
        let narrow = self.viewport.is_narrow();
        let inner_width = width.saturating_sub(2);
        let header = self.header_lines(header_width(inner_width), narrow).len() as u16;

        let (support_width, socials_width) = if narrow {
            (inner_width, inner_width)
        } else {
            let [support, socials] = wide_panes(Rect::new(0, 0, inner_width, 1));
            (support.width, socials.width)
        };
        let support = 1 + self.support_flow(support_width).height();
        let socials = 1 + self.social_lines(socials_width, narrow).len() as u16;
        let body = if narrow {
            support + socials
        } else {
            support.max(socials)
        };
        header + body + 2
    }

    fn header_lines(&self, width: u16, narrow: bool) -> Vec<Line<'static>> {
        let view = self.view;
        let text = Style::default().fg(HEADER_TEXT);
        let secondary = Style::default().fg(SECONDARY_TEXT);
        let mut lines = Vec::new();

        if let Some(avatar) = &view.avatar {
            let path = self.assets.resolve(avatar);
            if ASSISTANT_LABEL.len() + 1 + path.chars().count() <= usize::from(width) {
                lines.push(
                    Line::from(vec![
                        Span::styled(format!("{ASSISTANT_LABEL} "), secondary),
                        Span::styled(path, text),
                    ])
                    .centered(),
                );
            } else {
                lines.push(Line::styled(ASSISTANT_LABEL, secondary).centered());
                lines.extend(
                    wrap_text(&path, width)
                        .into_iter()
                        .map(|part| Line::styled(part, text).centered()),
                );
            }
        }

        let title = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        lines.extend(
            wrap_text(&view.title(narrow), width)
                .into_iter()
                .map(|part| Line::styled(part, title)),
        );

        let summary = view.summary_line();
        let onboard = view.onboard_line();
        let used = summary.chars().count() + onboard.chars().count();
        if !narrow && used + 2 <= usize::from(width) {
            lines.push(Line::from(vec![
                Span::styled(summary, text),
                Span::raw(" ".repeat(usize::from(width) - used)),
                Span::styled(onboard, secondary),
            ]));
        } else {
            lines.extend(
                wrap_text(&summary, width)
                    .into_iter()
                    .map(|part| Line::styled(part, text)),
            );
            lines.extend(
                wrap_text(&onboard, width)
                    .into_iter()
                    .map(|part| Line::styled(part, secondary)),
            );
        }

        lines.push(Line::default());
        lines
    }

    /// One entry per row before wrapping: avatar, name, then the skill
    /// icon and each rank layer on their own rows.
    fn support_cell(&self, support: &SupportView) -> Vec<(String, Style)> {
        let text = Style::default().fg(HEADER_TEXT);
        let secondary = Style::default().fg(SECONDARY_TEXT);
        let mut cell = vec![
            (self.assets.resolve(&support.avatar), secondary),
            (support.label().to_string(), text.add_modifier(Modifier::BOLD)),
        ];

        if let Some(skill) = &support.skill {
            let icon = skill
                .icon
                .as_deref()
                .map(|icon| self.assets.resolve(icon))
                .unwrap_or_else(|| "-".to_string());
            cell.push((skill.alt_text(), text));
            cell.push((icon, secondary));
            cell.push((skill.rank.alt_text(), Style::default().fg(ACCENT)));
            cell.extend(
                skill
                    .rank_layers()
                    .iter()
                    .map(|layer| (self.assets.resolve(layer), secondary)),
            );
        }

        cell
    }

    fn support_flow(&self, width: u16) -> SupportFlow {
        let cells = self
            .view
            .supports
            .iter()
            .map(|support| self.support_cell(support))
            .collect();
        SupportFlow::new(cells, width)
    }

    fn social_lines(&self, width: u16, narrow: bool) -> Vec<Line<'static>> {
        let text = Style::default().fg(HEADER_TEXT);
        let secondary = Style::default().fg(SECONDARY_TEXT);
        let discord = vec![
            Span::raw(" "),
            Span::styled("Discord ", secondary),
            Span::styled(self.view.discord.clone(), text),
        ];
        let reddit = vec![
            Span::raw(" "),
            Span::styled("Reddit  ", secondary),
            Span::styled(self.view.reddit.clone(), text),
        ];

        let discord = Line::from(discord);
        let reddit = Line::from(reddit);
        let shared = discord.width() + SOCIAL_GAP.len() + reddit.width();
        if narrow && shared <= usize::from(width) {
            let mut spans = discord.spans;
            spans.push(Span::raw(SOCIAL_GAP));
            spans.extend(reddit.spans);
            vec![Line::from(spans)]
        } else {
            vec![discord, reddit]
        }
    }

    fn render_support(&self, area: Rect, buf: &mut Buffer) {
        let [heading, cells] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Paragraph::new(divider("Support", heading.width)).render(heading, buf);
        self.support_flow(cells.width).render(cells, buf);
    }

    fn render_socials(&self, area: Rect, buf: &mut Buffer, narrow: bool) {
        let [heading, rows] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Paragraph::new(divider("Socials", heading.width)).render(heading, buf);
        Paragraph::new(self.social_lines(rows.width, narrow)).render(rows, buf);
    }
}

impl Widget for ProfileDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let narrow = self.viewport.is_narrow();
        Clear.render(area, buf);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        if narrow {
            block = block.title_top(
                Line::from(Span::styled(CLOSE_LABEL, Style::default().fg(ACCENT))).right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let header_lines = self.header_lines(header_width(inner.width), narrow);
        let [header, body] = Layout::vertical([
            Constraint::Length(header_lines.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(inner);
        let [_, header] =
            Layout::horizontal([Constraint::Length(1), Constraint::Fill(1)]).areas(header);
        Paragraph::new(header_lines).render(header, buf);

        let [support, socials] = if narrow {
            let support_height = 1 + self.support_flow(body.width).height();
            Layout::vertical([Constraint::Length(support_height), Constraint::Fill(1)])
                .areas(body)
        } else {
            wide_panes(body)
        };
        self.render_support(support, buf);
        self.render_socials(socials, buf, narrow);
    }
}

/// Support cells laid out left to right, starting a new row when the next
/// cell would not fit. Cells share the width of the widest entry.
struct SupportFlow {
    cells: Vec<Vec<Line<'static>>>,
    cell_width: u16,
    per_row: usize,
}

impl SupportFlow {
    fn new(cells: Vec<Vec<(String, Style)>>, width: u16) -> Self {
        let widest = cells
            .iter()
            .flatten()
            .map(|(text, _)| text.chars().count())
            .max()
            .unwrap_or(0);
        let cell_width = u16::try_from(widest).unwrap_or(u16::MAX).clamp(1, width.max(1));
        let per_row = usize::from(
            (width.saturating_add(CELL_GAP) / cell_width.saturating_add(CELL_GAP)).max(1),
        );

        let cells = cells
            .into_iter()
            .map(|cell| {
                cell.into_iter()
                    .flat_map(|(text, style)| {
                        wrap_text(&text, cell_width)
                            .into_iter()
                            .map(move |part| Line::styled(part, style))
                    })
                    .collect()
            })
            .collect();

        Self {
            cells,
            cell_width,
            per_row,
        }
    }

    fn row_height(row: &[Vec<Line<'static>>]) -> u16 {
        row.iter().map(Vec::len).max().unwrap_or(0) as u16
    }

    fn height(&self) -> u16 {
        self.cells.chunks(self.per_row).map(Self::row_height).sum()
    }

    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for row in self.cells.chunks(self.per_row) {
            let height = Self::row_height(row);
            for (column, cell) in row.iter().enumerate() {
                let offset = (column as u16).saturating_mul(self.cell_width.saturating_add(CELL_GAP));
                let x = area.x.saturating_add(offset);
                let rect = Rect::new(x, y, self.cell_width, height).intersection(area);
                if rect.is_empty() {
                    continue;
                }
                Paragraph::new(cell.clone()).render(rect, buf);
            }
            y = y.saturating_add(height);
        }
    }
}

/// Header text sits one column in from the border.
fn header_width(inner_width: u16) -> u16 {
    inner_width.saturating_sub(1)
}

fn wide_panes(area: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)])
        .spacing(COLUMN_GAP)
        .areas(area)
}

/// Greedy word wrap. Words longer than `width` (asset paths, mostly) are
/// split across rows so nothing is cut off.
fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(width) {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
            }
            current = chunk.iter().collect();
            current_len = chunk.len();
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn divider(title: &str, width: u16) -> Line<'static> {
    let label = format!(" {title} ");
    let remaining = (width as usize).saturating_sub(label.chars().count());
    let left = remaining / 2;
    let rule = Style::default().fg(GLOBAL_BORDER);
    Line::from(vec![
        Span::styled("─".repeat(left), rule),
        Span::styled(label, Style::default().fg(SECONDARY_TEXT)),
        Span::styled("─".repeat(remaining - left), rule),
    ])
}
