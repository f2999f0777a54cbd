use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode, Pane};
use crate::util::unicode;

use super::input_line;

/// Render the list column: one entry per list, the selected one marked active
pub fn render_lists_pane(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.pane == Pane::Lists;
    let inner_width = area.width.saturating_sub(2);

    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in app.view().lists.iter().enumerate() {
        let is_cursor = focused && i == app.list_cursor && app.mode == Mode::Navigate;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if entry.active { "\u{25CF} " } else { "  " }; // ●
        let mut name_style = Style::default().fg(app.theme.text).bg(row_bg);
        if entry.active {
            name_style = name_style
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD);
        }
        let name_budget = (inner_width as usize).saturating_sub(3);
        let name = unicode::truncate_to_width(&entry.name, name_budget);
        let used = 3 + unicode::display_width(&name);

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(name, name_style),
        ];
        // Pad to full width for cursor
        if is_cursor && used < inner_width as usize {
            spans.push(Span::styled(
                " ".repeat(inner_width as usize - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    if lines.is_empty() && app.mode != Mode::NewList {
        lines.push(Line::from(Span::styled(
            " No lists (n to create)",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    if app.mode == Mode::NewList {
        lines.push(input_line(app, &app.new_list_input, inner_width));
    }

    let border_color = if focused { app.theme.highlight } else { app.theme.dim };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Lists ")
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
