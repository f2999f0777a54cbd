pub mod detail_pane;
pub mod help_overlay;
pub mod lists_pane;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use super::app::App;
use crate::util::unicode;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    // Content: lists | detail
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    lists_pane::render_lists_pane(frame, app, columns[0]);
    detail_pane::render_detail_pane(frame, app, columns[1]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, rows[1]);
}

/// A form input line: `+ text▌`, truncated to fit.
pub(super) fn input_line<'a>(app: &App, text: &str, width: u16) -> Line<'a> {
    let bg = app.theme.background;
    let budget = (width as usize).saturating_sub(4);
    let shown = unicode::truncate_to_width(text, budget);
    Line::from(vec![
        Span::styled(" + ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(shown, Style::default().fg(app.theme.text_bright).bg(bg)),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
    ])
}
