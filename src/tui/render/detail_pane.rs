use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode, Pane};
use crate::util::unicode;

use super::input_line;

/// Render the selected list: title, remaining count, one toggle per task.
/// With no list selected the pane stays blank.
pub fn render_detail_pane(frame: &mut Frame, app: &App, area: Rect) {
    let Some(detail) = app.view().detail.as_ref() else {
        return;
    };
    let bg = app.theme.background;
    let focused = app.pane == Pane::Tasks;
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!(" {}", detail.remaining),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Line::from(""),
    ];

    for (i, task) in detail.tasks.iter().enumerate() {
        let is_cursor = focused && i == app.task_cursor && app.mode == Mode::Navigate;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let (check, check_color) = if task.complete {
            ("[x]", app.theme.green)
        } else {
            ("[ ]", app.theme.text)
        };
        let mut name_style = Style::default()
            .fg(app.theme.task_color(task.complete))
            .bg(row_bg);
        if task.complete {
            name_style = name_style.add_modifier(Modifier::CROSSED_OUT);
        }
        let name = unicode::truncate_to_width(&task.name, inner_width.saturating_sub(5));
        let used = 5 + unicode::display_width(&name);

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(check, Style::default().fg(check_color).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(name, name_style),
        ];
        if is_cursor && used < inner_width {
            spans.push(Span::styled(
                " ".repeat(inner_width - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    if app.mode == Mode::NewTask {
        lines.push(input_line(app, &app.new_task_input, inner_width as u16));
    }

    let border_color = if focused { app.theme.highlight } else { app.theme.dim };
    let title = format!(
        " {} ",
        unicode::truncate_to_width(&detail.title, inner_width.saturating_sub(2))
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
