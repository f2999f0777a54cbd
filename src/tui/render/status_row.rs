use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Pane};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = if app.show_key_hints {
        Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from("")
    };
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> &'static str {
    match app.mode {
        Mode::NewList => "Enter create list  Esc cancel",
        Mode::NewTask => "Enter add task  Esc cancel",
        Mode::Navigate if app.view().detail.is_none() => {
            "Enter select  n new list  ? help  q quit"
        }
        Mode::Navigate => match app.pane {
            Pane::Lists => "Enter select  Tab tasks  n new list  a add task  D delete list  ? help",
            Pane::Tasks => "Space toggle  a add task  c clear completed  Tab lists  ? help",
        },
    }
}
