use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::router::{Dispatch, UiEvent};
use crate::tui::app::{App, Mode, Pane};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Tab)
        | (_, KeyCode::BackTab)
        | (_, KeyCode::Char('h'))
        | (_, KeyCode::Char('l'))
        | (_, KeyCode::Left)
        | (_, KeyCode::Right) => switch_pane(app, key.code),

        (_, KeyCode::Enter) => match app.pane {
            Pane::Lists => select_cursor_list(app),
            Pane::Tasks => toggle_cursor_task(app),
        },
        (_, KeyCode::Char(' ')) if app.pane == Pane::Tasks => toggle_cursor_task(app),

        (_, KeyCode::Char('n')) => app.mode = Mode::NewList,
        (_, KeyCode::Char('a')) if app.view().detail.is_some() => app.mode = Mode::NewTask,
        (_, KeyCode::Char('c')) => {
            app.router.dispatch(UiEvent::ClearCompleted);
        }
        (_, KeyCode::Char('D')) => {
            app.router.dispatch(UiEvent::DeleteList);
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let (cursor, len) = match app.pane {
        Pane::Lists => (&mut app.list_cursor, app.router.surface().view.lists.len()),
        Pane::Tasks => (
            &mut app.task_cursor,
            app.router
                .surface()
                .view
                .detail
                .as_ref()
                .map_or(0, |d| d.tasks.len()),
        ),
    };
    if len == 0 {
        return;
    }
    *cursor = cursor.saturating_add_signed(delta).min(len - 1);
}

fn switch_pane(app: &mut App, code: KeyCode) {
    let target = match code {
        KeyCode::Char('h') | KeyCode::Left => Pane::Lists,
        KeyCode::Char('l') | KeyCode::Right => Pane::Tasks,
        _ => match app.pane {
            Pane::Lists => Pane::Tasks,
            Pane::Tasks => Pane::Lists,
        },
    };
    // The task pane only exists while a list is selected
    if target == Pane::Tasks && app.view().detail.is_none() {
        return;
    }
    app.pane = target;
}

fn select_cursor_list(app: &mut App) {
    let Some(id) = app.cursor_list_id() else {
        return;
    };
    if app.router.dispatch(UiEvent::ListClicked(&id)) == Dispatch::Rendered {
        app.task_cursor = 0;
    }
}

fn toggle_cursor_task(app: &mut App) {
    let Some((task_id, complete)) = app.cursor_task() else {
        return;
    };
    let checked = !complete;
    let result = app.router.dispatch(UiEvent::TaskToggled {
        task_id: &task_id,
        checked,
    });
    if result == Dispatch::CountRendered {
        app.router.surface_mut().set_row_checked(&task_id, checked);
    }
}
