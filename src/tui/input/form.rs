use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::router::{Dispatch, UiEvent};
use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

/// Keys while a form has focus. Every key is consumed here; in particular
/// Enter submits the form and does nothing else.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let input = match app.mode {
        Mode::NewList => &mut app.new_list_input,
        Mode::NewTask => &mut app.new_task_input,
        Mode::Navigate => return,
    };

    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Backspace => {
            pop_grapheme(input);
        }
        KeyCode::Enter => submit(app),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.push(c);
        }
        _ => {}
    }
}

/// Submitting keeps the form open for the next entry; submitting it empty
/// closes it.
fn submit(app: &mut App) {
    let result = match app.mode {
        Mode::NewList => app
            .router
            .dispatch(UiEvent::NewListSubmitted(&mut app.new_list_input)),
        Mode::NewTask => app
            .router
            .dispatch(UiEvent::NewTaskSubmitted(&mut app.new_task_input)),
        Mode::Navigate => return,
    };
    if result == Dispatch::Ignored {
        app.mode = Mode::Navigate;
        return;
    }
    if app.mode == Mode::NewTask
        && let Some(detail) = &app.router.surface().view.detail
    {
        app.task_cursor = detail.tasks.len().saturating_sub(1);
    }
}
