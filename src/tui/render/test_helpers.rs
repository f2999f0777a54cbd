use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::MemoryStorage;
use crate::io::persist::persist_store;
use crate::model::{AppConfig, Store};
use crate::ops::{add_task, create_list, select_list, set_task_complete};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App whose storage already holds `store`.
pub fn app_with_store(store: &Store) -> App {
    let mut storage = MemoryStorage::new();
    persist_store(store, &mut storage).unwrap();
    App::new(Box::new(storage), &AppConfig::default())
}

/// An App with empty lists named `names`, optionally selecting one by index.
pub fn app_with_lists(names: &[&str], selected: Option<usize>) -> App {
    let mut store = Store::default();
    let ids: Vec<String> = names
        .iter()
        .map(|n| create_list(&mut store, n).unwrap().id.clone())
        .collect();
    if let Some(idx) = selected {
        select_list(&mut store, &ids[idx]);
    }
    app_with_store(&store)
}

/// An App with one selected list holding `(name, complete)` tasks.
pub fn app_with_tasks(list_name: &str, tasks: &[(&str, bool)]) -> App {
    let mut store = Store::default();
    let id = create_list(&mut store, list_name).unwrap().id.clone();
    select_list(&mut store, &id);
    for (name, complete) in tasks {
        let task_id = add_task(&mut store, name).unwrap();
        set_task_complete(&mut store, &task_id, *complete);
    }
    app_with_store(&store)
}

pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
