use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config_or_default;
use crate::io::storage::{FileStorage, KeyValueStorage};
use crate::model::AppConfig;
use crate::router::EventRouter;
use crate::view::{RetainedSurface, ViewTree};

use super::input;
use super::render;
use super::theme::Theme;

/// The router type the TUI drives
pub type TuiRouter = EventRouter<Box<dyn KeyValueStorage>, RetainedSurface>;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Lists,
    Tasks,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the new-list form
    NewList,
    /// Typing into the new-task form
    NewTask,
}

/// Main application state.
///
/// Everything except the router is presentation state: focus, cursors and
/// form inputs. The lists themselves live only in the router's store.
pub struct App {
    pub router: TuiRouter,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub pane: Pane,
    pub mode: Mode,
    pub list_cursor: usize,
    pub task_cursor: usize,
    /// Text of the new-list form
    pub new_list_input: String,
    /// Text of the new-task form
    pub new_task_input: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(storage: Box<dyn KeyValueStorage>, config: &AppConfig) -> Self {
        let router = EventRouter::start(storage, RetainedSurface::default());
        let mut app = App {
            router,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            pane: Pane::Lists,
            mode: Mode::Navigate,
            list_cursor: 0,
            task_cursor: 0,
            new_list_input: String::new(),
            new_task_input: String::new(),
            show_help: false,
            should_quit: false,
        };
        // Start with the cursor on the selected list, if any
        if let Some(idx) = app.view().lists.iter().position(|l| l.active) {
            app.list_cursor = idx;
        }
        app
    }

    /// The last rendered view
    pub fn view(&self) -> &ViewTree {
        &self.router.surface().view
    }

    /// Id of the list under the cursor
    pub fn cursor_list_id(&self) -> Option<String> {
        self.view().lists.get(self.list_cursor).map(|l| l.id.clone())
    }

    /// Id and checked state of the task under the cursor
    pub fn cursor_task(&self) -> Option<(String, bool)> {
        let detail = self.view().detail.as_ref()?;
        detail
            .tasks
            .get(self.task_cursor)
            .map(|t| (t.id.clone(), t.complete))
    }

    /// Keep cursors and focus valid after the view changed shape
    pub fn clamp_cursors(&mut self) {
        let list_len = self.view().lists.len();
        let task_len = self.view().detail.as_ref().map_or(0, |d| d.tasks.len());
        let has_detail = self.view().detail.is_some();

        self.list_cursor = self.list_cursor.min(list_len.saturating_sub(1));
        self.task_cursor = self.task_cursor.min(task_len.saturating_sub(1));
        if !has_detail {
            self.pane = Pane::Lists;
            if self.mode == Mode::NewTask {
                self.mode = Mode::Navigate;
            }
        }
    }
}

/// Run the TUI against the data directory
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config_or_default(data_dir);
    let storage = FileStorage::new(data_dir);
    let mut app = App::new(Box::new(storage), &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// One key at a time: each handler runs to completion before the next read.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
