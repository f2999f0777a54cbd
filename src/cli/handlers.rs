use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::storage::FileStorage;
use crate::router::{Dispatch, EventRouter, UiEvent};
use crate::view::RetainedSurface;

type CliRouter = EventRouter<FileStorage, RetainedSurface>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one subcommand against the data directory.
///
/// Each write command is exactly one router event, so the CLI and the TUI
/// share every rule about what counts as a no-op.
pub fn dispatch(
    command: Commands,
    data_dir: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut router: CliRouter =
        EventRouter::start(FileStorage::new(data_dir), RetainedSurface::default());

    let outcome = match command {
        Commands::Show => None,
        Commands::Lists => {
            print!("{}", format_lists(&router.surface().view.lists, json)?);
            return Ok(());
        }
        Commands::New(args) => {
            let mut input = args.joined();
            Some(router.dispatch(UiEvent::NewListSubmitted(&mut input)))
        }
        Commands::Select(args) => Some(router.dispatch(UiEvent::ListClicked(&args.id))),
        Commands::Add(args) => {
            let mut input = args.joined();
            Some(router.dispatch(UiEvent::NewTaskSubmitted(&mut input)))
        }
        Commands::Check(args) => Some(toggle(&mut router, &args.id, true)),
        Commands::Uncheck(args) => Some(toggle(&mut router, &args.id, false)),
        Commands::Clear => Some(router.dispatch(UiEvent::ClearCompleted)),
        Commands::Delete => Some(router.dispatch(UiEvent::DeleteList)),
    };

    if outcome == Some(Dispatch::Ignored) {
        eprintln!("nothing changed");
    }
    print!("{}", format_view(&router.surface().view, json)?);
    Ok(())
}

/// Toggle a row the way the TUI does: the router re-renders only the
/// count, and the row itself is flipped on the retained view.
fn toggle(router: &mut CliRouter, task_id: &str, checked: bool) -> Dispatch {
    let outcome = router.dispatch(UiEvent::TaskToggled { task_id, checked });
    if outcome == Dispatch::CountRendered {
        router.surface_mut().set_row_checked(task_id, checked);
    }
    outcome
}
