use clap::Parser;
use tasklists::cli::commands::Cli;
use tasklists::cli::handlers;
use tasklists::io::paths;

fn main() {
    let cli = Cli::parse();
    let data_dir = paths::data_dir(cli.data_dir.as_deref());

    if let Err(e) = tasklists::logging::init(&data_dir) {
        eprintln!("warning: could not open log file: {}", e);
    }

    let result = match cli.command {
        // No subcommand → launch TUI
        None => tasklists::tui::run(&data_dir),
        Some(command) => handlers::dispatch(command, &data_dir, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
