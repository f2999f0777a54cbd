use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("tasklists v", env!("CARGO_PKG_VERSION"), " - named task lists in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'D', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current view
    Show,
    /// Print all lists with their ids
    Lists,
    /// Create a new list (does not select it)
    New(NameArgs),
    /// Select a list by id
    Select(IdArgs),
    /// Add a task to the selected list
    Add(NameArgs),
    /// Mark a task in the selected list complete
    Check(IdArgs),
    /// Mark a task in the selected list incomplete
    Uncheck(IdArgs),
    /// Remove completed tasks from the selected list
    Clear,
    /// Delete the selected list and its tasks
    Delete,
}

#[derive(Args)]
pub struct NameArgs {
    /// Name (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl NameArgs {
    pub fn joined(&self) -> String {
        self.name.join(" ")
    }
}

#[derive(Args)]
pub struct IdArgs {
    pub id: String,
}
