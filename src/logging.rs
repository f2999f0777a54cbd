//! Log setup. Output goes to a file in the data directory so it never
//! draws over the TUI.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::io::paths::log_path;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "TASKLISTS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, appending to `tasklists.log`.
///
/// Calling this twice keeps the first subscriber.
pub fn init(data_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(std::env::var(LOG_ENV).ok().as_deref()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
