use std::path::PathBuf;

/// Resolve the data directory: an explicit override, else
/// `$XDG_DATA_HOME/tasklists`, else `$HOME/.local/share/tasklists`.
pub fn data_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    data_dir_from(
        std::env::var("XDG_DATA_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    let base = xdg_data_home
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            home.map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/"))
                .join(".local")
                .join("share")
        });
    base.join("tasklists")
}

/// Log file written by the tracing subscriber
pub fn log_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("tasklists.log")
}
