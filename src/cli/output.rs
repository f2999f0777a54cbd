use serde::Serialize;

use crate::view::{ListEntry, ViewTree};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListsJson<'a> {
    pub lists: &'a [ListEntry],
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// The full view, as text or pretty JSON
pub fn format_view(view: &ViewTree, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(view).map(|s| s + "\n")
    } else {
        Ok(view.to_string())
    }
}

/// One line per list: active marker, id, name
pub fn format_lists(lists: &[ListEntry], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(&ListsJson { lists }).map(|s| s + "\n");
    }
    let id_width = lists.iter().map(|l| l.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in lists {
        let marker = if entry.active { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {:<width$}  {}\n",
            marker,
            entry.id,
            entry.name,
            width = id_width
        ));
    }
    Ok(out)
}
