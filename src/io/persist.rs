use crate::io::storage::{KeyValueStorage, StorageError};
use crate::model::{Store, TaskList};

/// Key holding the JSON array of lists
pub const LISTS_KEY: &str = "task.lists";
/// Key holding the selected list id as plain text
pub const SELECTED_LIST_ID_KEY: &str = "task.selectedListId";

/// Load the store. Missing or unreadable data yields an empty store, and a
/// selection that names no loaded list is dropped.
pub fn load_store(storage: &dyn KeyValueStorage) -> Store {
    let lists = match read_lists(storage) {
        Ok(lists) => lists,
        Err(e) => {
            tracing::warn!(error = %e, key = LISTS_KEY, "discarding stored lists");
            Vec::new()
        }
    };
    let selected = match storage.get(SELECTED_LIST_ID_KEY) {
        Ok(value) => value.and_then(parse_selected_id),
        Err(e) => {
            tracing::warn!(error = %e, key = SELECTED_LIST_ID_KEY, "discarding stored selection");
            None
        }
    };
    Store::from_parts(lists, selected)
}

/// Write the full store, overwriting both keys. With no selection the
/// selection key is removed.
pub fn persist_store(
    store: &Store,
    storage: &mut dyn KeyValueStorage,
) -> Result<(), StorageError> {
    let lists = serde_json::to_string(store.lists())?;
    storage.set(LISTS_KEY, &lists)?;
    match store.selected_list_id() {
        Some(id) => storage.set(SELECTED_LIST_ID_KEY, id)?,
        None => storage.remove(SELECTED_LIST_ID_KEY)?,
    }
    tracing::debug!(lists = store.lists().len(), "persisted store");
    Ok(())
}

fn read_lists(storage: &dyn KeyValueStorage) -> Result<Vec<TaskList>, StorageError> {
    match storage.get(LISTS_KEY)? {
        Some(text) => Ok(serde_json::from_str(&text)?),
        None => Ok(Vec::new()),
    }
}

/// Older writers stored the literal text `null` when nothing was selected.
fn parse_selected_id(raw: String) -> Option<String> {
    let id = raw.trim();
    if id.is_empty() || id == "null" {
        None
    } else {
        Some(id.to_string())
    }
}
