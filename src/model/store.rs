use std::collections::HashSet;

use super::id::IdGenerator;
use super::list::TaskList;

/// All lists plus the current selection.
///
/// Fields are crate-private so that every mutation goes through `ops`, which
/// keeps `selected_list_id` pointing at an existing list (or at nothing).
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) lists: Vec<TaskList>,
    pub(crate) selected_list_id: Option<String>,
    pub(crate) ids: IdGenerator,
}

impl Store {
    /// Build a store from loaded parts. A selection that does not name one of
    /// `lists` is dropped.
    ///
    /// Ids repeated in the loaded data (older writers could hand out the same
    /// timestamp twice) are replaced with fresh ones; the first occurrence
    /// keeps its id.
    pub fn from_parts(mut lists: Vec<TaskList>, selected_list_id: Option<String>) -> Self {
        let mut ids = IdGenerator::seeded(lists.iter().flat_map(|l| {
            std::iter::once(l.id.as_str()).chain(l.tasks.iter().map(|t| t.id.as_str()))
        }));
        let mut seen_lists = HashSet::new();
        let mut seen_tasks = HashSet::new();
        for list in &mut lists {
            if !seen_lists.insert(list.id.clone()) {
                list.id = ids.next_id();
            }
            for task in &mut list.tasks {
                if !seen_tasks.insert(task.id.clone()) {
                    task.id = ids.next_id();
                }
            }
        }
        let selected_list_id = selected_list_id.filter(|id| lists.iter().any(|l| &l.id == id));
        Store {
            lists,
            selected_list_id,
            ids,
        }
    }

    /// Lists in insertion order
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    pub fn selected_list_id(&self) -> Option<&str> {
        self.selected_list_id.as_deref()
    }

    pub fn find_list(&self, id: &str) -> Option<&TaskList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// The currently selected list, if any
    pub fn selected_list(&self) -> Option<&TaskList> {
        let id = self.selected_list_id.as_deref()?;
        self.find_list(id)
    }

    pub(crate) fn selected_list_mut(&mut self) -> Option<&mut TaskList> {
        let id = self.selected_list_id.as_deref()?;
        self.lists.iter_mut().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

// The id generator is bookkeeping, not state: two stores holding the same lists
// and selection are equal.
impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.lists == other.lists && self.selected_list_id == other.selected_list_id
    }
}

impl Eq for Store {}
