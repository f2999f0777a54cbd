//! Pure projection from a [`Store`] to a [`ViewTree`].
//!
//! Nothing here keeps state between calls: every render rebuilds the whole
//! tree from the store. Putting a tree on screen is the job of a
//! [`Surface`](surface::Surface).

pub mod surface;

use std::fmt;

use serde::Serialize;

use crate::model::{Store, TaskList};

pub use surface::{RecordingSurface, RetainedSurface, Surface, SurfaceCall};

/// Everything visible for one store state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    /// Lists in store order
    pub lists: Vec<ListEntry>,
    /// Detail region; `None` hides it entirely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ListDetail>,
}

/// One selectable entry in the list column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub name: String,
    /// True for the selected list
    pub active: bool,
}

/// The selected list's detail region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDetail {
    pub title: String,
    /// e.g. "2 tasks remaining"
    pub remaining: String,
    pub tasks: Vec<TaskRow>,
}

/// A labeled toggle for one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub name: String,
    pub complete: bool,
}

/// Render the whole view for `store`
pub fn render(store: &Store) -> ViewTree {
    let selected = store.selected_list_id();
    let lists = store
        .lists()
        .iter()
        .map(|l| ListEntry {
            id: l.id.clone(),
            name: l.name.clone(),
            active: selected == Some(l.id.as_str()),
        })
        .collect();

    ViewTree {
        lists,
        detail: store.selected_list().map(render_detail),
    }
}

fn render_detail(list: &TaskList) -> ListDetail {
    ListDetail {
        title: list.name.clone(),
        remaining: remaining_label(list.remaining()),
        tasks: list
            .tasks
            .iter()
            .map(|t| TaskRow {
                id: t.id.clone(),
                name: t.name.clone(),
                complete: t.complete,
            })
            .collect(),
    }
}

/// Render only the remaining-count label of the selected list
pub fn render_count(store: &Store) -> Option<String> {
    store
        .selected_list()
        .map(|list| remaining_label(list.remaining()))
}

/// `"1 task remaining"`, otherwise `"<n> tasks remaining"`
pub fn remaining_label(n: usize) -> String {
    let noun = if n == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", n, noun)
}

impl ListDetail {
    pub fn find_task_mut(&mut self, task_id: &str) -> Option<&mut TaskRow> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }
}

impl fmt::Display for ViewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.lists {
            let marker = if entry.active { "* " } else { "  " };
            writeln!(f, "{}{}", marker, entry.name)?;
        }
        if let Some(detail) = &self.detail {
            writeln!(f, "--")?;
            writeln!(f, "{}", detail.title)?;
            writeln!(f, "{}", detail.remaining)?;
            for task in &detail.tasks {
                let check = if task.complete { "[x]" } else { "[ ]" };
                writeln!(f, "{} {}", check, task.name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{add_task, create_list, select_list, set_task_complete};
    use insta::assert_snapshot;

    fn hardware_store() -> Store {
        let mut store = Store::default();
        create_list(&mut store, "Groceries").unwrap();
        let hw = create_list(&mut store, "Hardware").unwrap().id.clone();
        select_list(&mut store, &hw);
        add_task(&mut store, "Nails").unwrap();
        let screws = add_task(&mut store, "Screws").unwrap();
        set_task_complete(&mut store, &screws, true);
        store
    }

    #[test]
    fn remaining_label_pluralizes() {
        assert_eq!(remaining_label(0), "0 tasks remaining");
        assert_eq!(remaining_label(1), "1 task remaining");
        assert_eq!(remaining_label(3), "3 tasks remaining");
    }

    #[test]
    fn empty_store_renders_no_lists_and_no_detail() {
        let view = render(&Store::default());
        assert!(view.lists.is_empty());
        assert!(view.detail.is_none());
    }

    #[test]
    fn no_selection_hides_detail() {
        let mut store = Store::default();
        create_list(&mut store, "A").unwrap();
        let view = render(&store);
        assert_eq!(view.lists.len(), 1);
        assert!(!view.lists[0].active);
        assert!(view.detail.is_none());
    }

    #[test]
    fn selected_list_is_marked_active() {
        let view = render(&hardware_store());
        let active: Vec<&str> = view
            .lists
            .iter()
            .filter(|l| l.active)
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(active, vec!["Hardware"]);
    }

    #[test]
    fn detail_shows_title_count_and_tasks_in_order() {
        let view = render(&hardware_store());
        let detail = view.detail.unwrap();
        assert_eq!(detail.title, "Hardware");
        assert_eq!(detail.remaining, "1 task remaining");
        let rows: Vec<(&str, bool)> = detail
            .tasks
            .iter()
            .map(|t| (t.name.as_str(), t.complete))
            .collect();
        assert_eq!(rows, vec![("Nails", false), ("Screws", true)]);
    }

    #[test]
    fn selected_empty_list_has_zero_remaining() {
        let mut store = Store::default();
        let id = create_list(&mut store, "Empty").unwrap().id.clone();
        select_list(&mut store, &id);
        assert_eq!(render_count(&store).as_deref(), Some("0 tasks remaining"));
    }

    #[test]
    fn render_count_without_selection_is_none() {
        assert!(render_count(&Store::default()).is_none());
    }

    #[test]
    fn render_is_repeatable() {
        let store = hardware_store();
        assert_eq!(render(&store), render(&store));
    }

    #[test]
    fn text_rendering() {
        let text = render(&hardware_store()).to_string();
        assert_snapshot!(text.trim_end(), @r"
          Groceries
        * Hardware
        --
        Hardware
        1 task remaining
        [ ] Nails
        [x] Screws
        ");
    }

    #[test]
    fn json_rendering_omits_hidden_detail() {
        let mut store = Store::default();
        create_list(&mut store, "A").unwrap();
        let json = serde_json::to_value(render(&store)).unwrap();
        assert!(json.get("detail").is_none());
        assert_eq!(json["lists"][0]["name"], "A");
        assert_eq!(json["lists"][0]["active"], false);
    }
}
