use crate::model::{Store, Task};
use crate::ops::OpError;

/// Append an incomplete task to the selected list. Returns the new task's id.
pub fn add_task(store: &mut Store, name: &str) -> Result<String, OpError> {
    if name.is_empty() {
        return Err(OpError::EmptyName);
    }
    if store.selected_list().is_none() {
        return Err(OpError::NoListSelected);
    }
    let id = store.ids.next_id();
    let list = store.selected_list_mut().ok_or(OpError::NoListSelected)?;
    list.tasks.push(Task::new(id.clone(), name.to_string()));
    Ok(id)
}

/// Set a task's completion flag in the selected list. Returns false if there
/// is no selection or the task is not in it.
pub fn set_task_complete(store: &mut Store, task_id: &str, complete: bool) -> bool {
    let Some(task) = store
        .selected_list_mut()
        .and_then(|list| list.find_task_mut(task_id))
    else {
        return false;
    };
    task.complete = complete;
    true
}

/// Drop every complete task from the selected list, keeping the order of the
/// rest. Returns how many were removed.
pub fn clear_completed_tasks(store: &mut Store) -> usize {
    let Some(list) = store.selected_list_mut() else {
        return 0;
    };
    let before = list.tasks.len();
    list.tasks.retain(|t| !t.complete);
    before - list.tasks.len()
}
