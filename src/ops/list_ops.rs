use crate::model::{Store, TaskList};
use crate::ops::OpError;

/// Append a new empty list. The selection is left unchanged.
pub fn create_list<'a>(store: &'a mut Store, name: &str) -> Result<&'a TaskList, OpError> {
    if name.is_empty() {
        return Err(OpError::EmptyName);
    }
    let id = store.ids.next_id();
    store.lists.push(TaskList::new(id, name.to_string()));
    Ok(&store.lists[store.lists.len() - 1])
}

/// Remove the selected list (and its tasks) and clear the selection.
/// Returns the removed list.
pub fn delete_selected_list(store: &mut Store) -> Result<TaskList, OpError> {
    let id = store.selected_list_id.take().ok_or(OpError::NoListSelected)?;
    let idx = store
        .lists
        .iter()
        .position(|l| l.id == id)
        .ok_or(OpError::NoListSelected)?;
    Ok(store.lists.remove(idx))
}

/// Select the list with `id`. Unknown ids are ignored; returns whether the
/// selection was set.
pub fn select_list(store: &mut Store, id: &str) -> bool {
    if store.find_list(id).is_none() {
        return false;
    }
    store.selected_list_id = Some(id.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_id(store: &mut Store, name: &str) -> String {
        create_list(store, name).unwrap().id.clone()
    }

    #[test]
    fn create_list_appends_empty_list() {
        let mut store = Store::default();
        let list = create_list(&mut store, "Groceries").unwrap();
        assert_eq!(list.name, "Groceries");
        assert!(list.tasks.is_empty());
        assert_eq!(store.lists().len(), 1);
    }

    #[test]
    fn create_list_grows_by_one_each_time() {
        let mut store = Store::default();
        for (i, name) in ["a", "b", "c", "a"].iter().enumerate() {
            create_list(&mut store, name).unwrap();
            assert_eq!(store.lists().len(), i + 1);
            assert!(store.lists()[i].tasks.is_empty());
        }
    }

    #[test]
    fn create_list_after_max_id_gets_fresh_ids() {
        let old = u64::MAX.to_string();
        let lists = vec![TaskList::new(old.clone(), "Old".into())];
        let mut store = Store::from_parts(lists, None);
        let a = list_id(&mut store, "A");
        let b = list_id(&mut store, "B");
        assert_ne!(a, old);
        assert_ne!(b, old);
        assert_ne!(a, b);
    }

    #[test]
    fn create_list_rejects_empty_name() {
        let mut store = Store::default();
        assert_eq!(create_list(&mut store, ""), Err(OpError::EmptyName));
        assert!(store.is_empty());
    }

    #[test]
    fn create_list_does_not_select() {
        let mut store = Store::default();
        create_list(&mut store, "Groceries").unwrap();
        assert!(store.selected_list_id().is_none());
    }

    #[test]
    fn duplicate_names_get_distinct_ids() {
        let mut store = Store::default();
        let a = list_id(&mut store, "Same");
        let b = list_id(&mut store, "Same");
        assert_ne!(a, b);
    }

    #[test]
    fn select_known_list() {
        let mut store = Store::default();
        let id = list_id(&mut store, "A");
        assert!(select_list(&mut store, &id));
        assert_eq!(store.selected_list_id(), Some(id.as_str()));
    }

    #[test]
    fn select_unknown_list_keeps_selection() {
        let mut store = Store::default();
        let id = list_id(&mut store, "A");
        select_list(&mut store, &id);
        assert!(!select_list(&mut store, "nope"));
        assert_eq!(store.selected_list_id(), Some(id.as_str()));
    }

    #[test]
    fn delete_selected_removes_only_that_list() {
        let mut store = Store::default();
        list_id(&mut store, "A");
        let b = list_id(&mut store, "B");
        select_list(&mut store, &b);

        let removed = delete_selected_list(&mut store).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<&str> = store.lists().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
        assert!(store.lists().iter().all(|l| l.id != b));
        assert!(store.selected_list_id().is_none());
    }

    #[test]
    fn delete_without_selection_is_an_error() {
        let mut store = Store::default();
        list_id(&mut store, "A");
        assert_eq!(
            delete_selected_list(&mut store).unwrap_err(),
            OpError::NoListSelected
        );
        assert_eq!(store.lists().len(), 1);
    }
}
