use serde::{Deserialize, Serialize};

use super::task::Task;

/// A named, ordered collection of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub name: String,
    /// Tasks in insertion order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new(id: String, name: String) -> Self {
        TaskList {
            id,
            name,
            tasks: Vec::new(),
        }
    }

    /// Number of tasks not yet complete
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.complete).count()
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn find_task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_incomplete_only() {
        let mut list = TaskList::new("1".into(), "Chores".into());
        list.tasks.push(Task::new("2".into(), "Dishes".into()));
        list.tasks.push(Task::new("3".into(), "Laundry".into()));
        list.tasks[0].complete = true;
        assert_eq!(list.remaining(), 1);
    }

    #[test]
    fn find_task_by_id() {
        let mut list = TaskList::new("1".into(), "Chores".into());
        list.tasks.push(Task::new("2".into(), "Dishes".into()));
        assert_eq!(list.find_task("2").map(|t| t.name.as_str()), Some("Dishes"));
        assert!(list.find_task("9").is_none());
    }
}
