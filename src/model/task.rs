use serde::{Deserialize, Serialize};

/// A named unit of work inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque id, unique across the user's data
    pub id: String,
    /// Task text (never empty when created through `ops`)
    pub name: String,
    /// Completion flag
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    /// Create an incomplete task
    pub fn new(id: String, name: String) -> Self {
        Task {
            id,
            name,
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_incomplete() {
        let task = Task::new("1".into(), "Milk".into());
        assert!(!task.complete);
        assert_eq!(task.name, "Milk");
    }

    #[test]
    fn complete_defaults_to_false_when_absent() {
        let task: Task = serde_json::from_str(r#"{"id":"7","name":"Eggs"}"#).unwrap();
        assert_eq!(task, Task::new("7".into(), "Eggs".into()));
    }
}
