pub mod list_ops;
pub mod task_ops;

pub use list_ops::{create_list, delete_selected_list, select_list};
pub use task_ops::{add_task, clear_completed_tasks, set_task_complete};

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("no list selected")]
    NoListSelected,
}
