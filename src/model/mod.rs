pub mod config;
pub mod id;
pub mod list;
pub mod store;
pub mod task;

pub use config::*;
pub use id::*;
pub use list::*;
pub use store::*;
pub use task::*;
