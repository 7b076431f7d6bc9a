//! Application services.

pub mod list_service;
pub mod task_service;

pub use list_service::{ListError, ListService, ListServiceImpl};
pub use task_service::{TaskError, TaskService, TaskServiceImpl};
