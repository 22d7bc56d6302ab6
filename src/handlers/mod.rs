mod auth;
mod task;

pub use auth::{create_user, login};
pub use task::{create_task, get_tasks};
