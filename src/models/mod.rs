mod user;
mod forms;
mod task;

pub use user::User;
pub use forms::{Credentials, NewTask, TasksQuery};
pub use task::Task;
