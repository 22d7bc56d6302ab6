use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub task: String,
    pub deadline: String,
    pub user: String,
}

#[derive(Debug, Deserialize)]
pub struct TasksQuery {
    pub name: String,
}
