use serde::{Deserialize, Serialize};

/// A single to-do item. `deadline` is free-form text and `user` is the
/// owner's username; neither is cross-checked against the user table.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub task: String,
    pub deadline: String,
    pub user: String,
}

impl Task {
    pub const HEADERS: [&'static str; 3] = ["task", "deadline", "user"];
}
