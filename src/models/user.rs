use serde::{Deserialize, Serialize};

// Field declaration order fixes the CSV column order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub username: String,
    pub password: String, // stored as-is, no hashing
}

impl User {
    pub const HEADERS: [&'static str; 2] = ["username", "password"];
}
