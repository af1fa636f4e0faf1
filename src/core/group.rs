use crate::generate_token;
use serde::{Deserialize, Serialize};

/// A named collection of tasks that are scheduled and reported together.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup {
    id: String,          // Unique identifier for the group
    description: String, // Human-readable label shown next to each result
}

impl TaskGroup {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: generate_token!(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
