use crate::{core::group::TaskGroup, generate_token};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptor of a task as it sits in its group's queue.
///
/// The scheduler hands this to [`TaskResult::new`](crate::core::result::TaskResult::new)
/// once the task has finished; the result copies what it needs out of it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    id: String,          // Unique identifier for the scheduled task
    priority: i32,       // Priority within the owning group
    description: String, // Human-readable label of the task
    group: TaskGroup,    // Group the task was scheduled into
}

impl ScheduledTask {
    pub fn new(group: TaskGroup, priority: i32, description: impl Into<String>) -> Self {
        Self {
            id: generate_token!(),
            priority,
            description: description.into(),
            group,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn group(&self) -> &TaskGroup {
        &self.group
    }
}

impl fmt::Display for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, priority {}]",
            self.description,
            self.group.description(),
            self.priority
        )
    }
}
