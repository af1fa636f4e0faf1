use crate::core::error::SchedulerError;
use crate::core::group::TaskGroup;
use crate::core::model::ScheduledTask;
use crate::core::outcome::TaskOutcome;
use crate::utc_now;
use std::fmt;

/// Identifier of the transaction that was open while a task ran.
pub type TransactionId = i64;

/// Snapshot of a scheduled task taken when it finished running.
///
/// Everything is captured at construction and only read afterwards, so a
/// result can be handed to any number of readers on any thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskResult {
    task_id: String,
    group_id: String,
    priority: i32,
    description: String,
    group_description: String,
    outcome: TaskOutcome,
    transaction_id: Option<TransactionId>,
    completed_at: i64, // UTC milliseconds
}

impl TaskResult {
    /// Records the result of `task`, which ran as part of `group`.
    ///
    /// The group description is read from the task's own group. `outcome` takes
    /// either a [`TaskOutcome`] or the raw `Result<(), SchedulerError>` the task
    /// returned; pass `Err(SchedulerError::Cancelled)` for a cancelled task.
    pub fn new(
        group: &TaskGroup,
        task: &ScheduledTask,
        outcome: impl Into<TaskOutcome>,
        transaction_id: Option<TransactionId>,
    ) -> Self {
        Self {
            task_id: task.id().to_owned(),
            group_id: group.id().to_owned(),
            priority: task.priority(),
            description: task.description().to_owned(),
            group_description: task.group().description().to_owned(),
            outcome: match outcome.into() {
                TaskOutcome::Failed(SchedulerError::Cancelled) => TaskOutcome::Cancelled,
                outcome => outcome,
            },
            transaction_id,
            completed_at: utc_now!(),
        }
    }

    /// Description of the task that was run.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn was_cancelled(&self) -> bool {
        self.exception().is_some_and(SchedulerError::is_cancelled)
    }

    /// The error the task ended with, `None` if it succeeded.
    ///
    /// A cancelled task reports [`SchedulerError::Cancelled`].
    pub fn exception(&self) -> Option<&SchedulerError> {
        self.outcome.error()
    }

    /// Priority the task held within its group.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn group_description(&self) -> &str {
        &self.group_description
    }

    /// Whether this task ran in the same transaction as `other`.
    ///
    /// Two tasks that both ran outside any transaction count as the same.
    pub fn has_same_transaction(&self, other: Option<&TaskResult>) -> bool {
        match other {
            Some(other) => self.transaction_id == other.transaction_id,
            None => false,
        }
    }

    pub fn outcome(&self) -> &TaskOutcome {
        &self.outcome
    }

    pub fn transaction_id(&self) -> Option<TransactionId> {
        self.transaction_id
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn completed_at(&self) -> i64 {
        self.completed_at
    }
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
