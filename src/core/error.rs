use tokio::task::JoinError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
/// Error captured while a scheduled task was running
pub enum SchedulerError {
    /// The task was stopped on purpose before it finished
    #[error("task was cancelled")]
    Cancelled,

    /// Error occurred during task execution
    #[error("{0}")]
    Execution(String),

    #[error("{0}")]
    Unexpected(String),
}

impl SchedulerError {
    pub fn panic() -> Self {
        SchedulerError::Execution("task panicked".to_owned())
    }

    pub fn unexpect(e: JoinError) -> Self {
        SchedulerError::Unexpected(format!("task failed unexpectedly: {:?}", e))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SchedulerError::Cancelled)
    }

    pub fn description(&self) -> &'static str {
        match self {
            SchedulerError::Cancelled => "Cancelled: The task was cancelled before it completed.",
            SchedulerError::Execution(_) => {
                "Execution: Error occurred during task execution or runtime."
            }
            SchedulerError::Unexpected(_) => "Unexpected: An unexpected error occurred.",
        }
    }
}
