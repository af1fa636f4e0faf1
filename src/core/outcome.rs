use crate::core::error::SchedulerError;
use std::fmt;
use tokio::task::JoinError;

static CANCELLED: SchedulerError = SchedulerError::Cancelled;

/// How a scheduled task ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task ran to completion without error.
    Success,

    /// The task was stopped deliberately.
    Cancelled,

    /// The task failed for any reason other than cancellation.
    Failed(SchedulerError),
}

impl TaskOutcome {
    /// Maps a finished tokio task onto an outcome.
    ///
    /// An aborted task counts as cancelled, a panic as an execution failure.
    pub fn from_join(joined: Result<Result<(), SchedulerError>, JoinError>) -> Self {
        match joined {
            Ok(result) => result.into(),
            Err(e) if e.is_cancelled() => TaskOutcome::Cancelled,
            Err(e) if e.is_panic() => TaskOutcome::Failed(SchedulerError::panic()),
            Err(e) => TaskOutcome::Failed(SchedulerError::unexpect(e)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, TaskOutcome::Cancelled)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TaskOutcome::Failed(_))
    }

    /// The captured error, if any. Cancellation reports [`SchedulerError::Cancelled`].
    pub fn error(&self) -> Option<&SchedulerError> {
        match self {
            TaskOutcome::Success => None,
            TaskOutcome::Cancelled => Some(&CANCELLED),
            TaskOutcome::Failed(e) => Some(e),
        }
    }
}

impl From<Result<(), SchedulerError>> for TaskOutcome {
    fn from(result: Result<(), SchedulerError>) -> Self {
        match result {
            Ok(()) => TaskOutcome::Success,
            Err(SchedulerError::Cancelled) => TaskOutcome::Cancelled,
            Err(e) => TaskOutcome::Failed(e),
        }
    }
}

impl fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOutcome::Success => write!(f, "Success"),
            TaskOutcome::Cancelled => write!(f, "Cancelled"),
            TaskOutcome::Failed(e) => write!(f, "Failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn result_conversion_separates_cancellation() {
        assert_eq!(TaskOutcome::from(Ok(())), TaskOutcome::Success);
        assert_eq!(
            TaskOutcome::from(Err(SchedulerError::Cancelled)),
            TaskOutcome::Cancelled
        );
        let failed = TaskOutcome::from(Err(SchedulerError::Execution("bad input".into())));
        assert!(failed.is_failed());
        assert_eq!(failed.to_string(), "Failed: bad input");
    }

    #[test]
    fn error_reports_cancellation_kind() {
        assert_eq!(TaskOutcome::Success.error(), None);
        assert_eq!(
            TaskOutcome::Cancelled.error(),
            Some(&SchedulerError::Cancelled)
        );
    }

    #[tokio::test]
    async fn aborted_task_is_cancelled() {
        let handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<(), SchedulerError>(())
        });
        handle.abort();
        let outcome = TaskOutcome::from_join(handle.await);
        assert!(outcome.is_cancelled());
    }

    #[tokio::test]
    async fn panicked_task_is_failed() {
        let handle = tokio::spawn(async {
            if true {
                panic!("worker blew up");
            }
            Ok::<(), SchedulerError>(())
        });
        let outcome = TaskOutcome::from_join(handle.await);
        assert_eq!(outcome, TaskOutcome::Failed(SchedulerError::panic()));
    }

    #[tokio::test]
    async fn finished_task_keeps_its_own_result() {
        let handle = tokio::spawn(async { Err::<(), _>(SchedulerError::Cancelled) });
        assert!(TaskOutcome::from_join(handle.await).is_cancelled());

        let handle = tokio::spawn(async { Ok::<(), SchedulerError>(()) });
        assert!(TaskOutcome::from_join(handle.await).is_success());
    }
}
