use crate::core::outcome::TaskOutcome;
use crate::core::result::{TaskResult, TransactionId};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// A transaction boundary between two consecutive results.
///
/// `index` is the position of the result the marker is drawn in front of; a
/// transaction still open after the last result closes at `len`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionMarker {
    Opened {
        index: usize,
        transaction_id: TransactionId,
    },
    Closed {
        index: usize,
        transaction_id: TransactionId,
    },
}

/// Walks results in completion order and reports where transactions open and close.
pub fn transaction_markers(results: &[TaskResult]) -> Vec<TransactionMarker> {
    let mut markers = Vec::new();
    let mut previous: Option<&TaskResult> = None;

    for (index, result) in results.iter().enumerate() {
        if !result.has_same_transaction(previous) {
            if let Some(transaction_id) = previous.and_then(TaskResult::transaction_id) {
                markers.push(TransactionMarker::Closed {
                    index,
                    transaction_id,
                });
            }
            if let Some(transaction_id) = result.transaction_id() {
                markers.push(TransactionMarker::Opened {
                    index,
                    transaction_id,
                });
            }
        }
        previous = Some(result);
    }

    if let Some(transaction_id) = previous.and_then(TaskResult::transaction_id) {
        markers.push(TransactionMarker::Closed {
            index: results.len(),
            transaction_id,
        });
    }
    markers
}

/// In-memory, completion-ordered log of task results.
///
/// Clones share the same log, so the scheduler can record into one handle while
/// a viewer reads from another.
#[derive(Clone, Default)]
pub struct ResultLog {
    results: Arc<RwLock<VecDeque<TaskResult>>>,
    capacity: Option<usize>, // None keeps every result
}

impl ResultLog {
    /// Creates an unbounded log.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(VecDeque::new())),
            capacity: None,
        }
    }

    /// Creates a log that keeps only the most recent `capacity` results.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            results: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity: Some(capacity),
        }
    }

    /// Appends a finished task's result, evicting the oldest entry when full.
    pub async fn record(&self, result: TaskResult) {
        match result.outcome() {
            TaskOutcome::Success => info!(
                task_id = %result.task_id(),
                group = %result.group_description(),
                priority = result.priority(),
                transaction_id = ?result.transaction_id(),
                "Task '{}' completed",
                result
            ),
            TaskOutcome::Cancelled => warn!(
                task_id = %result.task_id(),
                group = %result.group_description(),
                priority = result.priority(),
                transaction_id = ?result.transaction_id(),
                "Task '{}' was cancelled",
                result
            ),
            TaskOutcome::Failed(e) => error!(
                task_id = %result.task_id(),
                group = %result.group_description(),
                priority = result.priority(),
                transaction_id = ?result.transaction_id(),
                "Task '{}' failed, {}: {}",
                result,
                e.description(),
                e
            ),
        }

        let mut results = self.results.write().await;
        if let Some(capacity) = self.capacity {
            while results.len() >= capacity {
                if let Some(evicted) = results.pop_front() {
                    debug!(task_id = %evicted.task_id(), "Evicted oldest task result");
                }
            }
        }
        results.push_back(result);
    }

    /// Snapshot of the logged results, oldest first.
    pub async fn results(&self) -> Vec<TaskResult> {
        let results = self.results.read().await;
        results.iter().cloned().collect()
    }

    pub async fn markers(&self) -> Vec<TransactionMarker> {
        let results = self.results.read().await;
        transaction_markers(&results.iter().cloned().collect::<Vec<_>>())
    }

    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.results.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SchedulerError;
    use crate::core::group::TaskGroup;
    use crate::core::model::ScheduledTask;

    fn results_in(transactions: &[Option<TransactionId>]) -> Vec<TaskResult> {
        let group = TaskGroup::new("Batch");
        transactions
            .iter()
            .enumerate()
            .map(|(i, tx)| {
                let task = ScheduledTask::new(group.clone(), i as i32, format!("task {}", i));
                TaskResult::new(&group, &task, TaskOutcome::Success, *tx)
            })
            .collect()
    }

    #[test]
    fn markers_follow_transaction_changes() {
        let results = results_in(&[None, Some(1), Some(1), Some(2), None]);
        assert_eq!(
            transaction_markers(&results),
            vec![
                TransactionMarker::Opened {
                    index: 1,
                    transaction_id: 1
                },
                TransactionMarker::Closed {
                    index: 3,
                    transaction_id: 1
                },
                TransactionMarker::Opened {
                    index: 3,
                    transaction_id: 2
                },
                TransactionMarker::Closed {
                    index: 4,
                    transaction_id: 2
                },
            ]
        );
    }

    #[test]
    fn open_transaction_closes_after_last_result() {
        let results = results_in(&[Some(8), Some(8)]);
        assert_eq!(
            transaction_markers(&results),
            vec![
                TransactionMarker::Opened {
                    index: 0,
                    transaction_id: 8
                },
                TransactionMarker::Closed {
                    index: 2,
                    transaction_id: 8
                },
            ]
        );
    }

    #[test]
    fn no_transactions_no_markers() {
        assert!(transaction_markers(&results_in(&[None, None])).is_empty());
        assert!(transaction_markers(&[]).is_empty());
    }

    #[tokio::test]
    async fn log_keeps_completion_order() {
        let log = ResultLog::new();
        let reader = log.clone();
        for result in results_in(&[Some(1), None]) {
            log.record(result).await;
        }

        let group = TaskGroup::new("Batch");
        let task = ScheduledTask::new(group.clone(), 0, "failed task");
        log.record(TaskResult::new(
            &group,
            &task,
            TaskOutcome::Failed(SchedulerError::Execution("bad".into())),
            None,
        ))
        .await;

        let results = reader.results().await;
        let names: Vec<String> = results.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["task 0", "task 1", "failed task"]);
        assert_eq!(reader.markers().await.len(), 2);
    }

    #[tokio::test]
    async fn bounded_log_evicts_oldest() {
        let log = ResultLog::with_capacity(2);
        for result in results_in(&[None, Some(4), Some(5)]) {
            log.record(result).await;
        }

        let results = log.results().await;
        assert_eq!(log.len().await, 2);
        assert_eq!(results[0].transaction_id(), Some(4));
        assert_eq!(results[1].transaction_id(), Some(5));

        assert_eq!(
            log.markers().await,
            vec![
                TransactionMarker::Opened {
                    index: 0,
                    transaction_id: 4
                },
                TransactionMarker::Closed {
                    index: 1,
                    transaction_id: 4
                },
                TransactionMarker::Opened {
                    index: 1,
                    transaction_id: 5
                },
                TransactionMarker::Closed {
                    index: 2,
                    transaction_id: 5
                },
            ]
        );

        log.clear().await;
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn zero_capacity_still_keeps_latest() {
        let log = ResultLog::with_capacity(0);
        for result in results_in(&[Some(1), Some(2)]) {
            log.record(result).await;
        }
        assert_eq!(log.len().await, 1);
        assert_eq!(log.results().await[0].transaction_id(), Some(2));
    }
}
