use std::time::Duration;

use polly_task_results::core::{
    error::SchedulerError,
    group::TaskGroup,
    model::ScheduledTask,
    outcome::TaskOutcome,
    report::{ResultLog, TransactionMarker},
    result::TaskResult,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let log = ResultLog::with_capacity(100);
    let group = TaskGroup::new("Auto Analysis");

    let tasks = vec![
        (ScheduledTask::new(group.clone(), 1, "Create functions"), Some(1)),
        (ScheduledTask::new(group.clone(), 2, "Propagate types"), Some(1)),
        (ScheduledTask::new(group.clone(), 3, "Find strings"), Some(2)),
        (ScheduledTask::new(group.clone(), 4, "Decompile all"), None),
    ];

    for (task, transaction_id) in tasks {
        let priority = task.priority();
        let handle = tokio::spawn(async move {
            match priority {
                3 => Err(SchedulerError::Execution("string table is corrupt".to_owned())),
                _ => {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(())
                }
            }
        });
        // The last task is stopped by the user before it finishes.
        if priority == 4 {
            handle.abort();
        }

        let outcome = TaskOutcome::from_join(handle.await);
        log.record(TaskResult::new(&group, &task, outcome, transaction_id))
            .await;
    }

    let results = log.results().await;
    for marker in log.markers().await {
        match marker {
            TransactionMarker::Opened {
                index,
                transaction_id,
            } => println!("transaction {transaction_id} opened before '{}'", results[index]),
            TransactionMarker::Closed {
                index,
                transaction_id,
            } => match results.get(index) {
                Some(next) => println!("transaction {transaction_id} closed before '{next}'"),
                None => println!("transaction {transaction_id} closed at end"),
            },
        }
    }

    for result in &results {
        let status = if result.was_cancelled() {
            "cancelled".to_owned()
        } else if let Some(e) = result.exception() {
            format!("failed: {e}")
        } else {
            "ok".to_owned()
        };
        println!(
            "[{}] {} (priority {}): {}",
            result.group_description(),
            result,
            result.priority(),
            status
        );
    }
}
