use agentchat::protocol::{ResponsePayload, TaskOutcome};
use agentchat::tracker::{TaskId, TaskLifecycleTracker, TaskStatus};

fn completed_outcome() -> TaskOutcome {
    TaskOutcome::Completed(ResponsePayload {
        response: "done".to_string(),
        memory: None,
        file_link: None,
    })
}

#[test]
fn test_register_starts_pending() {
    let mut tracker = TaskLifecycleTracker::new();
    let id = TaskId::new();

    tracker.register(id, "Summarize this document").unwrap();

    let record = tracker.get(id).unwrap();
    assert_eq!(record.status, TaskStatus::Pending);
    assert_eq!(record.description, "Summarize this document");
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut tracker = TaskLifecycleTracker::new();
    let id = TaskId::new();

    tracker.register(id, "first").unwrap();
    assert!(tracker.register(id, "second").is_err());

    // The original entry is untouched
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.get(id).unwrap().description, "first");
}

#[test]
fn test_successful_lifecycle_sequence() {
    let mut tracker = TaskLifecycleTracker::new();
    let id = TaskId::new();
    tracker.register(id, "task").unwrap();

    assert!(tracker.transition(id, TaskStatus::InProgress));
    assert_eq!(tracker.get(id).unwrap().status, TaskStatus::InProgress);

    assert!(tracker.transition(id, TaskStatus::Completed));
    assert_eq!(tracker.get(id).unwrap().status, TaskStatus::Completed);
}

#[test]
fn test_failed_lifecycle_sequence() {
    let mut tracker = TaskLifecycleTracker::new();
    let id = TaskId::new();
    tracker.register(id, "task").unwrap();

    assert!(tracker.transition(id, TaskStatus::InProgress));
    assert!(tracker.transition(id, TaskStatus::Error));
    assert_eq!(tracker.get(id).unwrap().status, TaskStatus::Error);
}

#[test]
fn test_no_skipping_states() {
    let mut tracker = TaskLifecycleTracker::new();
    let id = TaskId::new();
    tracker.register(id, "task").unwrap();

    // Pending cannot jump straight to a terminal state
    assert!(!tracker.transition(id, TaskStatus::Completed));
    assert!(!tracker.transition(id, TaskStatus::Error));
    assert_eq!(tracker.get(id).unwrap().status, TaskStatus::Pending);
}

#[test]
fn test_terminal_states_are_final() {
    let mut tracker = TaskLifecycleTracker::new();
    let id = TaskId::new();
    tracker.register(id, "task").unwrap();
    tracker.transition(id, TaskStatus::InProgress);
    tracker.transition(id, TaskStatus::Completed);

    // No exit from a terminal state, no duplicate terminal transition
    assert!(!tracker.transition(id, TaskStatus::Error));
    assert!(!tracker.transition(id, TaskStatus::Completed));
    assert!(!tracker.transition(id, TaskStatus::InProgress));
    assert_eq!(tracker.get(id).unwrap().status, TaskStatus::Completed);
}

#[test]
fn test_unknown_id_is_a_noop() {
    let mut tracker = TaskLifecycleTracker::new();
    assert!(!tracker.transition(TaskId::new(), TaskStatus::InProgress));
    assert!(tracker.is_empty());
}

#[test]
fn test_resolve_maps_outcomes_to_terminal_states() {
    let mut tracker = TaskLifecycleTracker::new();
    let ok_id = TaskId::new();
    let failed_id = TaskId::new();
    tracker.register(ok_id, "ok").unwrap();
    tracker.register(failed_id, "bad").unwrap();
    tracker.transition(ok_id, TaskStatus::InProgress);
    tracker.transition(failed_id, TaskStatus::InProgress);

    assert!(tracker.resolve(ok_id, &completed_outcome()));
    assert!(tracker.resolve(failed_id, &TaskOutcome::Failed("boom".to_string())));

    assert_eq!(tracker.get(ok_id).unwrap().status, TaskStatus::Completed);
    assert_eq!(tracker.get(failed_id).unwrap().status, TaskStatus::Error);
}

#[test]
fn test_log_keeps_submission_order() {
    let mut tracker = TaskLifecycleTracker::new();
    let first = TaskId::new();
    let second = TaskId::new();
    tracker.register(first, "first").unwrap();
    tracker.register(second, "second").unwrap();
    tracker.transition(first, TaskStatus::InProgress);
    tracker.transition(second, TaskStatus::InProgress);

    // Resolve in reverse order; the log order must not change
    tracker.resolve(second, &completed_outcome());
    tracker.resolve(first, &TaskOutcome::Failed("late".to_string()));

    let ids: Vec<_> = tracker.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn test_in_flight_counts_non_terminal_tasks() {
    let mut tracker = TaskLifecycleTracker::new();
    let a = TaskId::new();
    let b = TaskId::new();
    tracker.register(a, "a").unwrap();
    tracker.register(b, "b").unwrap();
    tracker.transition(a, TaskStatus::InProgress);

    assert_eq!(tracker.in_flight(), 2);

    tracker.transition(a, TaskStatus::Completed);
    assert_eq!(tracker.in_flight(), 1);
}
