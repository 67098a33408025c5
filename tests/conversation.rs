use agentchat::conversation::{BlockBody, ConversationLog};
use agentchat::protocol::{ResponsePayload, TaskOutcome};
use agentchat::tracker::TaskId;
use serde_json::json;

#[test]
fn test_one_block_per_task_id() {
    let mut log = ConversationLog::new();
    let id = TaskId::new();

    log.show_response(id, "first answer", None);
    log.show_response(id, "revised answer", None);

    // Rendering the same id twice replaces the body, never forks the block
    assert_eq!(log.blocks().len(), 1);
    match &log.get(id).unwrap().body {
        BlockBody::Response { text, .. } => assert_eq!(text, "revised answer"),
        other => panic!("expected response body, got {other:?}"),
    }
}

#[test]
fn test_errors_are_distinguished_from_responses() {
    let mut log = ConversationLog::new();
    let id = TaskId::new();

    log.show_error(id, "backend exploded");

    match &log.get(id).unwrap().body {
        BlockBody::Error(message) => assert_eq!(message, "backend exploded"),
        other => panic!("expected error body, got {other:?}"),
    }
}

#[test]
fn test_blocks_keep_first_render_order() {
    let mut log = ConversationLog::new();
    let first = TaskId::new();
    let second = TaskId::new();

    log.show_response(first, "a", None);
    log.show_error(second, "b");
    log.show_response(first, "a2", None);

    let ids: Vec<_> = log.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn test_memory_snapshot_replaces_previous() {
    let mut log = ConversationLog::new();

    log.show_memory(Some(json!({"turns": 1})));
    log.show_memory(Some(json!({"turns": 2})));

    assert_eq!(log.memory().unwrap()["turns"], 2);
}

#[test]
fn test_absent_memory_is_a_noop() {
    let mut log = ConversationLog::new();
    log.show_memory(Some(json!({"turns": 1})));

    // A reply without memory keeps the previous snapshot visible
    log.show_memory(None);

    assert_eq!(log.memory().unwrap()["turns"], 1);
}

#[test]
fn test_apply_routes_outcomes() {
    let mut log = ConversationLog::new();
    let ok_id = TaskId::new();
    let failed_id = TaskId::new();

    log.apply(
        ok_id,
        &TaskOutcome::Completed(ResponsePayload {
            response: "Summary: ...".to_string(),
            memory: Some(json!({"turns": 1})),
            file_link: Some("/public/out.xlsx".to_string()),
        }),
    );
    log.apply(failed_id, &TaskOutcome::Failed("nope".to_string()));

    match &log.get(ok_id).unwrap().body {
        BlockBody::Response { text, file_link } => {
            assert_eq!(text, "Summary: ...");
            assert_eq!(file_link.as_deref(), Some("/public/out.xlsx"));
        }
        other => panic!("expected response body, got {other:?}"),
    }
    assert!(matches!(&log.get(failed_id).unwrap().body, BlockBody::Error(_)));
    assert_eq!(log.memory().unwrap()["turns"], 1);
}
