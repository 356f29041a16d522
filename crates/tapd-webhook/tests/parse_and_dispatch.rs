//! End-to-end tests over captured webhook payloads.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tapd_webhook::*;

macro_rules! fixture {
    ($entity:literal, $action:literal) => {
        include_str!(concat!("fixtures/", $entity, "/", $action, ".json"))
    };
}

/// Every supported kind with its captured payload.
const FIXTURES: &[(EventKind, &str)] = &[
    (EventKind::StoryCreate, fixture!("story", "create")),
    (EventKind::StoryUpdate, fixture!("story", "update")),
    (EventKind::StoryDelete, fixture!("story", "delete")),
    (EventKind::TaskCreate, fixture!("task", "create")),
    (EventKind::TaskUpdate, fixture!("task", "update")),
    (EventKind::TaskDelete, fixture!("task", "delete")),
    (EventKind::BugCreate, fixture!("bug", "create")),
    (EventKind::BugUpdate, fixture!("bug", "update")),
    (EventKind::BugDelete, fixture!("bug", "delete")),
    (EventKind::StoryCommentAdd, fixture!("story_comment", "add")),
    (EventKind::StoryCommentUpdate, fixture!("story_comment", "update")),
    (EventKind::StoryCommentDelete, fixture!("story_comment", "delete")),
    (EventKind::TaskCommentAdd, fixture!("task_comment", "add")),
    (EventKind::TaskCommentUpdate, fixture!("task_comment", "update")),
    (EventKind::TaskCommentDelete, fixture!("task_comment", "delete")),
    (EventKind::BugCommentAdd, fixture!("bug_comment", "add")),
    (EventKind::BugCommentUpdate, fixture!("bug_comment", "update")),
    (EventKind::BugCommentDelete, fixture!("bug_comment", "delete")),
    (EventKind::IterationCreate, fixture!("iteration", "create")),
    (EventKind::IterationUpdate, fixture!("iteration", "update")),
    (EventKind::IterationDelete, fixture!("iteration", "delete")),
];

/// Records the kind of every event it receives.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<EventKind>>,
}

macro_rules! record_all {
    ($($listener:ident :: $method:ident ($shape:ident) => $probe:ident),+ $(,)?) => {
        $(
            #[async_trait]
            impl $listener for Recorder {
                async fn $method(
                    &self,
                    ctx: &DispatchContext,
                    _event: &$shape,
                ) -> std::result::Result<(), ListenerError> {
                    assert_eq!(ctx.kind(), <$shape as WebhookEvent>::KIND);
                    self.seen.lock().unwrap().push(ctx.kind());
                    Ok(())
                }
            }
        )+

        subscriber!(Recorder: $($probe => $listener),+);
    };
}

record_all! {
    StoryCreateListener::on_story_create(StoryCreateEvent) => story_create,
    StoryUpdateListener::on_story_update(StoryUpdateEvent) => story_update,
    StoryDeleteListener::on_story_delete(StoryDeleteEvent) => story_delete,
    TaskCreateListener::on_task_create(TaskCreateEvent) => task_create,
    TaskUpdateListener::on_task_update(TaskUpdateEvent) => task_update,
    TaskDeleteListener::on_task_delete(TaskDeleteEvent) => task_delete,
    BugCreateListener::on_bug_create(BugCreateEvent) => bug_create,
    BugUpdateListener::on_bug_update(BugUpdateEvent) => bug_update,
    BugDeleteListener::on_bug_delete(BugDeleteEvent) => bug_delete,
    StoryCommentAddListener::on_story_comment_add(StoryCommentAddEvent) => story_comment_add,
    StoryCommentUpdateListener::on_story_comment_update(StoryCommentUpdateEvent) => story_comment_update,
    StoryCommentDeleteListener::on_story_comment_delete(StoryCommentDeleteEvent) => story_comment_delete,
    TaskCommentAddListener::on_task_comment_add(TaskCommentAddEvent) => task_comment_add,
    TaskCommentUpdateListener::on_task_comment_update(TaskCommentUpdateEvent) => task_comment_update,
    TaskCommentDeleteListener::on_task_comment_delete(TaskCommentDeleteEvent) => task_comment_delete,
    BugCommentAddListener::on_bug_comment_add(BugCommentAddEvent) => bug_comment_add,
    BugCommentUpdateListener::on_bug_comment_update(BugCommentUpdateEvent) => bug_comment_update,
    BugCommentDeleteListener::on_bug_comment_delete(BugCommentDeleteEvent) => bug_comment_delete,
    IterationCreateListener::on_iteration_create(IterationCreateEvent) => iteration_create,
    IterationUpdateListener::on_iteration_update(IterationUpdateEvent) => iteration_update,
    IterationDeleteListener::on_iteration_delete(IterationDeleteEvent) => iteration_delete,
}

#[test]
fn test_fixtures_cover_every_kind() {
    assert_eq!(FIXTURES.len(), EventKind::ALL.len());
    for kind in EventKind::ALL {
        assert!(FIXTURES.iter().any(|(k, _)| k == kind), "missing {}", kind);
    }
}

#[test]
fn test_every_fixture_parses_to_its_kind() {
    for (expected, payload) in FIXTURES {
        let (kind, event) = parse_webhook_event(payload.as_bytes())
            .unwrap_or_else(|e| panic!("{} failed to parse: {}", expected, e));
        assert_eq!(kind, *expected);
        assert_eq!(event.kind(), *expected);
        assert_eq!(event.envelope().workspace_id, "20000111");
        assert_eq!(event.envelope().dev_proxy_host, "http://websocket-proxy");
    }
}

#[test]
fn test_story_create_fields() {
    let (_, event) = parse_webhook_event(fixture!("story", "create").as_bytes()).unwrap();
    let Event::StoryCreate(story) = event else {
        panic!("expected story::create");
    };
    assert_eq!(story.name, "Checkout supports coupons");
    assert_eq!(story.owner, "alice;bob;");
    assert_eq!(story.iteration_id, "1120000111001000055");
    assert_eq!(
        story.envelope.created_at().unwrap().to_string(),
        "2024-12-30 17:41:02"
    );
}

#[test]
fn test_story_update_changes() {
    let (_, event) = parse_webhook_event(fixture!("story", "update").as_bytes()).unwrap();
    let Event::StoryUpdate(update) = event else {
        panic!("expected story::update");
    };
    let fields = update.change_fields.unwrap();
    assert_eq!(&*fields, &["owner".to_string(), "modified".to_string()]);
    assert_eq!(update.changes.old_str("owner"), Some("alice;bob;"));
    assert_eq!(update.changes.new_str("owner"), Some("bob;"));
    assert_eq!(update.changes.new.get("custom_field_47"), Some(&json!(null)));
    assert!(update.envelope.created_at().is_some());
}

#[test]
fn test_bug_update_empty_change_fields() {
    let (_, event) = parse_webhook_event(fixture!("bug", "update").as_bytes()).unwrap();
    let Event::BugUpdate(update) = event else {
        panic!("expected bug::update");
    };
    assert_eq!(update.change_fields, Some(ChangeFields::default()));
    assert_eq!(update.changes.pair("severity"), Some((&json!("serious"), &json!("fatal"))));
}

#[test]
fn test_iteration_create_dates() {
    let (_, event) = parse_webhook_event(fixture!("iteration", "create").as_bytes()).unwrap();
    let Event::IterationCreate(iteration) = event else {
        panic!("expected iteration::create");
    };
    assert_eq!(iteration.start_date, "2025-01-02");
    assert_eq!(iteration.end_date, "2025-01-15");
}

#[test]
fn test_comment_add_carries_title() {
    let (_, event) = parse_webhook_event(fixture!("task_comment", "add").as_bytes()).unwrap();
    let Event::TaskCommentAdd(comment) = event else {
        panic!("expected task_comment::add");
    };
    assert!(comment.title.starts_with("alice commented"));
    assert_eq!(comment.entity_id, "1120000111001000321");
    assert_eq!(comment.author, "alice");
}

#[test]
fn test_event_serializes_back_to_wire() {
    for (kind, payload) in FIXTURES {
        let (_, event) = parse_webhook_event(payload.as_bytes()).unwrap();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], kind.as_str());

        let (again, reparsed) = parse_webhook_event(value.to_string().as_bytes()).unwrap();
        assert_eq!(again, *kind);
        assert_eq!(reparsed, event);
    }
}

#[tokio::test]
async fn test_dispatch_every_fixture() {
    let recorder = Arc::new(Recorder::default());
    let dispatcher = Dispatcher::new().with_subscriber(Arc::clone(&recorder));

    for kind in EventKind::ALL {
        assert_eq!(dispatcher.registrations(*kind), 1);
    }

    let cancel = CancellationToken::new();
    for (_, payload) in FIXTURES {
        dispatcher
            .dispatch_payload(&cancel, payload.as_bytes())
            .await
            .unwrap();
    }

    let seen = recorder.seen.lock().unwrap();
    let expected: Vec<EventKind> = FIXTURES.iter().map(|(k, _)| *k).collect();
    assert_eq!(*seen, expected);
}

#[tokio::test]
async fn test_dispatch_rejects_missing_discriminator() {
    let recorder = Arc::new(Recorder::default());
    let dispatcher = Dispatcher::new().with_subscriber(Arc::clone(&recorder));

    let err = dispatcher
        .dispatch_payload(&CancellationToken::new(), br#"{"workspace_id":"20000111"}"#)
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert_eq!(err.to_string(), "webhook event type not found");
    assert!(recorder.seen.lock().unwrap().is_empty());
}
