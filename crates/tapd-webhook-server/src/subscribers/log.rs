//! Subscriber that logs every delivery.

use async_trait::async_trait;
use tapd_webhook::*;
use tracing::info;

/// Logs every event kind through `tracing` and never fails.
///
/// Useful as a default subscriber while wiring up a new TAPD workspace.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubscriber;

impl LogSubscriber {
    fn log(&self, ctx: &DispatchContext, envelope: &Envelope) {
        info!(
            kind = %ctx.kind(),
            workspace_id = %envelope.workspace_id,
            id = %envelope.id,
            user = %envelope.current_user,
            from = %envelope.event_from,
            "tapd webhook received"
        );
    }

    fn log_changes(&self, change_fields: Option<&ChangeFields>, changes: &FieldChanges) {
        if let Some(fields) = change_fields {
            info!(fields = %fields.to_wire(), "changed fields");
        }
        for (field, old, new) in changes
            .old
            .iter()
            .filter_map(|(field, old)| Some((field, old, changes.new.get(field)?)))
        {
            info!(field = %field, old = %old, new = %new, "field changed");
        }
    }
}

macro_rules! log_plain {
    ($($listener:ident :: $method:ident ($shape:ident)),+ $(,)?) => {
        $(
            #[async_trait]
            impl $listener for LogSubscriber {
                async fn $method(
                    &self,
                    ctx: &DispatchContext,
                    event: &$shape,
                ) -> std::result::Result<(), ListenerError> {
                    self.log(ctx, &event.envelope);
                    Ok(())
                }
            }
        )+
    };
}

macro_rules! log_update {
    ($($listener:ident :: $method:ident ($shape:ident)),+ $(,)?) => {
        $(
            #[async_trait]
            impl $listener for LogSubscriber {
                async fn $method(
                    &self,
                    ctx: &DispatchContext,
                    event: &$shape,
                ) -> std::result::Result<(), ListenerError> {
                    self.log(ctx, &event.envelope);
                    self.log_changes(event.change_fields.as_ref(), &event.changes);
                    Ok(())
                }
            }
        )+
    };
}

log_plain! {
    StoryCreateListener::on_story_create(StoryCreateEvent),
    StoryDeleteListener::on_story_delete(StoryDeleteEvent),
    TaskCreateListener::on_task_create(TaskCreateEvent),
    TaskDeleteListener::on_task_delete(TaskDeleteEvent),
    BugCreateListener::on_bug_create(BugCreateEvent),
    BugDeleteListener::on_bug_delete(BugDeleteEvent),
    StoryCommentAddListener::on_story_comment_add(StoryCommentAddEvent),
    StoryCommentUpdateListener::on_story_comment_update(StoryCommentUpdateEvent),
    StoryCommentDeleteListener::on_story_comment_delete(StoryCommentDeleteEvent),
    TaskCommentAddListener::on_task_comment_add(TaskCommentAddEvent),
    TaskCommentUpdateListener::on_task_comment_update(TaskCommentUpdateEvent),
    TaskCommentDeleteListener::on_task_comment_delete(TaskCommentDeleteEvent),
    BugCommentAddListener::on_bug_comment_add(BugCommentAddEvent),
    BugCommentUpdateListener::on_bug_comment_update(BugCommentUpdateEvent),
    BugCommentDeleteListener::on_bug_comment_delete(BugCommentDeleteEvent),
    IterationCreateListener::on_iteration_create(IterationCreateEvent),
    IterationDeleteListener::on_iteration_delete(IterationDeleteEvent),
}

log_update! {
    StoryUpdateListener::on_story_update(StoryUpdateEvent),
    TaskUpdateListener::on_task_update(TaskUpdateEvent),
    BugUpdateListener::on_bug_update(BugUpdateEvent),
    IterationUpdateListener::on_iteration_update(IterationUpdateEvent),
}

subscriber!(LogSubscriber:
    story_create => StoryCreateListener,
    story_update => StoryUpdateListener,
    story_delete => StoryDeleteListener,
    task_create => TaskCreateListener,
    task_update => TaskUpdateListener,
    task_delete => TaskDeleteListener,
    bug_create => BugCreateListener,
    bug_update => BugUpdateListener,
    bug_delete => BugDeleteListener,
    story_comment_add => StoryCommentAddListener,
    story_comment_update => StoryCommentUpdateListener,
    story_comment_delete => StoryCommentDeleteListener,
    task_comment_add => TaskCommentAddListener,
    task_comment_update => TaskCommentUpdateListener,
    task_comment_delete => TaskCommentDeleteListener,
    bug_comment_add => BugCommentAddListener,
    bug_comment_update => BugCommentUpdateListener,
    bug_comment_delete => BugCommentDeleteListener,
    iteration_create => IterationCreateListener,
    iteration_update => IterationUpdateListener,
    iteration_delete => IterationDeleteListener,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_log_subscriber_covers_every_kind() {
        let dispatcher = Dispatcher::new().with_subscriber(Arc::new(LogSubscriber));
        for kind in EventKind::ALL {
            assert_eq!(dispatcher.registrations(*kind), 1, "{}", kind);
        }
    }

    #[tokio::test]
    async fn test_log_subscriber_accepts_update() {
        let dispatcher = Dispatcher::new().with_subscriber(Arc::new(LogSubscriber));
        let payload = br#"{
            "event": "story::update",
            "workspace_id": "111",
            "id": "999",
            "change_fields": "owner",
            "old_owner": "alice;",
            "new_owner": "bob;"
        }"#;

        dispatcher
            .dispatch_payload(&CancellationToken::new(), payload)
            .await
            .unwrap();
    }
}
