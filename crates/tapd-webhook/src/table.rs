//! The closed webhook vocabulary.
//!
//! Every event kind is declared exactly once, here. The per-kind enum
//! variants, payload union, decoder table, listener traits, subscriber
//! probes and dispatcher buckets are all generated from this list, so adding
//! a kind is a single new row.
//!
//! Row layout:
//!
//! ```text
//! Variant => "wire::name", PayloadShape, ListenerTrait, listener_method,
//!            subscriber_probe, register_method, Family;
//! ```

macro_rules! for_each_event_kind {
    ($callback:ident) => {
        $callback! {
            StoryCreate => "story::create", StoryCreateEvent, StoryCreateListener,
                on_story_create, story_create, register_story_create_listener, Entity;
            StoryUpdate => "story::update", StoryUpdateEvent, StoryUpdateListener,
                on_story_update, story_update, register_story_update_listener, Entity;
            StoryDelete => "story::delete", StoryDeleteEvent, StoryDeleteListener,
                on_story_delete, story_delete, register_story_delete_listener, Entity;
            TaskCreate => "task::create", TaskCreateEvent, TaskCreateListener,
                on_task_create, task_create, register_task_create_listener, Entity;
            TaskUpdate => "task::update", TaskUpdateEvent, TaskUpdateListener,
                on_task_update, task_update, register_task_update_listener, Entity;
            TaskDelete => "task::delete", TaskDeleteEvent, TaskDeleteListener,
                on_task_delete, task_delete, register_task_delete_listener, Entity;
            BugCreate => "bug::create", BugCreateEvent, BugCreateListener,
                on_bug_create, bug_create, register_bug_create_listener, Entity;
            BugUpdate => "bug::update", BugUpdateEvent, BugUpdateListener,
                on_bug_update, bug_update, register_bug_update_listener, Entity;
            BugDelete => "bug::delete", BugDeleteEvent, BugDeleteListener,
                on_bug_delete, bug_delete, register_bug_delete_listener, Entity;

            StoryCommentAdd => "story_comment::add", StoryCommentAddEvent, StoryCommentAddListener,
                on_story_comment_add, story_comment_add, register_story_comment_add_listener, Comment;
            StoryCommentUpdate => "story_comment::update", StoryCommentUpdateEvent, StoryCommentUpdateListener,
                on_story_comment_update, story_comment_update, register_story_comment_update_listener, Comment;
            StoryCommentDelete => "story_comment::delete", StoryCommentDeleteEvent, StoryCommentDeleteListener,
                on_story_comment_delete, story_comment_delete, register_story_comment_delete_listener, Comment;
            TaskCommentAdd => "task_comment::add", TaskCommentAddEvent, TaskCommentAddListener,
                on_task_comment_add, task_comment_add, register_task_comment_add_listener, Comment;
            TaskCommentUpdate => "task_comment::update", TaskCommentUpdateEvent, TaskCommentUpdateListener,
                on_task_comment_update, task_comment_update, register_task_comment_update_listener, Comment;
            TaskCommentDelete => "task_comment::delete", TaskCommentDeleteEvent, TaskCommentDeleteListener,
                on_task_comment_delete, task_comment_delete, register_task_comment_delete_listener, Comment;
            BugCommentAdd => "bug_comment::add", BugCommentAddEvent, BugCommentAddListener,
                on_bug_comment_add, bug_comment_add, register_bug_comment_add_listener, Comment;
            BugCommentUpdate => "bug_comment::update", BugCommentUpdateEvent, BugCommentUpdateListener,
                on_bug_comment_update, bug_comment_update, register_bug_comment_update_listener, Comment;
            BugCommentDelete => "bug_comment::delete", BugCommentDeleteEvent, BugCommentDeleteListener,
                on_bug_comment_delete, bug_comment_delete, register_bug_comment_delete_listener, Comment;

            IterationCreate => "iteration::create", IterationCreateEvent, IterationCreateListener,
                on_iteration_create, iteration_create, register_iteration_create_listener, Iteration;
            IterationUpdate => "iteration::update", IterationUpdateEvent, IterationUpdateListener,
                on_iteration_update, iteration_update, register_iteration_update_listener, Iteration;
            IterationDelete => "iteration::delete", IterationDeleteEvent, IterationDeleteListener,
                on_iteration_delete, iteration_delete, register_iteration_delete_listener, Iteration;
        }
    };
}
