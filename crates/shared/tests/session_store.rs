use shared::models::{Role, Turn};
use shared::sessions::{HISTORY_WINDOW, SessionStore};

#[tokio::test]
async fn unseen_session_has_empty_history() {
    let store = SessionStore::new();

    let history = store.history("never-seen", None).await;
    assert!(history.is_empty());

    // Reading history must not create the session as a side effect.
    let history_again = store.history("never-seen", Some(HISTORY_WINDOW)).await;
    assert!(history_again.is_empty());
}

#[tokio::test]
async fn reset_clears_history_but_keeps_summaries() {
    let store = SessionStore::new();
    store.append_turn("s1", Role::User, "hello").await;
    store.append_turn("s1", Role::Assistant, "hi there").await;
    store.set_summary("s1", "1.1", "Spam filtering basics.").await;

    store.reset("s1").await;

    assert!(store.history("s1", None).await.is_empty());
    assert_eq!(
        store.summary("s1", "1.1").await.as_deref(),
        Some("Spam filtering basics.")
    );
}

#[tokio::test]
async fn reset_of_unknown_session_is_a_no_op() {
    let store = SessionStore::new();
    store.reset("missing").await;
    assert!(store.history("missing", None).await.is_empty());
}

#[tokio::test]
async fn history_window_returns_most_recent_turns_in_order() {
    let store = SessionStore::new();
    for index in 0..5 {
        store
            .append_turn("s2", Role::User, format!("turn {index}"))
            .await;
    }

    let windowed = store.history("s2", Some(3)).await;
    assert_eq!(
        windowed,
        vec![
            Turn {
                role: Role::User,
                content: "turn 2".to_string()
            },
            Turn {
                role: Role::User,
                content: "turn 3".to_string()
            },
            Turn {
                role: Role::User,
                content: "turn 4".to_string()
            },
        ]
    );

    let oversized = store.history("s2", Some(50)).await;
    assert_eq!(oversized.len(), 5);
    assert_eq!(oversized[0].content, "turn 0");
    assert_eq!(oversized[4].content, "turn 4");
}

#[tokio::test]
async fn summaries_are_overwritten_per_section() {
    let store = SessionStore::new();
    store.set_summary("s3", "2.1", "first pass").await;
    store.set_summary("s3", "2.1", "second pass").await;
    store.set_summary("s3", "2.2", "other section").await;

    assert_eq!(store.summary("s3", "2.1").await.as_deref(), Some("second pass"));
    assert_eq!(store.summary("s3", "2.2").await.as_deref(), Some("other section"));
    assert_eq!(store.summary("s3", "9.9").await, None);
    assert_eq!(store.summary("other", "2.1").await, None);
}

#[tokio::test]
async fn sessions_are_isolated_by_id() {
    let store = SessionStore::new();
    store.append_turn("a", Role::User, "for a").await;
    store.append_turn("b", Role::User, "for b").await;

    let history_a = store.history("a", None).await;
    assert_eq!(history_a.len(), 1);
    assert_eq!(history_a[0].content, "for a");

    store.reset("a").await;
    assert!(store.history("a", None).await.is_empty());
    assert_eq!(store.history("b", None).await.len(), 1);
}
