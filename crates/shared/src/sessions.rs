use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::models::{Role, Turn};

/// Most recent history turns included in the message window sent upstream.
pub const HISTORY_WINDOW: usize = 10;

/// One session's mutable state: the ordered transcript and the latest
/// summary per finished section. Turns are immutable once appended and the
/// append order is the conversation's authoritative timeline.
#[derive(Debug, Default)]
pub struct SessionState {
    turns: Vec<Turn>,
    summaries: HashMap<String, String>,
}

impl SessionState {
    pub fn append_turn(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn {
            role,
            content: content.into(),
        });
    }

    /// The most recent `limit` turns in original append order, or the full
    /// history when it is shorter than `limit`.
    pub fn recent_turns(&self, limit: usize) -> Vec<Turn> {
        let skip = self.turns.len().saturating_sub(limit);
        self.turns[skip..].to_vec()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Clears the transcript. Summaries survive a reset so a fresh chat can
    /// still lean on what the learner already completed.
    pub fn clear_history(&mut self) {
        self.turns.clear();
    }

    /// A regenerated summary overwrites the previous one for the section.
    pub fn set_summary(&mut self, section_id: &str, text: impl Into<String>) {
        self.summaries.insert(section_id.to_string(), text.into());
    }

    pub fn summary(&self, section_id: &str) -> Option<&str> {
        self.summaries.get(section_id).map(String::as_str)
    }
}

/// In-process map from session id to session state. Sessions are created
/// lazily on first reference and live for the process lifetime; there is no
/// eviction. Each session sits behind its own async mutex so one session's
/// turn pipeline (append user turn, build window, invoke, append reply) is
/// serialized without blocking requests for other session ids.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<SessionState>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create handle for a session. Callers that need the turn
    /// pipeline serialized lock the returned mutex for its whole duration.
    pub async fn session(&self, session_id: &str) -> Arc<Mutex<SessionState>> {
        if let Some(session) = self.sessions.read().await.get(session_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions.entry(session_id.to_string()).or_default().clone()
    }

    /// Clears history for the session; summaries are left untouched.
    pub async fn reset(&self, session_id: &str) {
        let session = self.sessions.read().await.get(session_id).cloned();
        if let Some(session) = session {
            session.lock().await.clear_history();
        }
    }

    pub async fn append_turn(&self, session_id: &str, role: Role, content: impl Into<String>) {
        let session = self.session(session_id).await;
        let mut state = session.lock().await;
        state.append_turn(role, content);
    }

    /// Ordered history for a session, bounded by `limit` when supplied.
    /// Unknown session ids yield an empty list without creating the session.
    pub async fn history(&self, session_id: &str, limit: Option<usize>) -> Vec<Turn> {
        let session = self.sessions.read().await.get(session_id).cloned();
        let Some(session) = session else {
            return Vec::new();
        };

        let state = session.lock().await;
        match limit {
            Some(limit) => state.recent_turns(limit),
            None => state.turns().to_vec(),
        }
    }

    pub async fn set_summary(&self, session_id: &str, section_id: &str, text: impl Into<String>) {
        let session = self.session(session_id).await;
        let mut state = session.lock().await;
        state.set_summary(section_id, text);
    }

    pub async fn summary(&self, session_id: &str, section_id: &str) -> Option<String> {
        let session = self.sessions.read().await.get(session_id).cloned()?;
        let state = session.lock().await;
        state.summary(section_id).map(ToString::to_string)
    }
}
