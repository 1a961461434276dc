//! Scene heading search session
//!
//! A session owns a snapshot of the outline, the current query, the filtered
//! result list and a cursor into it. The host feeds it discrete events and
//! renders the read-only views; the session ends in exactly one outcome,
//! navigate to the highlighted scene or close without navigating.
//!
//! # Module Structure
//!
//! - `input` - Mapping host key names and key codes to [`Key`]

mod input;

pub use input::Key;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{BackspacePolicy, Config};
use crate::outline::{filter_indices, LocationRef, SceneRecord};

/// Lifecycle phase of a search session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    Active,
    /// A scene was accepted (terminal)
    Confirmed,
    /// Closed without a selection (terminal)
    Cancelled,
}

/// Input events understood by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TextChanged(String),
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    BackspaceOnEmptyQuery,
}

/// Terminal result handed back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionOutcome {
    Navigate { location: LocationRef },
    Cancel,
}

/// Host side of a finished session
pub trait NavigationSink {
    /// Scroll the document view to `location`
    fn scroll_to(&mut self, location: LocationRef);
    /// Dismiss the search window
    fn close_search(&mut self);
}

impl SessionOutcome {
    /// Apply the outcome to the host. The search is closed either way.
    pub fn apply<S: NavigationSink + ?Sized>(self, sink: &mut S) {
        if let SessionOutcome::Navigate { location } = self {
            sink.scroll_to(location);
        }
        sink.close_search();
    }
}

/// Serializable view of a session for hosts that render out of process
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot<'a> {
    pub phase: SessionPhase,
    pub query: &'a str,
    pub cursor: Option<usize>,
    pub results: Vec<&'a SceneRecord>,
}

pub struct SceneSearchSession {
    /// Outline captured when the search opened
    all_scenes: Arc<[SceneRecord]>,
    query: String,
    /// Indices into `all_scenes`, in outline order
    filtered: Vec<usize>,
    /// Index into `filtered`; None iff `filtered` is empty
    cursor: Option<usize>,
    phase: SessionPhase,
    /// Index into `all_scenes` once confirmed
    selected: Option<usize>,
    backspace_policy: BackspacePolicy,
}

impl SceneSearchSession {
    pub fn new(scenes: impl Into<Arc<[SceneRecord]>>) -> Self {
        let all_scenes: Arc<[SceneRecord]> = scenes.into();
        let filtered: Vec<usize> = (0..all_scenes.len()).collect();
        let cursor = if filtered.is_empty() { None } else { Some(0) };

        debug!(scene_count = all_scenes.len(), "Scene search session opened");

        SceneSearchSession {
            all_scenes,
            query: String::new(),
            filtered,
            cursor,
            phase: SessionPhase::Active,
            selected: None,
            backspace_policy: BackspacePolicy::default(),
        }
    }

    pub fn with_backspace_policy(mut self, policy: BackspacePolicy) -> Self {
        self.backspace_policy = policy;
        self
    }

    pub fn from_config(scenes: impl Into<Arc<[SceneRecord]>>, config: &Config) -> Self {
        Self::new(scenes).with_backspace_policy(config.backspace_on_empty)
    }

    // ============================================
    // READ-ONLY VIEWS
    // ============================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Current results, in outline order
    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &SceneRecord> + '_ {
        self.filtered.iter().map(move |&idx| &self.all_scenes[idx])
    }

    /// The scene under the cursor
    pub fn highlighted(&self) -> Option<&SceneRecord> {
        self.cursor
            .and_then(|c| self.filtered.get(c))
            .map(|&idx| &self.all_scenes[idx])
    }

    /// The accepted scene, only after confirmation
    pub fn selected(&self) -> Option<&SceneRecord> {
        self.selected.map(|idx| &self.all_scenes[idx])
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.phase {
            SessionPhase::Active => None,
            SessionPhase::Confirmed => self.selected().map(|scene| SessionOutcome::Navigate {
                location: scene.location,
            }),
            SessionPhase::Cancelled => Some(SessionOutcome::Cancel),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            phase: self.phase,
            query: &self.query,
            cursor: self.cursor,
            results: self.filtered().collect(),
        }
    }

    // ============================================
    // EVENTS
    // ============================================

    /// Apply one input event.
    ///
    /// Returns the outcome on the event that ends the session; every other
    /// call returns None, including any event after the session has ended.
    pub fn handle(&mut self, event: SessionEvent) -> Option<SessionOutcome> {
        if !self.is_active() {
            debug!(?event, phase = ?self.phase, "Ignoring event on finished session");
            return None;
        }

        match event {
            SessionEvent::TextChanged(query) => {
                self.set_query(query);
                None
            }
            SessionEvent::MoveUp => {
                self.move_cursor(-1);
                None
            }
            SessionEvent::MoveDown => {
                self.move_cursor(1);
                None
            }
            SessionEvent::Confirm => Some(self.confirm()),
            SessionEvent::Cancel => Some(self.cancel()),
            SessionEvent::BackspaceOnEmptyQuery => match self.backspace_policy {
                BackspacePolicy::Ignore => None,
                BackspacePolicy::Cancel => Some(self.cancel()),
            },
        }
    }

    /// Translate a key press into an event and apply it
    pub fn handle_key(&mut self, key: Key) -> Option<SessionOutcome> {
        let event = match key {
            Key::Escape => SessionEvent::Cancel,
            Key::Enter => SessionEvent::Confirm,
            Key::ArrowUp => SessionEvent::MoveUp,
            Key::ArrowDown => SessionEvent::MoveDown,
            Key::Backspace if self.query.is_empty() => SessionEvent::BackspaceOnEmptyQuery,
            Key::Backspace | Key::Other => return None,
        };
        self.handle(event)
    }

    fn set_query(&mut self, query: String) {
        self.filtered = filter_indices(&self.all_scenes, &query);
        self.cursor = if self.filtered.is_empty() { None } else { Some(0) };
        debug!(
            query = %query,
            result_count = self.filtered.len(),
            "Filtered outline"
        );
        self.query = query;
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let current = self.cursor.unwrap_or(0).min(len - 1);
        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        self.cursor = Some(next);
    }

    fn confirm(&mut self) -> SessionOutcome {
        let highlighted = self.cursor.and_then(|c| self.filtered.get(c).copied());
        let Some(scene_idx) = highlighted else {
            debug!("Confirm with nothing highlighted");
            return self.cancel();
        };

        self.selected = Some(scene_idx);
        self.phase = SessionPhase::Confirmed;

        let scene = &self.all_scenes[scene_idx];
        info!(
            scene = %scene.display_text,
            scene_number = scene.scene_number_or_empty(),
            position = scene.location.position(),
            "Scene search confirmed"
        );
        SessionOutcome::Navigate {
            location: scene.location,
        }
    }

    fn cancel(&mut self) -> SessionOutcome {
        self.phase = SessionPhase::Cancelled;
        info!(query = %self.query, "Scene search cancelled");
        SessionOutcome::Cancel
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
