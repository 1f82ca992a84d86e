// Copyright 2026 The screenwake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Bounded diagnostic log of wake lock state changes.

/// How many events are kept before the oldest are evicted.
pub const MAX_EVENTS: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventKind {
    Info,
    Error,
    Success,
}

impl EventKind {
    /// Returns the CSS class used when rendering an event of this kind.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// A single state change. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct LockEvent {
    pub id: String,
    pub message: String,
    pub timestamp_ms: f64,
    pub kind: EventKind,
}

/// Recent events, newest first, never more than [`MAX_EVENTS`] of them.
///
/// Event ids are assigned here from a monotonic counter, so they stay unique even after
/// older entries have been evicted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    entries: Vec<LockEvent>,
    next_id: u64,
}

impl EventLog {
    /// Prepends a new event, evicting the oldest entry once the bound is exceeded.
    pub fn push(&mut self, kind: EventKind, message: &str, timestamp_ms: f64) {
        let event = LockEvent {
            id: format!("event-{}", self.next_id),
            message: message.to_string(),
            timestamp_ms,
            kind,
        };
        self.next_id += 1;
        self.entries.insert(0, event);
        self.entries.truncate(MAX_EVENTS);
    }

    /// Returns the logged events, newest first.
    pub fn entries(&self) -> &[LockEvent] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
