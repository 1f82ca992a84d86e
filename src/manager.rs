// Copyright 2026 The screenwake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Owns the screen wake lock: user intent, the granted sentinel, and the event log.

use crate::{
    events::{EventKind, EventLog},
    platform::{LockSentinel, WakeLockProvider},
};
use leptos::{ev::visibilitychange, prelude::*, task::spawn_local};
use leptos_use::use_event_listener;
use web_sys::{VisibilityState, js_sys::Date};

/// Single source of truth for the wake lock state.
///
/// All fields live in the reactive arena, so the manager itself is a small `Copy` handle
/// that closures can capture freely.
pub struct WakeLockManager<P: WakeLockProvider> {
    provider: StoredValue<P, LocalStorage>,
    sentinel: RwSignal<Option<P::Sentinel>, LocalStorage>,
    wants_lock: RwSignal<bool>,
    busy: RwSignal<bool>,
    events: RwSignal<EventLog>,
}

impl<P: WakeLockProvider> Clone for WakeLockManager<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: WakeLockProvider> Copy for WakeLockManager<P> {}

impl<P: WakeLockProvider> WakeLockManager<P> {
    /// Creates the manager and hooks it up to page visibility changes.
    ///
    /// Must be called inside a reactive owner; the visibility listener is unregistered
    /// and any held lock released when that owner is disposed.
    pub fn new(provider: P) -> Self {
        let manager = Self {
            provider: StoredValue::new_local(provider),
            sentinel: RwSignal::new_local(None),
            wants_lock: RwSignal::new(false),
            busy: RwSignal::new(false),
            events: RwSignal::new(EventLog::default()),
        };

        _ = use_event_listener(document(), visibilitychange, move |_| {
            let visible = document().visibility_state() == VisibilityState::Visible;
            spawn_local(async move { manager.visibility_changed(visible).await });
        });

        on_cleanup(move || manager.abandon());

        manager
    }

    /// Whether a wake lock is currently granted and not yet released.
    pub fn is_active(&self) -> bool {
        self.sentinel
            .read()
            .as_ref()
            .is_some_and(|sentinel| !sentinel.released())
    }

    /// Whether the user currently wants the lock held, regardless of whether it is.
    pub fn is_enabled(&self) -> bool {
        self.wants_lock.get()
    }

    /// Whether a toggle is still settling.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Recent state changes, newest first.
    pub fn events(&self) -> ReadSignal<EventLog> {
        self.events.read_only()
    }

    /// Flips user intent and brings the lock in line with it. No-op while a previous
    /// toggle is still settling.
    pub async fn toggle(&self) {
        if self.busy.get_untracked() {
            return;
        }
        self.busy.set(true);
        let wants_lock = !self.wants_lock.get_untracked();
        self.wants_lock.set(wants_lock);
        if wants_lock {
            self.request_lock().await;
        } else {
            self.release_lock().await;
        }
        self.busy.set(false);
    }

    /// Acquires a screen wake lock if supported and not already held.
    ///
    /// Failures are absorbed here: they are logged as error events and the manager stays
    /// in the "lock not held" state.
    pub async fn request_lock(&self) {
        let provider = self.provider.get_value();
        if !provider.is_supported() || self.sentinel.with_untracked(Option::is_some) {
            return;
        }

        let wanted = self.wants_lock.get_untracked();
        match provider.request().await {
            Ok(sentinel) => {
                if wanted && !self.wants_lock.get_untracked() {
                    // The user toggled off while the request was in flight.
                    _ = sentinel.release().await;
                    return;
                }
                let manager = *self;
                sentinel.on_release(move || manager.platform_released());
                self.sentinel.set(Some(sentinel));
                self.log_event(
                    EventKind::Success,
                    "Wake lock activated - screen will stay awake",
                );
            }
            Err(error) => self.log_event(EventKind::Error, &error.to_string()),
        }
    }

    /// Releases the held wake lock, if any.
    ///
    /// The handle is cleared even if the platform rejects the release; calling this with
    /// no lock held does nothing and logs nothing.
    pub async fn release_lock(&self) {
        let Some(sentinel) = self.sentinel.try_update(|sentinel| sentinel.take()).flatten()
        else {
            return;
        };
        match sentinel.release().await {
            Ok(()) => self.log_event(EventKind::Info, "Wake lock manually released"),
            Err(error) => self.log_event(EventKind::Error, &error.to_string()),
        }
    }

    /// Releases on hide, re-acquires on show if the user still wants the lock.
    pub async fn visibility_changed(&self, visible: bool) {
        if visible {
            if self.wants_lock.get_untracked() {
                self.request_lock().await;
            }
        } else {
            self.release_lock().await;
        }
    }

    /// The platform revoked the lock (screen off, tab hidden, battery saver).
    ///
    /// Also fired after a manual release, in which case the sentinel slot is already
    /// empty and there is nothing left to do.
    fn platform_released(&self) {
        if self
            .sentinel
            .try_update(|sentinel| sentinel.take())
            .flatten()
            .is_none()
        {
            return;
        }
        self.log_event(EventKind::Error, "Wake lock released - screen may turn off");
    }

    /// Best-effort teardown release; the page is going away regardless.
    fn abandon(self) {
        let Some(sentinel) = self
            .sentinel
            .try_update_untracked(|sentinel| sentinel.take())
            .flatten()
        else {
            return;
        };
        if !sentinel.released() {
            spawn_local(async move {
                _ = sentinel.release().await;
            });
        }
    }

    fn log_event(&self, kind: EventKind, message: &str) {
        match kind {
            EventKind::Error => gloo_console::error!(message.to_string()),
            _ => gloo_console::log!(message.to_string()),
        }
        self.events
            .update(|events| events.push(kind, message, Date::now()));
    }
}
