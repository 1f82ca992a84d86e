// Copyright 2026 The screenwake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{manager::WakeLockManager, platform::WakeLockProvider};
use leptos::{prelude::*, task::spawn_local};

/// Button which switches the screen wake lock on and off.
///
/// Disabled while a toggle is settling, so two clicks can never race on the same handle.
#[component]
pub fn WakeLockToggle<P: WakeLockProvider>(manager: WakeLockManager<P>) -> impl IntoView {
    view! {
        <button
            class="wake-lock-toggle"
            class:active=move || manager.is_active()
            aria-pressed=move || manager.is_enabled().to_string()
            disabled=move || manager.is_busy()
            on:click=move |_| spawn_local(async move { manager.toggle().await })
        >
            {move || if manager.is_enabled() {
                "Let the screen sleep"
            } else {
                "Keep the screen awake"
            }}
        </button>
    }
}
