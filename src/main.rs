// Copyright 2026 The screenwake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

mod eventlog;
mod events;
mod helpers;
mod manager;
mod platform;
mod toggle;

use crate::{
    eventlog::EventLog, manager::WakeLockManager, platform::NavigatorWakeLock,
    toggle::WakeLockToggle,
};
use leptos::prelude::*;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let manager = WakeLockManager::new(NavigatorWakeLock);

    view! {
        <h1>"Screenwake"</h1>
        <p>"Keep this device's display awake while you are using the page."</p>
        <WakeLockToggle manager/>
        <EventLog manager/>
    }
}
