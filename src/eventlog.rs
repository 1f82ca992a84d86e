// Copyright 2026 The screenwake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{helpers::format_timestamp, manager::WakeLockManager, platform::WakeLockProvider};
use leptos::prelude::*;
use leptos_use::{UseIntervalReturn, use_interval};
use web_sys::js_sys::Date;

/// Recent wake lock state changes, newest first.
#[component]
pub fn EventLog<P: WakeLockProvider>(manager: WakeLockManager<P>) -> impl IntoView {
    // Tick every half minute so the relative ages stay current.
    let UseIntervalReturn { counter, .. } = use_interval(30_000u64);

    view! {
        <ul class="event-log">
            {move || {
                counter.track();
                manager.events().read().entries().iter().map(|event| view! {
                    <li class=event.kind.css_class()>
                        <span class="event-time">
                            {format_timestamp(event.timestamp_ms, Date::now())}
                        </span>
                        {event.message.clone()}
                    </li>
                }).collect::<Vec<_>>()
            }}
        </ul>
    }
}
