// Copyright 2026 The screenwake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! The wake lock capability, injected so the manager can be driven by a fake in tests.

use leptos::prelude::window;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{WakeLockSentinel, WakeLockType, js_sys::Reflect};

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum WakeLockError {
    #[error("Wake lock request failed: {0}")]
    Acquire(String),
    #[error("Wake lock release failed: {0}")]
    Release(String),
}

/// A platform's screen wake lock capability.
pub trait WakeLockProvider: Clone + 'static {
    type Sentinel: LockSentinel;

    /// Returns whether screen wake locks are available at all.
    fn is_supported(&self) -> bool;

    /// Requests a new screen wake lock.
    fn request(&self) -> impl Future<Output = Result<Self::Sentinel, WakeLockError>>;
}

/// A granted wake lock, valid until released by either side.
pub trait LockSentinel: Clone + 'static {
    /// Whether the platform considers this lock released.
    fn released(&self) -> bool;

    /// Releases the lock.
    fn release(self) -> impl Future<Output = Result<(), WakeLockError>>;

    /// Registers the callback the platform invokes when the lock is released, whether by
    /// [`release`](Self::release) or by the platform itself.
    fn on_release(&self, callback: impl FnMut() + 'static);
}

/// `navigator.wakeLock`, the real capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorWakeLock;

impl WakeLockProvider for NavigatorWakeLock {
    type Sentinel = WakeLockSentinel;

    fn is_supported(&self) -> bool {
        Reflect::has(window().navigator().as_ref(), &JsValue::from_str("wakeLock"))
            .unwrap_or(false)
    }

    async fn request(&self) -> Result<WakeLockSentinel, WakeLockError> {
        Ok(JsFuture::from(
            window()
                .navigator()
                .wake_lock()
                .request(WakeLockType::Screen),
        )
        .await
        .map_err(|e| WakeLockError::Acquire(format!("{e:?}")))?
        .unchecked_into::<WakeLockSentinel>())
    }
}

impl LockSentinel for WakeLockSentinel {
    fn released(&self) -> bool {
        WakeLockSentinel::released(self)
    }

    async fn release(self) -> Result<(), WakeLockError> {
        JsFuture::from(WakeLockSentinel::release(&self))
            .await
            .map_err(|e| WakeLockError::Release(format!("{e:?}")))?;
        Ok(())
    }

    fn on_release(&self, callback: impl FnMut() + 'static) {
        self.set_onrelease(Some(
            Closure::<dyn FnMut()>::new(callback)
                .into_js_value()
                .unchecked_ref(),
        ));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
pub mod fake {
    //! In-memory stand-in for `navigator.wakeLock`.

    use super::{LockSentinel, WakeLockError, WakeLockProvider};
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    pub struct FakeWakeLock {
        inner: Rc<RefCell<FakeInner>>,
    }

    #[derive(Default)]
    struct FakeInner {
        unsupported: bool,
        fail_request: bool,
        fail_release: bool,
        requests: u32,
        releases: u32,
        granted: Option<FakeSentinel>,
    }

    impl FakeWakeLock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn unsupported() -> Self {
            let fake = Self::default();
            fake.inner.borrow_mut().unsupported = true;
            fake
        }

        pub fn failing_requests() -> Self {
            let fake = Self::default();
            fake.inner.borrow_mut().fail_request = true;
            fake
        }

        pub fn failing_releases() -> Self {
            let fake = Self::default();
            fake.inner.borrow_mut().fail_release = true;
            fake
        }

        /// How many times a lock has been requested.
        pub fn requests(&self) -> u32 {
            self.inner.borrow().requests
        }

        /// How many times a sentinel release has been attempted.
        pub fn releases(&self) -> u32 {
            self.inner.borrow().releases
        }

        /// Simulates the platform revoking the granted lock, e.g. the OS turning the
        /// screen off.
        pub fn revoke(&self) {
            let granted = self.inner.borrow_mut().granted.take();
            if let Some(sentinel) = granted {
                sentinel.force_release();
            }
        }
    }

    impl WakeLockProvider for FakeWakeLock {
        type Sentinel = FakeSentinel;

        fn is_supported(&self) -> bool {
            !self.inner.borrow().unsupported
        }

        async fn request(&self) -> Result<FakeSentinel, WakeLockError> {
            {
                let mut inner = self.inner.borrow_mut();
                inner.requests += 1;
                if inner.fail_request {
                    return Err(WakeLockError::Acquire("denied".to_string()));
                }
            }
            let sentinel = FakeSentinel {
                lock: self.clone(),
                state: Rc::new(RefCell::new(SentinelState::default())),
            };
            self.inner.borrow_mut().granted = Some(sentinel.clone());
            Ok(sentinel)
        }
    }

    #[derive(Clone)]
    pub struct FakeSentinel {
        lock: FakeWakeLock,
        state: Rc<RefCell<SentinelState>>,
    }

    #[derive(Default)]
    struct SentinelState {
        released: bool,
        on_release: Option<Box<dyn FnMut()>>,
    }

    impl FakeSentinel {
        fn force_release(&self) {
            let callback = {
                let mut state = self.state.borrow_mut();
                state.released = true;
                state.on_release.take()
            };
            if let Some(mut callback) = callback {
                callback();
            }
        }
    }

    impl LockSentinel for FakeSentinel {
        fn released(&self) -> bool {
            self.state.borrow().released
        }

        async fn release(self) -> Result<(), WakeLockError> {
            {
                let mut inner = self.lock.inner.borrow_mut();
                inner.releases += 1;
                if inner.fail_release {
                    return Err(WakeLockError::Release("rejected".to_string()));
                }
            }
            // The real platform fires the release notification for manual releases too.
            self.force_release();
            Ok(())
        }

        fn on_release(&self, callback: impl FnMut() + 'static) {
            self.state.borrow_mut().on_release = Some(Box::new(callback));
        }
    }
}
