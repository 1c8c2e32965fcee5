//! Serialized access to the process-wide catcher.
//!
//! Tests in one binary run on parallel threads but share a single
//! process-wide catcher. Holding an [`IsolatedCatcher`] keeps other holders
//! out and guarantees an empty catcher on entry and on exit.

use log_catcher_app::{LogCatcher, shared};
use std::ops::Deref;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ISOLATION: Mutex<()> = Mutex::new(());

/// Exclusive handle to the process-wide catcher. Resets it when dropped.
#[derive(Debug)]
pub struct IsolatedCatcher {
    _guard: MutexGuard<'static, ()>,
}

/// Wait for exclusive use of the process-wide catcher and reset it.
///
/// A test that panicked while holding the guard does not block later tests.
pub fn isolated_catcher() -> IsolatedCatcher {
    let guard = ISOLATION.lock().unwrap_or_else(PoisonError::into_inner);
    shared::reset();
    IsolatedCatcher { _guard: guard }
}

impl Deref for IsolatedCatcher {
    type Target = LogCatcher;

    fn deref(&self) -> &Self::Target {
        shared::catcher()
    }
}

impl Drop for IsolatedCatcher {
    fn drop(&mut self) {
        shared::reset();
    }
}
