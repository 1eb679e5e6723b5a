//! Submission-in-progress indicator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raised while a form's request is outstanding. Clones observe the same
/// flag, so a presentation layer can hold one to disable inputs.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    active: Arc<AtomicBool>,
}

impl InFlight {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Raise the flag until the returned guard is dropped.
    pub(crate) fn raise(&self) -> InFlightGuard {
        self.active.store(true, Ordering::Release);
        InFlightGuard {
            active: self.active.clone(),
        }
    }
}

/// Lowers the flag when dropped, whichever way the request ended.
#[derive(Debug)]
pub(crate) struct InFlightGuard {
    active: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}
