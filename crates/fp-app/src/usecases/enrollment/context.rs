use std::sync::Arc;

use fp_core::enrollment::EnrollmentState;
use tokio::sync::Mutex;

/// Shared enrollment context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: Held for a whole dispatch so events are processed one at a time.
/// - `state`: Used for both reading (`get_state`) and writing (during `dispatch`).
#[derive(Clone)]
pub struct EnrollmentContext {
    state: Arc<Mutex<EnrollmentState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl EnrollmentContext {
    pub fn new(initial_state: EnrollmentState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> EnrollmentState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: EnrollmentState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}
