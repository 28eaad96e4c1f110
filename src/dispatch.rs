use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};

/// Result of a dispatch attempt.
#[derive(Debug)]
pub enum DispatchOutcome<T> {
    /// The workload ran to completion.
    Completed(T),
    /// Another dispatch was already in flight; this one was dropped, not queued.
    Dropped,
    /// The workload failed; the handling flag was still released.
    Failed(anyhow::Error),
}

impl<T> DispatchOutcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            DispatchOutcome::Completed(value) => Some(value),
            _ => None,
        }
    }
}

/// Non-blocking, non-queuing mutual-exclusion gate around classification.
/// At most one workload is in flight; overlapping attempts are dropped
/// silently. The flag is released on every exit path, failure included.
#[derive(Debug, Default)]
pub struct Dispatcher {
    handling: AtomicBool,
}

struct HandlingGuard<'a>(&'a AtomicBool);

impl Drop for HandlingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_handling(&self) -> bool {
        self.handling.load(Ordering::Acquire)
    }

    pub fn try_dispatch<T>(&self, work: impl FnOnce() -> Result<T>) -> DispatchOutcome<T> {
        if self
            .handling
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return DispatchOutcome::Dropped;
        }
        let _guard = HandlingGuard(&self.handling);

        match work() {
            Ok(value) => DispatchOutcome::Completed(value),
            Err(err) => DispatchOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_dispatch_runs_workload() {
        let dispatcher = Dispatcher::new();
        let outcome = dispatcher.try_dispatch(|| Ok(7));
        assert_eq!(outcome.completed(), Some(7));
        assert!(!dispatcher.is_handling());
    }

    #[test]
    fn test_reentrant_dispatch_is_dropped() {
        let dispatcher = Dispatcher::new();
        let outcome = dispatcher.try_dispatch(|| {
            // Simulated re-entry from inside the workload
            let inner = dispatcher.try_dispatch(|| Ok(99));
            assert!(matches!(inner, DispatchOutcome::Dropped));
            Ok(1)
        });
        assert_eq!(outcome.completed(), Some(1));
        assert!(!dispatcher.is_handling());
    }

    #[test]
    fn test_flag_released_on_failure() {
        let dispatcher = Dispatcher::new();
        let outcome: DispatchOutcome<()> = dispatcher.try_dispatch(|| Err(anyhow!("boom")));
        assert!(matches!(outcome, DispatchOutcome::Failed(_)));
        assert!(!dispatcher.is_handling());

        // The gate must be usable again on the very next attempt
        let retry = dispatcher.try_dispatch(|| Ok(2));
        assert_eq!(retry.completed(), Some(2));
    }
}
