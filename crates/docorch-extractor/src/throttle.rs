//! Pacing of model calls

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Something that can pause the current thread
pub trait Sleeper: Send + Sync {
    /// Pause for `duration`
    fn sleep(&self, duration: Duration);
}

/// Sleeps on the real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested pauses without sleeping
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the client.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pause requested so far, in order
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sum of all requested pauses
    pub fn total(&self) -> Duration {
        self.pauses().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.pauses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
    }
}

/// Fixed pauses after each model call and before each retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    /// Pause after every model call
    pub inter_call_delay: Duration,
    /// Pause between a failed attempt and the next one
    pub retry_delay: Duration,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            inter_call_delay: Duration::from_millis(150),
            retry_delay: Duration::from_millis(200),
        }
    }
}

impl ThrottlePolicy {
    /// No pauses at all
    pub fn none() -> Self {
        Self {
            inter_call_delay: Duration::ZERO,
            retry_delay: Duration::ZERO,
        }
    }

    /// Pause after a model call
    pub fn after_call(&self, sleeper: &dyn Sleeper) {
        sleeper.sleep(self.inter_call_delay);
    }

    /// Pause before starting another attempt
    pub fn before_retry(&self, sleeper: &dyn Sleeper) {
        sleeper.sleep(self.retry_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sleeper_shares_log() {
        let recorder = RecordingSleeper::new();
        let handle = recorder.clone();
        let policy = ThrottlePolicy::default();

        policy.after_call(&recorder);
        policy.before_retry(&recorder);

        assert_eq!(
            handle.pauses(),
            vec![Duration::from_millis(150), Duration::from_millis(200)]
        );
        assert_eq!(handle.total(), Duration::from_millis(350));
    }

    #[test]
    fn test_none_policy_records_zero_pauses() {
        let recorder = RecordingSleeper::new();
        ThrottlePolicy::none().after_call(&recorder);
        assert_eq!(recorder.total(), Duration::ZERO);
    }

    #[test]
    fn test_thread_sleeper_skips_zero() {
        ThreadSleeper.sleep(Duration::ZERO);
    }
}
