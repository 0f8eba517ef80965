//! Latest-request-wins gate for superseding async calls.
//!
//! Each logical operation (e.g. "generate ideas") owns a gate. Issuing a new
//! request hands out a fresh token; when a response comes back it is only
//! applied if its token is still the latest one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Token handed out by [`RequestGate::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    latest: Arc<AtomicU64>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier token.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response carrying `token` should still be applied.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let gate = RequestGate::new();
        let first = gate.issue();
        assert!(gate.is_current(first));

        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_clones_share_sequence() {
        let gate = RequestGate::new();
        let other = gate.clone();
        let token = gate.issue();
        let _newer = other.issue();
        assert!(!gate.is_current(token));
    }
}
