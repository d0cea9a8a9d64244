//! Pending OTP verification tracking.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory map from phone number to the provider's verification id.
///
/// One pending session per phone number: a new send replaces any prior
/// session for that number. Entries never expire and are not persisted;
/// a restart drops every pending verification.
#[derive(Clone, Default)]
pub struct SessionTracker {
    sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pending verification, replacing any existing session for
    /// the number. Returns the verification id that was replaced, if any.
    pub async fn begin(&self, phone: String, verification_id: String) -> Option<String> {
        let mut sessions = self.sessions.write().await;
        let previous = sessions.insert(phone, verification_id);
        if previous.is_some() {
            debug!("Replaced pending verification session");
        }
        previous
    }

    /// The pending verification id for a number, if one exists.
    pub async fn verification_id(&self, phone: &str) -> Option<String> {
        self.sessions.read().await.get(phone).cloned()
    }

    /// Consume the session for a number after a successful verification.
    pub async fn complete(&self, phone: &str) -> Option<String> {
        self.sessions.write().await.remove(phone)
    }

    /// Number of pending sessions.
    pub async fn pending_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_begin_and_lookup() {
        let tracker = SessionTracker::new();
        assert!(tracker.verification_id("+919876543210").await.is_none());

        tracker.begin("+919876543210".into(), "V1".into()).await;
        assert_eq!(
            tracker.verification_id("+919876543210").await.as_deref(),
            Some("V1")
        );
        assert_eq!(tracker.pending_count().await, 1);
    }

    #[tokio::test]
    async fn test_resend_overwrites_session() {
        let tracker = SessionTracker::new();

        assert!(tracker
            .begin("+919876543210".into(), "V1".into())
            .await
            .is_none());
        let replaced = tracker.begin("+919876543210".into(), "V2".into()).await;

        assert_eq!(replaced.as_deref(), Some("V1"));
        assert_eq!(
            tracker.verification_id("+919876543210").await.as_deref(),
            Some("V2")
        );
        assert_eq!(tracker.pending_count().await, 1);
    }

    #[tokio::test]
    async fn test_complete_is_single_use() {
        let tracker = SessionTracker::new();
        tracker.begin("+919876543210".into(), "V1".into()).await;

        assert_eq!(tracker.complete("+919876543210").await.as_deref(), Some("V1"));
        assert!(tracker.verification_id("+919876543210").await.is_none());
        assert!(tracker.complete("+919876543210").await.is_none());
    }
}
