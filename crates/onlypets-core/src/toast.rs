//! # Toast Queue
//!
//! Active toast notifications in the order they were raised.
//!
//! Ids come from a per-queue counter rather than the wall clock, so two
//! toasts raised in the same millisecond still get distinct ids. Identical
//! messages are not deduplicated.
//!
//! Toasts stay until removed. [`ToastQueue::expire`] drops toasts older than
//! a TTL for callers that opt into auto-dismiss.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Toast, ToastId, ToastKind};

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its id.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        now: DateTime<Utc>,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            created_at: now,
        });
        id
    }

    /// Removes the toast with `id`. Returns whether it was present.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let initial_len = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != initial_len
    }

    /// Removes every toast created at or before `now - ttl`.
    ///
    /// Returns the number of toasts removed.
    pub fn expire(&mut self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let Some(cutoff) = now.checked_sub_signed(ttl) else {
            return 0;
        };
        let initial_len = self.toasts.len();
        self.toasts.retain(|t| t.created_at > cutoff);
        initial_len - self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_remove_leaves_empty() {
        let mut queue = ToastQueue::new();
        let id = queue.push("x", ToastKind::Success, Utc::now());

        assert!(queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_unique_within_same_instant() {
        let mut queue = ToastQueue::new();
        let now = Utc::now();
        let a = queue.push("same", ToastKind::Info, now);
        let b = queue.push("same", ToastKind::Info, now);

        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut queue = ToastQueue::new();
        queue.push("kept", ToastKind::Error, Utc::now());

        assert!(!queue.remove(ToastId(999)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_expire_drops_only_old_toasts() {
        let mut queue = ToastQueue::new();
        let start = Utc::now();
        queue.push("old", ToastKind::Info, start);
        let fresh = queue.push("fresh", ToastKind::Info, start + Duration::seconds(4));

        let removed = queue.expire(start + Duration::seconds(5), Duration::seconds(5));

        assert_eq!(removed, 1);
        assert_eq!(queue.toasts()[0].id, fresh);
    }

    #[test]
    fn test_expire_with_out_of_range_ttl_keeps_everything() {
        let mut queue = ToastQueue::new();
        let now = Utc::now();
        queue.push("stays", ToastKind::Info, now);

        assert_eq!(queue.expire(now, Duration::MAX), 0);
        assert_eq!(queue.len(), 1);
    }
}
