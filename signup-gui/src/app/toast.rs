use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub use signup_ui::component::toast::Kind;

/// Older toasts are dropped past this count.
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: Kind,
    pub title: String,
    pub description: String,
    created_at: Instant,
}

/// Transient notifications shown over the current screen.
#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    next_id: u64,
    timeout: Duration,
}

impl Toasts {
    pub fn new(timeout: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 0,
            timeout,
        }
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.push_at(Kind::Success, title, description, Instant::now())
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.push_at(Kind::Error, title, description, Instant::now())
    }

    fn push_at(
        &mut self,
        kind: Kind,
        title: impl Into<String>,
        description: impl Into<String>,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.items.push_back(Toast {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            created_at: now,
        });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Drops every toast older than the timeout.
    pub fn expire(&mut self, now: Instant) {
        let timeout = self.timeout;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created_at) < timeout);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut toasts = Toasts::new(Duration::from_secs(5));
        let first = toasts.success("Registration successful", "Done");
        let second = toasts.error("Registration failed", "Nope");
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.last().unwrap().kind, Kind::Error);

        toasts.dismiss(first);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.last().unwrap().id, second);

        // Unknown ids are ignored.
        toasts.dismiss(first);
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn expire_after_timeout() {
        let mut toasts = Toasts::new(Duration::from_secs(5));
        let start = Instant::now();
        toasts.push_at(Kind::Success, "old", "", start);
        toasts.push_at(Kind::Error, "new", "", start + Duration::from_secs(3));

        toasts.expire(start + Duration::from_secs(4));
        assert_eq!(toasts.len(), 2);

        toasts.expire(start + Duration::from_secs(5));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.last().unwrap().title, "new");

        toasts.expire(start + Duration::from_secs(8));
        assert!(toasts.is_empty());
    }

    #[test]
    fn keeps_the_most_recent() {
        let mut toasts = Toasts::new(Duration::from_secs(5));
        for i in 0..(MAX_TOASTS + 2) {
            toasts.error(format!("toast {}", i), "");
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.iter().next().unwrap().title, "toast 2");
    }
}
