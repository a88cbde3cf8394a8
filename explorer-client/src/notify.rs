use std::time::{Duration, Instant};

const VISIBLE_FOR: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    posted_at: Instant,
}

/// Transient, auto-expiring notices. Posting never blocks anything; expired
/// entries are dropped whenever the set is pruned.
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn post(&mut self, message: impl Into<String>, kind: NoticeKind) -> &Notice {
        self.items.push(Notice {
            message: message.into(),
            kind,
            posted_at: Instant::now(),
        });
        self.items.last().unwrap()
    }

    pub fn prune(&mut self, now: Instant) {
        self.items
            .retain(|n| now.duration_since(n.posted_at) < VISIBLE_FOR);
    }

    pub fn visible(&self) -> &[Notice] {
        &self.items
    }

    /// Hands the pending notices to the renderer, emptying the set.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire_after_three_seconds() {
        let mut notices = Notices::default();
        notices.post("Found 3 books", NoticeKind::Success);

        let later = Instant::now() + Duration::from_secs(4);
        notices.prune(later);
        assert!(notices.visible().is_empty());
    }

    #[test]
    fn fresh_notices_survive_a_prune() {
        let mut notices = Notices::default();
        notices.post("No books found", NoticeKind::Error);

        notices.prune(Instant::now());
        assert_eq!(notices.visible().len(), 1);
        assert_eq!(notices.visible()[0].kind, NoticeKind::Error);
    }
}
