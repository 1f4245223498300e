//! The feedback banner shown above the form
//!
//! Holds at most one message. Showing a new message replaces the current one,
//! and non-success messages expire after [`MESSAGE_TIMEOUT`].

use crate::constants::MESSAGE_TIMEOUT;
use crate::types::FeedbackKind;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: FeedbackKind,
    pub text: String,
    pub shown_at: Instant,
}

impl FeedbackMessage {
    /// When this message should disappear, if ever
    pub fn expires_at(&self) -> Option<Instant> {
        self.kind
            .auto_expires()
            .then(|| self.shown_at + MESSAGE_TIMEOUT)
    }
}

#[derive(Debug, Default)]
pub struct FeedbackSlot {
    current: Option<FeedbackMessage>,
    scroll_pending: bool,
}

impl FeedbackSlot {
    pub fn show(&mut self, kind: FeedbackKind, text: impl Into<String>) {
        self.show_at(kind, text, Instant::now());
    }

    pub fn show_at(&mut self, kind: FeedbackKind, text: impl Into<String>, now: Instant) {
        self.current = Some(FeedbackMessage {
            kind,
            text: text.into(),
            shown_at: now,
        });
        self.scroll_pending = true;
    }

    pub fn current(&self) -> Option<&FeedbackMessage> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.scroll_pending = false;
    }

    /// Drop the current message if its time is up. Returns true if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .and_then(FeedbackMessage::expires_at)
            .is_some_and(|deadline| now >= deadline);
        if expired {
            self.clear();
        }
        expired
    }

    /// Time left before the current message expires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .and_then(FeedbackMessage::expires_at)
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// True once after each new message, so the renderer can scroll it into view
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_message_replaces_previous() {
        let mut slot = FeedbackSlot::default();
        let now = Instant::now();
        slot.show_at(FeedbackKind::Info, "uno", now);
        slot.show_at(FeedbackKind::Error, "dos", now);

        let current = slot.current().unwrap();
        assert_eq!(current.kind, FeedbackKind::Error);
        assert_eq!(current.text, "dos");
    }

    #[test]
    fn error_expires_after_exactly_five_seconds() {
        let mut slot = FeedbackSlot::default();
        let now = Instant::now();
        slot.show_at(FeedbackKind::Error, "fallo", now);

        assert!(!slot.expire(now + Duration::from_millis(4999)));
        assert!(slot.current().is_some());
        assert!(slot.expire(now + Duration::from_millis(5000)));
        assert!(slot.current().is_none());
    }

    #[test]
    fn info_expires_too() {
        let mut slot = FeedbackSlot::default();
        let now = Instant::now();
        slot.show_at(FeedbackKind::Info, "enviando", now);
        assert_eq!(slot.remaining(now), Some(MESSAGE_TIMEOUT));
        assert!(slot.expire(now + MESSAGE_TIMEOUT));
    }

    #[test]
    fn success_never_expires() {
        let mut slot = FeedbackSlot::default();
        let now = Instant::now();
        slot.show_at(FeedbackKind::Success, "ok", now);

        assert!(!slot.expire(now + Duration::from_secs(3600)));
        assert_eq!(slot.remaining(now), None);
        assert_eq!(slot.current().unwrap().kind, FeedbackKind::Success);
    }

    #[test]
    fn replacement_restarts_the_timer() {
        let mut slot = FeedbackSlot::default();
        let start = Instant::now();
        slot.show_at(FeedbackKind::Info, "enviando", start);
        let later = start + Duration::from_millis(3000);
        slot.show_at(FeedbackKind::Error, "fallo", later);

        // The first message's deadline must not remove the second one
        assert!(!slot.expire(start + MESSAGE_TIMEOUT));
        assert!(slot.expire(later + MESSAGE_TIMEOUT));
    }

    #[test]
    fn scroll_request_is_one_shot() {
        let mut slot = FeedbackSlot::default();
        assert!(!slot.take_scroll_request());
        slot.show(FeedbackKind::Info, "hola");
        assert!(slot.take_scroll_request());
        assert!(!slot.take_scroll_request());
    }
}
