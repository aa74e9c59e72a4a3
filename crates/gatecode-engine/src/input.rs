//! Fixed-capacity access-code input accumulator.
//!
//! Accumulates keystrokes into an ordered buffer of alphanumeric
//! characters. Insertion and deletion only ever touch the contiguous fill
//! boundary, so the buffer can never contain gaps. Every mutation reports
//! the resulting buffer state synchronously through the returned
//! [`InputEvent`]; the accumulator itself never performs I/O and never
//! triggers submission.

use gatecode_core::{InputEvent, CODE_LENGTH};

/// Ordered buffer of at most `capacity` alphanumeric characters.
#[derive(Debug, Clone)]
pub struct CodeBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new(CODE_LENGTH)
    }
}

impl CodeBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when every slot is filled. Completion by itself never submits;
    /// an explicit external trigger does.
    pub fn is_complete(&self) -> bool {
        self.chars.len() == self.capacity
    }

    /// The filled slots in insertion order.
    pub fn current(&self) -> String {
        self.chars.iter().collect()
    }

    /// Handle an insertion, which may carry more than one character
    /// (e.g. a paste).
    ///
    /// - A newline on a full buffer yields [`InputEvent::DismissInput`].
    /// - Any other insertion on a full buffer is a no-op.
    /// - If any character is non-alphanumeric the whole insertion is
    ///   rejected without mutating the buffer.
    /// - Otherwise characters append at the fill boundary, up to capacity,
    ///   and the new state is reported via [`InputEvent::Changed`].
    pub fn insert(&mut self, text: &str) -> Option<InputEvent> {
        if self.is_complete() {
            if text == "\n" {
                tracing::debug!("submit key on full buffer, dismissing input");
                return Some(InputEvent::DismissInput);
            }
            return None;
        }

        if text.is_empty() {
            return None;
        }

        // Reject as a unit: no partial acceptance of mixed input.
        if !text.chars().all(|c| c.is_alphanumeric()) {
            tracing::warn!("rejected non-alphanumeric input");
            return Some(InputEvent::NonAlphanumericRejected);
        }

        let room = self.capacity - self.chars.len();
        self.chars.extend(text.chars().take(room));

        Some(self.changed())
    }

    /// Remove the most recently filled slot. No-op (and no event) when the
    /// buffer is empty.
    pub fn delete_last(&mut self) -> Option<InputEvent> {
        self.chars.pop()?;
        Some(self.changed())
    }

    /// Empty the buffer for a fresh attempt.
    pub fn reset(&mut self) {
        self.chars.clear();
    }

    fn changed(&self) -> InputEvent {
        let text = self.current();
        let complete = self.is_complete();
        tracing::debug!(len = text.len(), complete, "code buffer changed");
        InputEvent::Changed { text, complete }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let buf = CodeBuffer::default();
        assert!(buf.is_empty());
        assert!(!buf.is_complete());
        assert_eq!(buf.current(), "");
        assert_eq!(buf.capacity(), 6);
    }

    #[test]
    fn sequential_inserts_preserve_order() {
        let mut buf = CodeBuffer::default();
        for ch in ["A", "b", "1", "Z", "9", "x"] {
            buf.insert(ch);
        }
        assert_eq!(buf.current(), "Ab1Z9x");
        assert!(buf.is_complete());
    }

    #[test]
    fn changed_event_carries_text_and_completeness() {
        let mut buf = CodeBuffer::new(2);
        assert_eq!(
            buf.insert("A"),
            Some(InputEvent::Changed {
                text: "A".into(),
                complete: false,
            })
        );
        assert_eq!(
            buf.insert("B"),
            Some(InputEvent::Changed {
                text: "AB".into(),
                complete: true,
            })
        );
    }

    #[test]
    fn non_alphanumeric_rejected_without_mutation() {
        let mut buf = CodeBuffer::default();
        buf.insert("A");
        let event = buf.insert("!");
        assert_eq!(event, Some(InputEvent::NonAlphanumericRejected));
        assert_eq!(buf.current(), "A");
    }

    #[test]
    fn mixed_insertion_rejected_as_a_unit() {
        let mut buf = CodeBuffer::default();
        let event = buf.insert("AB!CD");
        assert_eq!(event, Some(InputEvent::NonAlphanumericRejected));
        assert!(buf.is_empty());
    }

    #[test]
    fn multi_character_insert_fills_in_order() {
        let mut buf = CodeBuffer::default();
        let event = buf.insert("ABC");
        assert_eq!(
            event,
            Some(InputEvent::Changed {
                text: "ABC".into(),
                complete: false,
            })
        );
        buf.insert("123");
        assert_eq!(buf.current(), "ABC123");
    }

    #[test]
    fn insert_beyond_capacity_is_truncated() {
        let mut buf = CodeBuffer::new(4);
        buf.insert("ABCDEFG");
        assert_eq!(buf.current(), "ABCD");
        assert!(buf.is_complete());
    }

    #[test]
    fn insert_on_full_buffer_is_noop() {
        let mut buf = CodeBuffer::new(2);
        buf.insert("AB");
        assert_eq!(buf.insert("C"), None);
        assert_eq!(buf.current(), "AB");
    }

    #[test]
    fn newline_on_full_buffer_dismisses_input() {
        let mut buf = CodeBuffer::new(2);
        buf.insert("AB");
        assert_eq!(buf.insert("\n"), Some(InputEvent::DismissInput));
        assert_eq!(buf.current(), "AB");
    }

    #[test]
    fn newline_on_partial_buffer_is_plain_rejection() {
        let mut buf = CodeBuffer::default();
        buf.insert("A");
        assert_eq!(buf.insert("\n"), Some(InputEvent::NonAlphanumericRejected));
        assert_eq!(buf.current(), "A");
    }

    #[test]
    fn delete_removes_most_recent_slot() {
        let mut buf = CodeBuffer::default();
        buf.insert("AB");
        let event = buf.delete_last();
        assert_eq!(
            event,
            Some(InputEvent::Changed {
                text: "A".into(),
                complete: false,
            })
        );
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let mut buf = CodeBuffer::default();
        assert_eq!(buf.delete_last(), None);
        assert_eq!(buf.current(), "");
    }

    #[test]
    fn insert_then_delete_round_trip() {
        let mut buf = CodeBuffer::default();
        for ch in ["A", "B", "C", "1", "2", "3"] {
            buf.insert(ch);
        }
        for _ in 0..6 {
            buf.delete_last();
        }
        assert!(buf.is_empty());
        assert_eq!(buf.current(), "");
    }

    #[test]
    fn reset_empties_a_full_buffer() {
        let mut buf = CodeBuffer::new(2);
        buf.insert("AB");
        buf.reset();
        assert!(buf.is_empty());
        assert!(!buf.is_complete());
    }

    #[test]
    fn empty_insert_produces_no_event() {
        let mut buf = CodeBuffer::default();
        assert_eq!(buf.insert(""), None);
    }
}
