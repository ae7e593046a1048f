//! TagSpan: half-open byte ranges over scanned text
//!
//! A span covers one tag from its trigger character up to (exclusive) the
//! first character that is not part of the tag body. Offsets are byte
//! offsets into the scanned text and always lie on char boundaries.

use serde::{Deserialize, Serialize};

/// Characters that may begin a tag. Process-wide constant.
pub const TRIGGER_CHARS: [char; 2] = ['#', '@'];

/// True if `c` may start a tag.
pub fn is_trigger(c: char) -> bool {
    TRIGGER_CHARS.contains(&c)
}

/// A single tag occurrence: `[start, end)` into the text it was scanned from.
///
/// `start` is the trigger character's offset. `end` is the offset of the
/// first character past the tag body, or the text length. A tag whose body
/// stops immediately (e.g. `"# foo"`) still gets a span covering just the
/// trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSpan {
    pub start: usize,
    pub end: usize,
    pub trigger: char,
}

impl TagSpan {
    pub fn new(start: usize, end: usize, trigger: char) -> Self {
        TagSpan {
            start,
            end,
            trigger,
        }
    }

    /// Byte length of the span, trigger included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Offset of the first body character (skips the trigger).
    pub fn body_start(&self) -> usize {
        self.start + self.trigger.len_utf8()
    }

    /// True when the span consists of the trigger alone.
    pub fn has_empty_body(&self) -> bool {
        self.body_start() >= self.end
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_set() {
        assert!(is_trigger('#'));
        assert!(is_trigger('@'));
        assert!(!is_trigger('$'));
        assert!(!is_trigger('a'));
    }

    #[test]
    fn test_span_accessors() {
        let span = TagSpan::new(6, 14, '#');
        assert_eq!(span.len(), 8);
        assert_eq!(span.body_start(), 7);
        assert!(!span.has_empty_body());
    }

    #[test]
    fn test_trigger_only_span() {
        // "# foo" produces a span covering just the '#'
        let span = TagSpan::new(0, 1, '#');
        assert_eq!(span.len(), 1);
        assert!(span.has_empty_body());
    }
}
