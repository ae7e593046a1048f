//! TagScanner: single-pass tag span discovery
//!
//! Finds every `#tag` / `@mention` occurrence in a text in one left-to-right
//! O(n) pass. A tag body is a run of letters, digits, or characters from the
//! scanner's extra set; the body ends at the first character outside that
//! class. The scanner is stateless between calls.
//!
//! Scanning rules:
//! - A trigger as the last character of the text never starts a tag.
//! - A trigger whose body stops immediately (`"# foo"`, `"##ab"`) still emits
//!   a span covering just the trigger.
//! - Each scan resumes exactly where the previous tag body ended, so spans
//!   are disjoint and sorted by construction.

use wasm_bindgen::prelude::*;

use crate::tagger::span::{is_trigger, TagSpan};

/// Stateless tag scanner with a configurable extra character set.
///
/// By default only letters and digits extend a tag body. Extra characters
/// widen the class: with `['_', '-', '$']`, `"#this_is-a$tag"` is one tag.
#[wasm_bindgen]
pub struct TagScanner {
    extra_chars: Vec<char>,
}

impl Default for TagScanner {
    fn default() -> Self {
        TagScanner::with_extra_chars(&[])
    }
}

#[wasm_bindgen]
impl TagScanner {
    /// Create a scanner. `extra_chars` holds additional valid tag-body
    /// characters, one per char of the string.
    #[wasm_bindgen(constructor)]
    pub fn new(extra_chars: Option<String>) -> TagScanner {
        TagScanner {
            extra_chars: extra_chars.map(|s| s.chars().collect()).unwrap_or_default(),
        }
    }

    /// Scan text for tag spans (WASM wrapper)
    ///
    /// Returns a JsValue containing an array of TagSpan objects.
    #[wasm_bindgen(js_name = scan)]
    pub fn scan_js(&self, text: &str) -> Result<JsValue, JsValue> {
        let spans = self.scan(text);
        serde_wasm_bindgen::to_value(&spans)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Quick check if text contains at least one tag
    #[wasm_bindgen(js_name = containsTags)]
    pub fn contains_tags(&self, text: &str) -> bool {
        !self.scan(text).is_empty()
    }
}

// Native API
impl TagScanner {
    pub fn with_extra_chars(extra: &[char]) -> Self {
        TagScanner {
            extra_chars: extra.to_vec(),
        }
    }

    /// Scan `text` and return every tag span in discovery order.
    ///
    /// Spans are pairwise disjoint and sorted by start offset.
    pub fn scan(&self, text: &str) -> Vec<TagSpan> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut spans = Vec::new();

        let mut i = 0;
        // A trigger at the very last position can never start a tag.
        while i + 1 < chars.len() {
            let (offset, sign) = chars[i];
            if is_trigger(sign) {
                // Body runs from the char after the trigger to the first
                // disqualifying char (or the end of text).
                let mut j = i + 1;
                while j < chars.len() && self.is_tag_char(chars[j].1) {
                    j += 1;
                }
                let end = if j < chars.len() {
                    chars[j].0
                } else {
                    text.len()
                };
                spans.push(TagSpan::new(offset, end, sign));
                i = j;
            } else {
                i += 1;
            }
        }

        spans
    }

    fn is_tag_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.extra_chars.contains(&c)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn texts_of(scanner: &TagScanner, text: &str) -> Vec<String> {
        scanner
            .scan(text)
            .iter()
            .map(|s| text[s.start..s.end].to_string())
            .collect()
    }

    #[test]
    fn test_basic_hash_and_mention() {
        let scanner = TagScanner::default();
        let text = "check #vinayak and @jujare out";

        let spans = scanner.scan(text);
        assert_eq!(spans.len(), 2);

        assert_eq!(spans[0].trigger, '#');
        assert_eq!(&text[spans[0].start..spans[0].end], "#vinayak");
        assert_eq!(spans[1].trigger, '@');
        assert_eq!(&text[spans[1].start..spans[1].end], "@jujare");
    }

    #[test]
    fn test_empty_text() {
        let scanner = TagScanner::default();
        assert!(scanner.scan("").is_empty());
    }

    #[test]
    fn test_trailing_trigger_never_matches() {
        let scanner = TagScanner::default();
        assert!(scanner.scan("hello #").is_empty());
        assert!(scanner.scan("#").is_empty());
    }

    #[test]
    fn test_trigger_with_empty_body() {
        let scanner = TagScanner::default();
        let spans = scanner.scan("# foo");

        // The lone trigger still gets a span covering just itself.
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0], TagSpan::new(0, 1, '#'));
        assert!(spans[0].has_empty_body());
    }

    #[test]
    fn test_consecutive_triggers() {
        let scanner = TagScanner::default();
        let spans = scanner.scan("##ab");

        // First '#' stops immediately, second starts a real tag.
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], TagSpan::new(0, 1, '#'));
        assert_eq!(spans[1], TagSpan::new(1, 4, '#'));
    }

    #[test]
    fn test_extra_chars_extend_body() {
        let scanner = TagScanner::with_extra_chars(&['_', '-', '$']);
        let text = "#this_is-a$tag!";

        let spans = scanner.scan(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "#this_is-a$tag");
    }

    #[test]
    fn test_default_body_stops_at_punctuation() {
        let scanner = TagScanner::default();
        assert_eq!(texts_of(&scanner, "see #one, #two."), vec!["#one", "#two"]);
    }

    #[test]
    fn test_tag_runs_to_end_of_text() {
        let scanner = TagScanner::default();
        let text = "ends with #tag";

        let spans = scanner.scan(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].end, text.len());
    }

    #[test]
    fn test_unicode_letters_in_body() {
        let scanner = TagScanner::default();
        let text = "#héllo!";

        let spans = scanner.scan(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "#héllo");
    }

    #[test]
    fn test_spans_disjoint_and_sorted() {
        let scanner = TagScanner::with_extra_chars(&['_']);
        let text = "#a ##b @c_d text @@ #tail";

        let spans = scanner.scan(text);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "spans overlap: {:?}", pair);
        }
        for span in &spans {
            assert!(span.start < span.end);
            assert!(span.end <= text.len());
        }
    }

    #[test]
    fn test_contains_tags() {
        let scanner = TagScanner::default();
        assert!(scanner.contains_tags("a #b"));
        assert!(!scanner.contains_tags("plain text"));
        assert!(!scanner.contains_tags("trailing #"));
    }

    #[test]
    fn test_ctor_from_string() {
        let scanner = TagScanner::new(Some("_-".to_string()));
        assert_eq!(texts_of(&scanner, "go #a_b-c now"), vec!["#a_b-c"]);
    }
}
