//! TagReconciler: keeps annotations consistent with the current text
//!
//! Owns the annotation set attached to one host buffer. On every text-change
//! notification it erases all annotations it previously installed, reruns
//! the scanner over the new text, and installs one fresh annotation per
//! discovered span. No incremental patching: the annotation set is always
//! exactly the scanner's image over the current text, which rules out
//! duplicate or stale annotations by construction.
//!
//! A reconciler binds to exactly one buffer, once. There is no unbind; the
//! handle dies with its buffer.

use std::collections::HashSet;

use crate::tagger::annotation::{Annotation, AnnotationHost, AnnotationId, TagClickListener};
use crate::tagger::change::ChangeDetector;
use crate::tagger::scanner::TagScanner;

// =============================================================================
// Errors
// =============================================================================

/// Reconciler-specific errors
#[derive(Debug, Clone, PartialEq)]
pub enum TagError {
    /// `bind` was called on a handle that is already attached to a buffer.
    AlreadyBound,
}

impl std::fmt::Display for TagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagError::AlreadyBound => {
                write!(f, "handle already bound; create a new reconciler per buffer")
            }
        }
    }
}

impl std::error::Error for TagError {}

// =============================================================================
// TagReconciler
// =============================================================================

/// One-way bind state. There is no `Bound -> Unbound` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindState {
    Unbound,
    Bound,
}

/// Annotation reconciler bound to a single host buffer.
///
/// # Example
/// ```ignore
/// let mut buffer = MemoryBuffer::new("check #vinayak out");
/// let mut reconciler = TagReconciler::new(0xFF2196F3, None);
/// reconciler.bind(&mut buffer)?;
/// assert_eq!(reconciler.tags(), vec!["vinayak"]);
/// ```
pub struct TagReconciler {
    color: u32,
    listener: Option<Box<dyn TagClickListener>>,
    scanner: TagScanner,
    change: ChangeDetector,
    state: BindState,
    /// Snapshot of the text the current annotation set was scanned from.
    text: String,
    annotations: Vec<Annotation>,
    next_id: AnnotationId,
}

impl TagReconciler {
    /// Create a detached reconciler. Tags are colored with `color`; if a
    /// `listener` is supplied, annotations are created clickable and
    /// activation events are routed to it.
    pub fn new(color: u32, listener: Option<Box<dyn TagClickListener>>) -> Self {
        Self::with_extra_chars(color, listener, &[])
    }

    /// Like [`new`](Self::new), with additional valid tag-body characters.
    /// With `['_', '-', '$']`, `"#this_is-a$tag"` is highlighted as one tag;
    /// with no extra characters only `"#this"` would be.
    pub fn with_extra_chars(
        color: u32,
        listener: Option<Box<dyn TagClickListener>>,
        extra_chars: &[char],
    ) -> Self {
        TagReconciler {
            color,
            listener,
            scanner: TagScanner::with_extra_chars(extra_chars),
            change: ChangeDetector::new(),
            state: BindState::Unbound,
            text: String::new(),
            annotations: Vec::new(),
            next_id: 0,
        }
    }

    /// Attach this handle to a buffer and annotate its current content.
    ///
    /// Switches the buffer into annotation-capable mode. When a click
    /// listener is configured, also enables click routing and suppresses the
    /// default selection highlight. Fails with [`TagError::AlreadyBound`] on
    /// a second call; a handle serves exactly one buffer for its lifetime.
    pub fn bind(&mut self, host: &mut dyn AnnotationHost) -> Result<(), TagError> {
        if matches!(self.state, BindState::Bound) {
            return Err(TagError::AlreadyBound);
        }

        host.enable_annotations();
        if self.listener.is_some() {
            host.enable_click_routing();
            host.disable_selection_highlight();
        }
        self.state = BindState::Bound;

        let text = host.text();
        self.change.has_changed(&text); // seed the detector with the initial content
        self.reapply(host, &text);
        Ok(())
    }

    /// Handle a text-change notification from the host.
    ///
    /// Empty `text` is ignored so that transient empty states during
    /// host-side replacement sequences do not flash the annotations away.
    /// Unchanged content is also ignored; the annotation set would come out
    /// identical, so the add/remove churn is skipped.
    pub fn on_text_changed(&mut self, host: &mut dyn AnnotationHost, text: &str) {
        if matches!(self.state, BindState::Unbound) {
            return;
        }
        if text.is_empty() {
            return;
        }
        if !self.change.has_changed(text) {
            return;
        }
        self.reapply(host, text);
    }

    /// Distinct tag substrings in first-occurrence order, without triggers.
    pub fn tags(&self) -> Vec<String> {
        self.list_tags(false)
    }

    /// Distinct tag substrings in first-occurrence order. When
    /// `with_trigger` is false the leading trigger character is skipped.
    pub fn list_tags(&self, with_trigger: bool) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for annotation in &self.annotations {
            let start = if with_trigger {
                annotation.span.start
            } else {
                annotation.span.body_start()
            };
            let tag = self.text[start..annotation.span.end].to_string();
            if seen.insert(tag.clone()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Handle an activation event for the annotation covering
    /// `[start, end)`. The listener receives the full tag text, trigger
    /// included.
    ///
    /// # Panics
    ///
    /// Panics when no click listener is configured: click routing is only
    /// ever enabled alongside a listener, so activation without one is a
    /// host-side invariant violation, not a recoverable error.
    pub fn on_annotation_activated(&self, start: usize, end: usize) {
        let listener = self
            .listener
            .as_ref()
            .expect("annotation activated but no click listener is configured");
        listener.on_tag_activated(&self.text[start..end]);
    }

    /// The currently installed annotations, in span order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, BindState::Bound)
    }

    /// True when annotations are created clickable.
    pub fn is_clickable(&self) -> bool {
        self.listener.is_some()
    }

    /// Percentage of change notifications skipped as unchanged content.
    pub fn rescan_skip_rate(&self) -> f64 {
        self.change.skip_rate()
    }

    /// Erase-and-rebuild pass: drop every owned annotation, rescan, install
    /// one annotation per span.
    fn reapply(&mut self, host: &mut dyn AnnotationHost, text: &str) {
        let spans = self.scanner.scan(text);
        let clickable = self.listener.is_some();

        for annotation in self.annotations.drain(..) {
            host.remove_annotation(annotation.id);
        }
        for span in spans {
            let annotation = Annotation {
                id: self.next_id,
                span,
                color: self.color,
                clickable,
            };
            self.next_id += 1;
            host.add_annotation(&annotation);
            self.annotations.push(annotation);
        }
        self.text = text.to_string();
    }
}

// =============================================================================
// Tests
// =============================================================================
