//! Annotations and the host-buffer collaborator contract
//!
//! An `Annotation` attaches a color (and optionally click behavior) to one
//! tag span. Annotations are owned exclusively by the reconciler: every text
//! change destroys the whole set and installs a fresh one, so an annotation
//! never outlives a single scan cycle.
//!
//! The `AnnotationHost` trait is everything the engine requires from its
//! environment: a readable text buffer that accepts annotation add/remove
//! commands and mode switches. The engine only ever reads the text; it never
//! mutates it.

use serde::{Deserialize, Serialize};

use crate::tagger::span::TagSpan;

/// Handle-local identifier for one installed annotation.
pub type AnnotationId = u64;

/// A styled (and possibly clickable) region over one tag span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub span: TagSpan,
    /// Opaque 0xAARRGGBB value; applying it is the host's job.
    pub color: u32,
    /// Clickable annotations route activation events back to the engine.
    pub clickable: bool,
}

/// Buffer collaborator contract.
///
/// Implementations are the host's text widget (or a stand-in such as
/// [`MemoryBuffer`](crate::tagger::buffer::MemoryBuffer)). All calls are
/// synchronous and single-threaded.
pub trait AnnotationHost {
    /// Current contents of the buffer.
    fn text(&self) -> String;

    /// Switch the buffer into a mode that supports rich annotations.
    fn enable_annotations(&mut self);

    /// Start delivering activation events for clickable annotations.
    fn enable_click_routing(&mut self);

    /// Suppress the default selection highlight so activation does not
    /// visually conflict with tag coloring.
    fn disable_selection_highlight(&mut self);

    /// Install one annotation over its span.
    fn add_annotation(&mut self, annotation: &Annotation);

    /// Remove a previously installed annotation.
    fn remove_annotation(&mut self, id: AnnotationId);
}

/// Click callback capability. Invoked with the trigger character included
/// (`"#tag"`, not `"tag"`).
pub trait TagClickListener {
    fn on_tag_activated(&self, tag: &str);
}

impl<F: Fn(&str)> TagClickListener for F {
    fn on_tag_activated(&self, tag: &str) {
        self(tag)
    }
}

// =============================================================================
// Tests
// =============================================================================
