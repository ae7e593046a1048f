//! MemoryBuffer: in-memory annotation-capable text buffer
//!
//! Reference implementation of [`AnnotationHost`]. Besides maintaining the
//! installed annotation set it records every command it receives, in order,
//! so a WASM host can drain the log and replay it against the real widget,
//! and tests can assert on the exact command stream.

use serde::{Deserialize, Serialize};

use crate::tagger::annotation::{Annotation, AnnotationHost, AnnotationId};

/// One command issued against the buffer by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BufferCommand {
    EnableAnnotations,
    EnableClickRouting,
    DisableSelectionHighlight,
    Add(Annotation),
    Remove(AnnotationId),
}

/// In-memory [`AnnotationHost`] with a drainable command log.
#[derive(Debug, Default)]
pub struct MemoryBuffer {
    text: String,
    annotations: Vec<Annotation>,
    commands: Vec<BufferCommand>,
    rich_annotations: bool,
    click_routing: bool,
    selection_highlight_disabled: bool,
}

impl MemoryBuffer {
    pub fn new(text: &str) -> Self {
        MemoryBuffer {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Replace the buffer contents. The host is responsible for notifying
    /// the reconciler afterwards; the buffer itself notifies nobody.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Currently installed annotations, in installation order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Drain the accumulated command log.
    pub fn take_commands(&mut self) -> Vec<BufferCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn rich_annotations_enabled(&self) -> bool {
        self.rich_annotations
    }

    pub fn click_routing_enabled(&self) -> bool {
        self.click_routing
    }

    pub fn selection_highlight_disabled(&self) -> bool {
        self.selection_highlight_disabled
    }
}

impl AnnotationHost for MemoryBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn enable_annotations(&mut self) {
        self.rich_annotations = true;
        self.commands.push(BufferCommand::EnableAnnotations);
    }

    fn enable_click_routing(&mut self) {
        self.click_routing = true;
        self.commands.push(BufferCommand::EnableClickRouting);
    }

    fn disable_selection_highlight(&mut self) {
        self.selection_highlight_disabled = true;
        self.commands.push(BufferCommand::DisableSelectionHighlight);
    }

    fn add_annotation(&mut self, annotation: &Annotation) {
        self.annotations.push(*annotation);
        self.commands.push(BufferCommand::Add(*annotation));
    }

    fn remove_annotation(&mut self, id: AnnotationId) {
        self.annotations.retain(|a| a.id != id);
        self.commands.push(BufferCommand::Remove(id));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::span::TagSpan;

    fn ann(id: AnnotationId) -> Annotation {
        Annotation {
            id,
            span: TagSpan::new(0, 2, '#'),
            color: 0xFF000000,
            clickable: false,
        }
    }

    #[test]
    fn test_add_and_remove() {
        let mut buffer = MemoryBuffer::new("hi #a");
        buffer.add_annotation(&ann(1));
        buffer.add_annotation(&ann(2));
        assert_eq!(buffer.annotations().len(), 2);

        buffer.remove_annotation(1);
        assert_eq!(buffer.annotations().len(), 1);
        assert_eq!(buffer.annotations()[0].id, 2);
    }

    #[test]
    fn test_command_log_order() {
        let mut buffer = MemoryBuffer::new("");
        buffer.enable_annotations();
        buffer.add_annotation(&ann(1));
        buffer.remove_annotation(1);

        let commands = buffer.take_commands();
        assert_eq!(
            commands,
            vec![
                BufferCommand::EnableAnnotations,
                BufferCommand::Add(ann(1)),
                BufferCommand::Remove(1),
            ]
        );

        // Drained log starts empty again.
        assert!(buffer.take_commands().is_empty());
    }

    #[test]
    fn test_mode_flags() {
        let mut buffer = MemoryBuffer::new("");
        assert!(!buffer.rich_annotations_enabled());
        buffer.enable_annotations();
        buffer.enable_click_routing();
        buffer.disable_selection_highlight();
        assert!(buffer.rich_annotations_enabled());
        assert!(buffer.click_routing_enabled());
        assert!(buffer.selection_highlight_disabled());
    }
}
