//! TagHighlighter: WASM facade over the tag engine
//!
//! Designed for a JS text-editor host with a single cross-boundary call per
//! event. The facade pairs a [`TagReconciler`] with a [`MemoryBuffer`] that
//! mirrors the host's text and logs every annotation command; each call
//! returns the drained command stream for the host to replay against its
//! real widget.
//!
//! # Usage (JavaScript)
//! ```javascript
//! import init, { TagHighlighter } from 'tagcore';
//!
//! await init();
//! const highlighter = new TagHighlighter(0xFF2196F3, tag => openTag(tag), "_-");
//! applyCommands(highlighter.bind(editor.text()));
//! editor.onInput(text => applyCommands(highlighter.onTextChanged(text)));
//! editor.onSpanTap((start, end) => highlighter.onAnnotationActivated(start, end));
//! ```

use wasm_bindgen::prelude::*;

use crate::tagger::annotation::TagClickListener;
use crate::tagger::buffer::MemoryBuffer;
use crate::tagger::reconciler::TagReconciler;

/// Click listener backed by a JS function. The callback receives the tag
/// text, trigger included.
struct JsClickListener {
    callback: js_sys::Function,
}

impl TagClickListener for JsClickListener {
    fn on_tag_activated(&self, tag: &str) {
        if let Err(e) = self.callback.call1(&JsValue::NULL, &JsValue::from_str(tag)) {
            web_sys::console::error_1(
                &format!("[TagHighlighter] click listener failed: {:?}", e).into(),
            );
        }
    }
}

/// Tag highlighting engine for one JS-owned text buffer.
#[wasm_bindgen]
pub struct TagHighlighter {
    reconciler: TagReconciler,
    buffer: MemoryBuffer,
}

#[wasm_bindgen]
impl TagHighlighter {
    /// Create a detached highlighter.
    ///
    /// # Arguments
    /// * `color` - 0xAARRGGBB tag color, passed through to the host
    /// * `on_tag_click` - optional callback; when present, annotations are
    ///   created clickable and activation events are routed to it
    /// * `extra_chars` - additional valid tag-body characters, one per char
    #[wasm_bindgen(constructor)]
    pub fn new(
        color: u32,
        on_tag_click: Option<js_sys::Function>,
        extra_chars: Option<String>,
    ) -> TagHighlighter {
        let listener: Option<Box<dyn TagClickListener>> =
            on_tag_click.map(|callback| Box::new(JsClickListener { callback }) as Box<dyn TagClickListener>);
        let extra: Vec<char> = extra_chars.map(|s| s.chars().collect()).unwrap_or_default();

        TagHighlighter {
            reconciler: TagReconciler::with_extra_chars(color, listener, &extra),
            buffer: MemoryBuffer::new(""),
        }
    }

    /// Bind to the host buffer and annotate its current content.
    ///
    /// Returns the command stream to replay (mode switches plus one Add per
    /// discovered tag). Throws if the highlighter is already bound.
    #[wasm_bindgen(js_name = bind)]
    pub fn bind(&mut self, initial_text: &str) -> Result<JsValue, JsValue> {
        self.buffer.set_text(initial_text);
        self.reconciler
            .bind(&mut self.buffer)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.drain_commands()
    }

    /// Deliver a text-change notification.
    ///
    /// Returns the command stream to replay. Empty text and unchanged
    /// content produce an empty stream and leave the annotations alone.
    #[wasm_bindgen(js_name = onTextChanged)]
    pub fn on_text_changed(&mut self, text: &str) -> Result<JsValue, JsValue> {
        if !text.is_empty() {
            self.buffer.set_text(text);
        }
        self.reconciler.on_text_changed(&mut self.buffer, text);
        self.drain_commands()
    }

    /// Distinct tag texts in first-occurrence order.
    #[wasm_bindgen(js_name = listTags)]
    pub fn list_tags(&self, with_trigger: bool) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.reconciler.list_tags(with_trigger))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Deliver an activation event for the annotation covering
    /// `[start, end)`. The host resolves the tap to that range.
    #[wasm_bindgen(js_name = onAnnotationActivated)]
    pub fn on_annotation_activated(&self, start: usize, end: usize) {
        self.reconciler.on_annotation_activated(start, end);
    }

    /// Current annotations as an array of `{ id, span, color, clickable }`.
    #[wasm_bindgen(js_name = annotations)]
    pub fn annotations(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.reconciler.annotations())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = annotationCount)]
    pub fn annotation_count(&self) -> usize {
        self.reconciler.annotations().len()
    }

    /// Get highlighter status
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> JsValue {
        let status = serde_json::json!({
            "bound": self.reconciler.is_bound(),
            "clickable": self.reconciler.is_clickable(),
            "annotation_count": self.reconciler.annotations().len(),
            "rescan_skip_rate": self.reconciler.rescan_skip_rate(),
        });

        JsValue::from_str(&status.to_string())
    }

    fn drain_commands(&mut self) -> Result<JsValue, JsValue> {
        let commands = self.buffer.take_commands();
        serde_wasm_bindgen::to_value(&commands).map_err(|e| {
            web_sys::console::error_1(
                &format!("[TagHighlighter] Serialization failed: {:?}", e).into(),
            );
            JsValue::from_str(&format!("Serialization error: {}", e))
        })
    }
}
