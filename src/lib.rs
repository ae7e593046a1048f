//! TagCore: hashtag/mention highlighting engine
//!
//! A Rust/WASM engine that scans text for `#tag` / `@mention` tokens and
//! keeps a set of non-overlapping styled, optionally clickable annotations
//! in sync with the text as it mutates.
//!
//! # Architecture
//!
//! - `span.rs` - TagSpan: half-open byte ranges + the trigger character set
//! - `scanner.rs` - TagScanner: stateless single-pass O(n) span discovery
//! - `annotation.rs` - Annotation records + the AnnotationHost / TagClickListener contracts
//! - `buffer.rs` - MemoryBuffer: in-memory host with a drainable command log
//! - `change.rs` - ChangeDetector: content-hash skip detection for rescans
//! - `reconciler.rs` - TagReconciler: erase-and-rebuild reconciliation, bind guard
//! - `wasm.rs` - TagHighlighter: single-call-per-event JS facade
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { TagHighlighter } from 'tagcore';
//!
//! await init();
//!
//! const highlighter = new TagHighlighter(0xFF2196F3, tag => console.log(tag), "_-$");
//!
//! // Commands tell the host which annotations to add/remove
//! applyCommands(highlighter.bind("check #vinayak and @jujare out"));
//! applyCommands(highlighter.onTextChanged("now only #vinayak"));
//!
//! console.log(highlighter.listTags(false)); // ["vinayak"]
//! ```

pub mod tagger;

pub use tagger::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("tagcore v{}", env!("CARGO_PKG_VERSION"))
}
