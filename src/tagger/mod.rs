pub mod annotation;
pub mod buffer;
pub mod change;
pub mod reconciler;
pub mod scanner;
pub mod span;
pub mod wasm;

pub use annotation::*;
pub use buffer::*;
pub use change::*;
pub use reconciler::*;
pub use scanner::*;
pub use span::*;
pub use wasm::*;
