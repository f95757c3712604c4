//! Pick the material ids a zodiac reward needs out of a pasted inventory dump.

pub mod clipboard;
pub mod error;
pub mod extract;
pub mod form;
pub mod json;
pub mod logger;
pub mod registry;
#[cfg(windows)]
mod win_clipboard;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use error::{ClipboardError, ExtractionError, Shortfall};
pub use extract::{extract, ExtractionResult, Selection};
pub use form::Form;
pub use registry::{Registry, Requirement, RewardConfig};
