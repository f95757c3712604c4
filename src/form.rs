//! Form state behind the extractor.
//!
//! Holds what the page used to keep in its widgets: the pasted input, the two
//! selections, the rendered output and a transient error banner. Every
//! operation takes `now` so the banner's auto-hide can be driven by the host.

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::clipboard::Clipboard;
use crate::error::ExtractionError;
use crate::extract::{extract, Selection};
use crate::registry::Registry;

/// How long an error stays on the banner.
pub const ERROR_DISPLAY: Duration = Duration::from_secs(5);

const NOTHING_TO_COPY: &str = "Nothing to copy";
const CLIPBOARD_EMPTY: &str = "Clipboard is empty";
const PASTE_FAILED: &str = "Failed to paste. Please allow clipboard access or paste manually.";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Banner {
    message: String,
    shown_at: Instant,
}

pub struct Form<'r> {
    registry: &'r Registry,
    input: String,
    selection: Selection,
    output: Option<String>,
    banner: Option<Banner>,
}

impl<'r> Form<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            input: String::new(),
            selection: Selection::default(),
            output: None,
            banner: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn select_reward(&mut self, key: Option<&str>) {
        self.selection.reward_key = key.map(str::to_string);
    }

    pub fn select_animal(&mut self, animal: Option<&str>) {
        self.selection.animal = animal.map(str::to_string);
    }

    /// Whether the animal picker applies to the current reward selection.
    pub fn animal_selector_visible(&self) -> bool {
        self.selection
            .reward_key()
            .and_then(|key| self.registry.get(key))
            .is_some_and(|config| config.needs_animal())
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Banner text, or None once it has been up for `ERROR_DISPLAY`.
    pub fn banner(&self, now: Instant) -> Option<&str> {
        self.banner
            .as_ref()
            .filter(|b| now.saturating_duration_since(b.shown_at) < ERROR_DISPLAY)
            .map(|b| b.message.as_str())
    }

    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        warn!("{}", message);
        self.banner = Some(Banner {
            message,
            shown_at: now,
        });
    }

    /// Run extraction on the current input. Returns true when output was produced.
    pub fn submit(&mut self, now: Instant) -> bool {
        self.output = None;
        self.banner = None;

        let rendered = extract(self.registry, &self.input, &self.selection).and_then(|result| {
            result
                .to_pretty_json()
                .map_err(|e| ExtractionError::Render(e.to_string()))
        });

        match rendered {
            Ok(text) => {
                info!("Extraction succeeded for {:?}", self.selection.reward_key());
                self.output = Some(text);
                true
            }
            Err(e) => {
                self.show_error(e.to_string(), now);
                false
            }
        }
    }

    pub fn copy_output(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        let Some(text) = self.output.clone() else {
            self.show_error(NOTHING_TO_COPY, now);
            return false;
        };
        self.write_clipboard(clipboard, &text, now)
    }

    pub fn copy_input(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        if self.input.trim().is_empty() {
            self.show_error(NOTHING_TO_COPY, now);
            return false;
        }
        let text = self.input.clone();
        self.write_clipboard(clipboard, &text, now)
    }

    /// Replace the input with the clipboard contents. Blank clipboards leave
    /// the input untouched.
    pub fn paste_input(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        match clipboard.read_text() {
            Ok(text) if text.trim().is_empty() => {
                self.show_error(CLIPBOARD_EMPTY, now);
                false
            }
            Ok(text) => {
                self.input = text;
                true
            }
            Err(e) => {
                warn!("Clipboard read failed: {}", e);
                self.show_error(PASTE_FAILED, now);
                false
            }
        }
    }

    fn write_clipboard(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => true,
            Err(e) => {
                self.show_error(format!("Failed to copy: {}", e), now);
                false
            }
        }
    }
}
