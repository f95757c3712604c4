//! Clipboard access.
//!
//! On Windows the Win32 clipboard is used directly. Elsewhere the platform's
//! clipboard helper programs are driven as child processes.

#[cfg(not(windows))]
use std::io::Write;
#[cfg(not(windows))]
use std::process::{Command, Output, Stdio};

use crate::error::ClipboardError;

/// Host clipboard capability consumed by the form.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard. `deny` makes every call fail like a host that
/// refused clipboard permission.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: String,
    pub deny: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: text.to_string(),
            deny: false,
        }
    }

    pub fn denied() -> Self {
        Self {
            deny: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Read("permission denied".to_string()));
        }
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Write("permission denied".to_string()));
        }
        self.contents = text.to_string();
        Ok(())
    }
}

/// The operating system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(windows)]
impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        crate::win_clipboard::read_text()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        crate::win_clipboard::write_text(text)
    }
}

#[cfg(not(windows))]
impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let helper = find_helper()?;
        log::debug!("Reading clipboard via {}", helper.paste[0]);

        let output = Command::new(helper.paste[0])
            .args(&helper.paste[1..])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ClipboardError::Read(e.to_string()))?;

        paste_output(helper.paste[0], output)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let helper = find_helper()?;
        log::debug!("Writing {} bytes to clipboard via {}", text.len(), helper.copy[0]);

        let mut child = Command::new(helper.copy[0])
            .args(&helper.copy[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }

        let status = child.wait().map_err(|e| ClipboardError::Write(e.to_string()))?;
        if !status.success() {
            return Err(ClipboardError::Write(format!(
                "{} exited with {}",
                helper.copy[0], status
            )));
        }
        Ok(())
    }
}

/// Decode a paste helper's result. wl-paste and xclip exit non-zero on an
/// empty clipboard, so a failed run with no output reads as empty text.
#[cfg(not(windows))]
fn paste_output(program: &str, output: Output) -> Result<String, ClipboardError> {
    if !output.status.success() {
        if output.stdout.is_empty() {
            return Ok(String::new());
        }
        return Err(ClipboardError::Read(format!(
            "{} exited with {}",
            program, output.status
        )));
    }
    String::from_utf8(output.stdout)
        .map_err(|e| ClipboardError::Read(format!("clipboard text is not UTF-8: {}", e)))
}

/// A copy/paste program pair.
#[cfg(not(windows))]
struct Helper {
    copy: &'static [&'static str],
    paste: &'static [&'static str],
}

#[cfg(not(windows))]
const HELPERS: &[(&str, Helper)] = &[
    (
        "pbcopy",
        Helper {
            copy: &["pbcopy"],
            paste: &["pbpaste"],
        },
    ),
    (
        "wl-copy",
        Helper {
            copy: &["wl-copy"],
            paste: &["wl-paste", "--no-newline"],
        },
    ),
    (
        "xclip",
        Helper {
            copy: &["xclip", "-selection", "clipboard", "-in"],
            paste: &["xclip", "-selection", "clipboard", "-out"],
        },
    ),
    (
        "xsel",
        Helper {
            copy: &["xsel", "--clipboard", "--input"],
            paste: &["xsel", "--clipboard", "--output"],
        },
    ),
];

/// Pick the first helper present on PATH. wl-copy is only considered under
/// a Wayland session.
#[cfg(not(windows))]
fn find_helper() -> Result<&'static Helper, ClipboardError> {
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    HELPERS
        .iter()
        .filter(|(name, _)| wayland || *name != "wl-copy")
        .find(|(name, _)| on_path(name))
        .map(|(_, helper)| helper)
        .ok_or_else(|| {
            ClipboardError::Unavailable(
                "no clipboard helper (pbcopy, wl-copy, xclip, xsel) found".to_string(),
            )
        })
}

#[cfg(not(windows))]
fn on_path(program: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| dir.join(program).is_file())
}
