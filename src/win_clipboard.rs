//! Win32 clipboard text access (CF_UNICODETEXT).

use windows::Win32::Foundation::{GlobalFree, HANDLE, HGLOBAL};
use windows::Win32::System::DataExchange::*;
use windows::Win32::System::Memory::*;
use windows::Win32::System::Ole::CF_UNICODETEXT;

use crate::error::ClipboardError;

fn encode_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Holds the clipboard open; closes it on drop.
struct OpenGuard;

impl OpenGuard {
    fn open() -> Result<Self, ClipboardError> {
        unsafe { OpenClipboard(None) }
            .map_err(|e| ClipboardError::Unavailable(e.message()))?;
        Ok(OpenGuard)
    }
}

impl Drop for OpenGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseClipboard();
        }
    }
}

pub fn read_text() -> Result<String, ClipboardError> {
    let format = CF_UNICODETEXT.0 as u32;
    if unsafe { IsClipboardFormatAvailable(format) }.is_err() {
        return Ok(String::new());
    }

    let _guard = OpenGuard::open()?;
    let handle = unsafe { GetClipboardData(format) }
        .map_err(|e| ClipboardError::Read(e.message()))?;
    let hglobal = HGLOBAL(handle.0);

    unsafe {
        let ptr = GlobalLock(hglobal) as *const u16;
        if ptr.is_null() {
            return Err(ClipboardError::Read("GlobalLock failed".to_string()));
        }
        let mut len = 0usize;
        while *ptr.add(len) != 0 {
            len += 1;
        }
        let text = String::from_utf16(std::slice::from_raw_parts(ptr, len));
        let _ = GlobalUnlock(hglobal);
        text.map_err(|e| ClipboardError::Read(format!("clipboard text is not valid UTF-16: {}", e)))
    }
}

pub fn write_text(text: &str) -> Result<(), ClipboardError> {
    let wide = encode_wide(text);
    let bytes = wide.len() * std::mem::size_of::<u16>();

    let _guard = OpenGuard::open()?;
    unsafe {
        EmptyClipboard().map_err(|e| ClipboardError::Write(e.message()))?;

        let hglobal = GlobalAlloc(GMEM_MOVEABLE, bytes)
            .map_err(|e| ClipboardError::Write(e.message()))?;
        let ptr = GlobalLock(hglobal) as *mut u16;
        if ptr.is_null() {
            let _ = GlobalFree(Some(hglobal));
            return Err(ClipboardError::Write("GlobalLock failed".to_string()));
        }
        std::ptr::copy_nonoverlapping(wide.as_ptr(), ptr, wide.len());
        let _ = GlobalUnlock(hglobal);

        // On success the clipboard owns the memory.
        if let Err(e) = SetClipboardData(CF_UNICODETEXT.0 as u32, Some(HANDLE(hglobal.0))) {
            let _ = GlobalFree(Some(hglobal));
            return Err(ClipboardError::Write(e.message()));
        }
    }
    Ok(())
}
