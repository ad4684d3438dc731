use std::sync::Mutex;

use arboard::Clipboard;
use tracing::debug;

use crate::error::ClipboardError;

/// Somewhere copied prompt templates go.
pub trait ClipboardSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `ClipboardError` if the text could not be placed on the clipboard.
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard. A handle is opened per copy so a missing display
/// server only fails the copy, not startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| ClipboardError::Rejected(err.to_string()))?;
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}

/// In-process clipboard that remembers every copy.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    entries: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.entries
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".into()))?
            .push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_the_latest_copy() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.last(), None);
        clipboard.copy_text("first").unwrap();
        clipboard.copy_text("second").unwrap();
        assert_eq!(clipboard.last().as_deref(), Some("second"));
    }
}
