use crate::error::ClipboardError;

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, opened per write.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
