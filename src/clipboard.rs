use arboard::Clipboard;
use std::error::Error;

/// System clipboard access for pasting into form fields
pub struct ClipboardManager {
    clipboard: Option<Clipboard>,
}

impl ClipboardManager {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                tracing::warn!("Clipboard unavailable, paste disabled: {}", e);
                None
            }
        };
        Self { clipboard }
    }

    /// Read text from the clipboard
    pub fn paste(&mut self) -> Result<String, Box<dyn Error>> {
        let clipboard = self.clipboard.as_mut().ok_or("Clipboard not available")?;
        let content = clipboard.get_text()?;
        tracing::debug!("Pasted {} characters from clipboard", content.len());
        Ok(content)
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}
