//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy an overlay data URI, returning its length in bytes.
pub fn copy_overlay_uri(uri: &str) -> Result<usize> {
    copy_to_clipboard(uri)?;
    tracing::debug!("Copied {} byte overlay URI", uri.len());
    Ok(uri.len())
}
