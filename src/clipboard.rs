//! Clipboard capability.
//!
//! The controller only sees [`ClipboardSink`]. [`platform_clipboard`] picks the
//! native writer where the OS clipboard can be opened and falls back to a
//! no-op writer elsewhere.

use std::borrow::Cow;

use arboard::{Clipboard, ImageData};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::symbol::EncodedSymbol;

/// Somewhere a rendered symbol can be copied to.
pub trait ClipboardSink {
    fn set_image(&mut self, symbol: &EncodedSymbol) -> Result<()>;
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for Box<T> {
    fn set_image(&mut self, symbol: &EncodedSymbol) -> Result<()> {
        (**self).set_image(symbol)
    }
}

/// Stand-in used where no system clipboard is reachable. Every copy fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl ClipboardSink for NoopClipboard {
    fn set_image(&mut self, symbol: &EncodedSymbol) -> Result<()> {
        debug!(text = symbol.text(), "no clipboard available, image dropped");
        Err(Error::Clipboard("no system clipboard is available".into()))
    }
}

/// The OS clipboard.
///
/// Pixels are handed over as RGBA; arboard converts them to whatever bitmap
/// format the platform clipboard expects.
pub struct NativeClipboard {
    inner: Clipboard,
}

impl NativeClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: Clipboard::new()?,
        })
    }
}

impl ClipboardSink for NativeClipboard {
    fn set_image(&mut self, symbol: &EncodedSymbol) -> Result<()> {
        self.inner.set_image(ImageData {
            width: symbol.width() as usize,
            height: symbol.height() as usize,
            bytes: Cow::Owned(symbol.to_rgba()),
        })?;
        debug!(width = symbol.width(), height = symbol.height(), "image copied");
        Ok(())
    }
}

#[cfg(any(windows, target_os = "macos", target_os = "linux"))]
pub fn platform_clipboard() -> Box<dyn ClipboardSink> {
    match NativeClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            warn!(error = %err, "system clipboard unavailable, copying disabled");
            Box::new(NoopClipboard)
        }
    }
}

#[cfg(not(any(windows, target_os = "macos", target_os = "linux")))]
pub fn platform_clipboard() -> Box<dyn ClipboardSink> {
    warn!("no clipboard support on this platform, copying disabled");
    Box::new(NoopClipboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn test_noop_refuses_images() {
        let symbol = EncodedSymbol::new("x", GrayImage::new(2, 2));
        let mut sink: Box<dyn ClipboardSink> = Box::new(NoopClipboard);
        assert!(matches!(sink.set_image(&symbol), Err(Error::Clipboard(_))));
    }
}
