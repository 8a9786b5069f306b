//! QR code generation and persistence.
//!
//! [`QrGenerator`] is the model half of the application: it turns text into an
//! [`EncodedSymbol`], keeps the most recent one, and writes it to disk on
//! request. It holds no other state.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::helper::{encode_png, encode_text, render_modules, RenderOptions};
use crate::symbol::EncodedSymbol;

/// Builds QR symbols with fixed parameters and caches the last one.
///
/// # Example
///
/// ```rust
/// use qrdesk::generator::QrGenerator;
///
/// let mut generator = QrGenerator::new();
/// let symbol = generator.generate("Hello, World!").unwrap();
/// assert!(symbol.width() > 0);
///
/// let png = generator.png_bytes().unwrap();
/// assert!(png.starts_with(b"\x89PNG"));
/// ```
#[derive(Debug, Default)]
pub struct QrGenerator {
    options: RenderOptions,
    last: Option<EncodedSymbol>,
}

impl QrGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            last: None,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The symbol produced by the most recent successful [`generate`](Self::generate).
    pub fn last_symbol(&self) -> Option<&EncodedSymbol> {
        self.last.as_ref()
    }

    /// Encodes `text`, caches the result as the last symbol and returns it.
    ///
    /// The caller is responsible for rejecting empty text. On failure the
    /// previously cached symbol is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the encoder rejects the data, for example
    /// because it does not fit in the largest QR version.
    pub fn generate(&mut self, text: &str) -> Result<&EncodedSymbol> {
        let qr = encode_text(text, &self.options)?;
        let image = render_modules(&qr, &self.options);
        info!(
            chars = text.chars().count(),
            modules = qr.width(),
            width = image.width(),
            height = image.height(),
            "generated QR code"
        );
        Ok(self.last.insert(EncodedSymbol::new(text, image)))
    }

    /// Writes the last symbol to `path` as a PNG file.
    ///
    /// Nothing is written when no symbol exists yet or the path is missing.
    ///
    /// # Errors
    ///
    /// * [`Error::NoSymbol`] if nothing has been generated.
    /// * [`Error::MissingPath`] if `path` is `None` or empty.
    /// * [`Error::Image`] if PNG encoding fails.
    /// * [`Error::Io`] if the file cannot be written.
    pub fn persist(&self, path: Option<&Path>) -> Result<()> {
        if self.last.is_none() {
            return Err(Error::NoSymbol);
        }
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(Error::MissingPath)?;

        let bytes = self.png_bytes()?;
        debug!(path = %path.display(), bytes = bytes.len(), "writing PNG");
        fs::write(path, bytes)?;
        info!(path = %path.display(), "saved QR code");
        Ok(())
    }

    /// PNG-encodes the last symbol in memory.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        let symbol = self.last.as_ref().ok_or(Error::NoSymbol)?;
        encode_png(symbol.image())
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_caches_symbol() {
        let mut generator = QrGenerator::new();
        assert!(generator.last_symbol().is_none());

        let (w, h) = {
            let symbol = generator.generate("hello").unwrap();
            (symbol.width(), symbol.height())
        };
        assert_eq!((w, h), (310, 310));
        assert_eq!(generator.last_symbol().unwrap().text(), "hello");
    }

    #[test]
    fn test_second_generate_replaces_first() {
        let mut generator = QrGenerator::new();
        generator.generate("hello").unwrap();
        let long = "the quick brown fox jumps over the lazy dog ".repeat(3);
        let second = generator.generate(&long).unwrap().clone();

        let mut fresh = QrGenerator::new();
        let expected = fresh.generate(&long).unwrap();

        assert_eq!(generator.last_symbol(), Some(expected));
        assert_eq!(&second, expected);
        assert!(second.width() > 310);
    }

    #[test]
    fn test_failed_generate_keeps_previous_symbol() {
        let mut generator = QrGenerator::new();
        generator.generate("hello").unwrap();
        let err = generator.generate(&"x".repeat(8000)).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
        assert_eq!(generator.last_symbol().unwrap().text(), "hello");
    }

    #[test]
    fn test_persist_without_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let generator = QrGenerator::new();

        let err = generator.persist(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::NoSymbol));
        assert!(!path.exists());
    }

    #[test]
    fn test_persist_without_path() {
        let mut generator = QrGenerator::new();
        generator.generate("hello").unwrap();
        assert!(matches!(generator.persist(None), Err(Error::MissingPath)));
        assert!(matches!(
            generator.persist(Some(Path::new(""))),
            Err(Error::MissingPath)
        ));
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut generator = QrGenerator::new();
        generator.generate("hello").unwrap();
        generator.persist(Some(&path)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
        assert_eq!(bytes, generator.png_bytes().unwrap());
        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(&decoded, generator.last_symbol().unwrap().image());
    }

    #[test]
    fn test_persist_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let mut generator = QrGenerator::new();
        generator.generate("hello").unwrap();
        assert!(matches!(
            generator.persist(Some(&path)),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_with_options() {
        let options = RenderOptions {
            module_px: 4,
            ..RenderOptions::default()
        };
        let mut generator = QrGenerator::with_options(options);
        assert_eq!(generator.options().module_px, 4);
        assert_eq!(generator.generate("hello").unwrap().width(), 124);
    }
}
