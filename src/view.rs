//! The contract between the window and the controller.
//!
//! A [`Presentation`] renders whatever the controller hands it and shows
//! notices. User actions travel the other way as [`Intent`]s.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::symbol::EncodedSymbol;

pub const WINDOW_TITLE: &str = "QR Code Generator";

pub const GENERATE_LABEL: &str = "Generate QR";
pub const SAVE_LABEL: &str = "Save as PNG";
pub const MESSAGING_LABEL: &str = "Open WhatsApp Web";
pub const COPY_LABEL: &str = "Copy image";

pub const GENERATE_TOOLTIP: &str = "Generate a QR code from the text above";
pub const SAVE_TOOLTIP: &str = "Save the current QR code as a PNG file";
pub const MESSAGING_TOOLTIP: &str = "Open WhatsApp Web in your browser";
pub const IMAGE_TOOLTIP: &str = "Right-click to copy the image";

pub const ABOUT_TITLE: &str = "About";
pub const ABOUT_TEXT: &str = "QR Code Generator\n\nType some text, press \"Generate QR\" \
and save the result as a PNG image or copy it to the clipboard.";

pub const SAVED_TITLE: &str = "Save QR";
pub const SAVED_MESSAGE: &str = "The QR code was saved successfully.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save the QR code.";
pub const COPIED_TITLE: &str = "Copy QR";
pub const COPIED_MESSAGE: &str = "The QR code was copied to the clipboard.";

/// A user action forwarded to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Generate(String),
    Save(PathBuf),
    Copy,
    OpenMessagingPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A modal message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

impl From<&Error> for Notice {
    fn from(err: &Error) -> Self {
        Notice::error(err.to_string())
    }
}

/// The interactive surface: displays symbols and notices.
pub trait Presentation {
    /// Show `symbol` in the image area, replacing anything shown before.
    fn display(&mut self, symbol: &EncodedSymbol);

    /// Show a modal message.
    fn notify(&mut self, notice: Notice);
}

/// Turns the text field contents into a generate intent.
///
/// Empty text is rejected here so that it never reaches the generator.
pub fn generate_intent(text: &str) -> Result<Intent> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(Intent::Generate(text.to_string()))
}

/// Appends `.png` to a chosen save path that has no extension.
pub fn with_png_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("png");
    }
    path
}
