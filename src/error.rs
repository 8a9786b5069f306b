use thiserror::Error;

/// Everything that can go wrong between the text field and the saved PNG.
#[derive(Debug, Error)]
pub enum Error {
    /// The text field was empty when "generate" was requested.
    #[error("Please enter some text to generate the QR code.")]
    EmptyInput,

    /// Save or copy was requested before any QR code was generated.
    #[error("No QR code has been generated yet.")]
    NoSymbol,

    /// Save was requested without a usable file path.
    #[error("No file path was given.")]
    MissingPath,

    #[error("failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}
