use crate::error::Result;

use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

/*---- Rendering parameters ----*/

/// Fixed parameters used to turn text into a raster QR code.
///
/// The defaults produce black modules of 10x10 pixels on a white background,
/// surrounded by a 5-module quiet zone. The encoder starts at version 1 and
/// grows the symbol until the data fits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Side length of one module, in pixels.
    pub module_px: u32,
    /// Width of the quiet zone, in modules.
    pub border: u32,
    /// Error correction level handed to the encoder.
    pub ec_level: EcLevel,
    /// Luma value for dark modules.
    pub dark: u8,
    /// Luma value for light modules and the border.
    pub light: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_px: 10,
            border: 5,
            ec_level: EcLevel::M,
            dark: 0,
            light: 255,
        }
    }
}

/*---- Utilities ----*/

/// Encodes `text` into a QR code matrix.
pub fn encode_text(text: &str, options: &RenderOptions) -> Result<QrCode> {
    Ok(QrCode::with_error_correction_level(text.as_bytes(), options.ec_level)?)
}

/// Rasterizes a QR code into a grayscale image buffer.
///
/// Each module becomes a `module_px` square and `border` light modules are
/// added on every side, so the image is
/// `(width + 2 * border) * module_px` pixels square.
///
/// # Example
///
/// ```rust
/// use qrdesk::helper::{encode_text, render_modules, RenderOptions};
///
/// let options = RenderOptions::default();
/// let qr = encode_text("Hello, World!", &options).unwrap();
/// let img = render_modules(&qr, &options);
/// assert_eq!(img.width(), img.height());
/// ```
pub fn render_modules(qr: &QrCode, options: &RenderOptions) -> GrayImage {
    let modules = qr.width() as i64;
    let colors = qr.to_colors();
    let border = i64::from(options.border);
    let scale = options.module_px.max(1);
    let size = (modules as u32 + 2 * options.border) * scale;
    let mut img = ImageBuffer::new(size, size);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = i64::from(x / scale) - border;
        let qr_y = i64::from(y / scale) - border;
        let dark = (0..modules).contains(&qr_x)
            && (0..modules).contains(&qr_y)
            && colors[(qr_y * modules + qr_x) as usize] == Color::Dark;
        *pixel = if dark {
            Luma([options.dark])
        } else {
            Luma([options.light])
        };
    }

    img
}

/// Encodes a grayscale image as PNG bytes in memory.
pub fn encode_png(img: &GrayImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Expands a grayscale image into tightly packed RGBA pixels.
pub fn gray_to_rgba(img: &GrayImage) -> Vec<u8> {
    img.pixels()
        .flat_map(|Luma([v])| [*v, *v, *v, 255])
        .collect()
}
