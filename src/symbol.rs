use image::GrayImage;

use crate::helper::gray_to_rgba;

/// A rendered QR code together with the text it encodes.
///
/// Instances are immutable after creation; a new generation replaces the
/// previous symbol rather than modifying it.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSymbol {
    text: String,
    image: GrayImage,
}

impl EncodedSymbol {
    pub(crate) fn new(text: impl Into<String>, image: GrayImage) -> Self {
        Self {
            text: text.into(),
            image,
        }
    }

    /// The text this symbol encodes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The rendered raster.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA pixels, as expected by texture uploads and clipboards.
    pub fn to_rgba(&self) -> Vec<u8> {
        gray_to_rgba(&self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let symbol = EncodedSymbol::new("abc", GrayImage::new(3, 4));
        assert_eq!(symbol.text(), "abc");
        assert_eq!((symbol.width(), symbol.height()), (3, 4));
        assert_eq!(symbol.to_rgba().len(), 3 * 4 * 4);
    }
}
