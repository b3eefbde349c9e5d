use crate::error::DecodeError;
use image::{ImageReader, RgbImage};
use std::io::Cursor;

/// Decode an uploaded image into a 3 channel RGB grid.
///
/// The format is sniffed from the bytes themselves. Alpha is dropped and
/// grayscale or palette images are expanded, dimensions are kept as-is.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let image = reader.decode()?;
    Ok(image.to_rgb8())
}
