//! Image decoding backed by the `image` crate

use image::DynamicImage;

use super::traits::Decoder;
use crate::error::FetchError;

/// Decoder that guesses the format from the bytes and decodes with `image`
///
/// # Examples
///
/// ```
/// use image_dl::fetch::{Decoder, ImageDecoder};
///
/// let result = ImageDecoder.decode(b"not an image");
/// assert!(result.is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageDecoder;

impl Decoder for ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, FetchError> {
        if bytes.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(image::load_from_memory(bytes)?)
    }
}
