//! Image canonicalization
//!
//! Turns a client payload (base64 image, optionally a `data:` URL) into the
//! exact tensor the classifier was trained on:
//!
//! 1. strip everything up to and including the first comma
//! 2. base64-decode
//! 3. parse the raster image
//! 4. convert to 8-bit grayscale
//! 5. resize to 28x28 (Lanczos3)
//! 6. invert intensity (`255 - v`)
//! 7. scale to `[0, 1]`
//! 8. lay out as (1, 28, 28, 1)
//!
//! Inversion is unconditional. A digit drawn light-on-dark comes out
//! dark-on-light; polarity is not detected.

mod tensor;

pub use tensor::{CanonicalTensor, IMAGE_SIDE, MAX_INTENSITY, TENSOR_LEN, TENSOR_SHAPE};

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};

use crate::error::CanonicalizeError;

/// Resampling filter used for the 28x28 resize.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Canonicalize a transport-encoded image.
pub fn canonicalize(encoded: &str) -> Result<CanonicalTensor, CanonicalizeError> {
    let bytes = decode_payload(encoded)?;
    canonicalize_bytes(&bytes)
}

/// Canonicalize raw image file bytes (PNG, JPEG, ...).
pub fn canonicalize_bytes(bytes: &[u8]) -> Result<CanonicalTensor, CanonicalizeError> {
    let image = image::load_from_memory(bytes)?;
    Ok(canonicalize_image(image))
}

/// Canonicalize an already decoded image. Infallible.
pub fn canonicalize_image(image: DynamicImage) -> CanonicalTensor {
    let gray = to_grayscale(image);
    let resized = imageops::resize(&gray, IMAGE_SIDE, IMAGE_SIDE, RESIZE_FILTER);

    let data = resized
        .into_raw()
        .into_iter()
        .map(|v| f32::from(u8::MAX - v) / MAX_INTENSITY)
        .collect();

    CanonicalTensor::from_normalized(data)
}

/// Strip an optional `scheme,` prefix and base64-decode the rest.
///
/// ASCII whitespace anywhere in the payload is ignored, so line-wrapped
/// (MIME style) base64 decodes the same as the unwrapped form.
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>, CanonicalizeError> {
    let payload = match encoded.split_once(',') {
        Some((_, rest)) => rest,
        None => encoded,
    };
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(BASE64_STANDARD.decode(compact)?)
}

fn to_grayscale(image: DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray,
        other => other.to_luma8(),
    }
}
