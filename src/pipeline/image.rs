//! Image normalisation: raw pixel buffer → bounded image → base64 PNG.
//!
//! The interaction surface hands over a packed 8-bit H×W×C pixel array, the
//! shape a typical image widget produces. This module turns it into an
//! in-memory image, caps the longest edge at [`MAX_IMAGE_EDGE`] pixels
//! (downscale only — small images pass through untouched), and encodes the
//! result as a base64 PNG part for the multimodal request body.
//!
//! PNG is chosen over JPEG because it is lossless; re-compressing a photo
//! the user just uploaded would degrade exactly the pixels the model is
//! asked to describe.

use crate::error::PromogenError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use std::io::Cursor;
use tracing::debug;

/// Longest edge of the image sent to the model, in pixels.
///
/// Multimodal APIs tile images in 512 px blocks; anything larger only adds
/// upload weight without adding tokens the model can use.
pub const MAX_IMAGE_EDGE: u32 = 512;

/// A packed 8-bit pixel array in row-major H×W×C layout.
///
/// `channels` must be 1 (grayscale), 3 (RGB), or 4 (RGBA), and
/// `data.len()` must equal `width * height * channels`.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Convenience constructor for RGB data.
    pub fn rgb(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels: 3,
            data,
        }
    }
}

/// A base64-encoded image ready for the generation request body.
#[derive(Debug, Clone)]
pub struct InlineImage {
    /// MIME type of the encoded bytes, always `image/png` here.
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// Decode a pixel buffer into an image object.
///
/// Fails with [`PromogenError::ImageDecode`] when the channel count is
/// unsupported or the buffer length does not match the declared shape.
pub fn decode_pixels(buffer: &PixelBuffer) -> Result<DynamicImage, PromogenError> {
    let expected = buffer.width as usize * buffer.height as usize * buffer.channels as usize;
    if expected == 0 {
        return Err(PromogenError::ImageDecode {
            detail: format!("empty image shape {}x{}", buffer.width, buffer.height),
        });
    }
    if buffer.data.len() != expected {
        return Err(PromogenError::ImageDecode {
            detail: format!(
                "buffer length {} does not match shape {}x{}x{} (expected {})",
                buffer.data.len(),
                buffer.height,
                buffer.width,
                buffer.channels,
                expected
            ),
        });
    }

    let data = buffer.data.clone();
    let img = match buffer.channels {
        1 => GrayImage::from_raw(buffer.width, buffer.height, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(buffer.width, buffer.height, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(buffer.width, buffer.height, data).map(DynamicImage::ImageRgba8),
        n => {
            return Err(PromogenError::ImageDecode {
                detail: format!("unsupported channel count {n} (expected 1, 3, or 4)"),
            })
        }
    };

    img.ok_or_else(|| PromogenError::ImageDecode {
        detail: "pixel container construction failed".into(),
    })
}

/// Cap the longest edge at `max_edge` pixels, preserving aspect ratio.
///
/// Downscale only: an image that already fits is returned unchanged, pixel
/// for pixel. The operation is deterministic — the same input always yields
/// the same output dimensions.
pub fn bound_image(img: DynamicImage, max_edge: u32) -> DynamicImage {
    if img.width() <= max_edge && img.height() <= max_edge {
        return img;
    }
    let bounded = img.thumbnail(max_edge, max_edge);
    debug!(
        "Downscaled image {}x{} → {}x{}",
        img.width(),
        img.height(),
        bounded.width(),
        bounded.height()
    );
    bounded
}

/// Encode a normalised image as a base64 PNG part.
pub fn encode_inline(img: &DynamicImage) -> Result<InlineImage, PromogenError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PromogenError::ImageDecode {
            detail: format!("PNG encoding failed: {e}"),
        })?;

    Ok(InlineImage {
        mime_type: "image/png".to_string(),
        data: STANDARD.encode(&buf),
    })
}

/// Full normalisation: decode, bound to [`MAX_IMAGE_EDGE`], encode.
pub fn normalize(buffer: &PixelBuffer) -> Result<InlineImage, PromogenError> {
    let img = decode_pixels(buffer)?;
    let img = bound_image(img, MAX_IMAGE_EDGE);
    encode_inline(&img)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_buffer(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::rgb(width, height, vec![128; (width * height * 3) as usize])
    }

    #[test]
    fn decode_valid_rgb() {
        let img = decode_pixels(&rgb_buffer(4, 2)).unwrap();
        assert_eq!((img.width(), img.height()), (4, 2));
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        let buffer = PixelBuffer::rgb(4, 2, vec![0; 5]);
        let err = decode_pixels(&buffer).unwrap_err();
        assert!(matches!(err, PromogenError::ImageDecode { .. }));
    }

    #[test]
    fn decode_rejects_odd_channel_count() {
        let buffer = PixelBuffer {
            width: 2,
            height: 2,
            channels: 2,
            data: vec![0; 8],
        };
        let err = decode_pixels(&buffer).unwrap_err();
        assert!(err.to_string().contains("channel count 2"));
    }

    #[test]
    fn small_image_passes_through_unchanged() {
        let img = decode_pixels(&rgb_buffer(100, 50)).unwrap();
        let bounded = bound_image(img, MAX_IMAGE_EDGE);
        assert_eq!((bounded.width(), bounded.height()), (100, 50));
    }

    #[test]
    fn exactly_512_is_not_resized() {
        let img = decode_pixels(&rgb_buffer(512, 512)).unwrap();
        let bounded = bound_image(img, MAX_IMAGE_EDGE);
        assert_eq!((bounded.width(), bounded.height()), (512, 512));
    }

    #[test]
    fn large_image_is_bounded_with_aspect_kept() {
        let img = decode_pixels(&rgb_buffer(1024, 768)).unwrap();
        let bounded = bound_image(img, MAX_IMAGE_EDGE);
        assert!(bounded.width().max(bounded.height()) <= MAX_IMAGE_EDGE);
        assert_eq!((bounded.width(), bounded.height()), (512, 384));
    }

    #[test]
    fn bounding_is_deterministic() {
        let a = bound_image(decode_pixels(&rgb_buffer(2000, 900)).unwrap(), MAX_IMAGE_EDGE);
        let b = bound_image(decode_pixels(&rgb_buffer(2000, 900)).unwrap(), MAX_IMAGE_EDGE);
        assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    }

    #[test]
    fn encode_produces_png_base64() {
        let inline = normalize(&rgb_buffer(10, 10)).unwrap();
        assert_eq!(inline.mime_type, "image/png");
        let decoded = STANDARD.decode(&inline.data).expect("valid base64");
        assert_eq!(&decoded[1..4], b"PNG");
    }
}
