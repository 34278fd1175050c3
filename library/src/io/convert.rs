//! Conversions between `ImageTensor` and `image` crate buffers.
//!
//! Hosts keep decoded frames as ordinary RGB buffers; these helpers move
//! them across the socket boundary. No file I/O, scaling, or encoding.

use image::RgbImage;

use crate::error::LibraryError;
use crate::model::image::ImageTensor;

/// Build a single-batch tensor from an 8-bit RGB buffer, samples scaled to
/// [0.0, 1.0].
pub fn tensor_from_rgb(image: &RgbImage) -> Result<ImageTensor, LibraryError> {
    let (width, height) = image.dimensions();
    let data = image
        .as_raw()
        .iter()
        .map(|&sample| f32::from(sample) / 255.0)
        .collect();
    ImageTensor::new(1, height as usize, width as usize, 3, data)
}

/// Render the first batch element of a tensor back to an 8-bit RGB buffer.
///
/// The tensor must carry at least three channels; extra channels are
/// dropped. Samples are clamped to [0.0, 1.0] before quantization.
pub fn tensor_to_rgb(tensor: &ImageTensor) -> Result<RgbImage, LibraryError> {
    let (batch, height, width, channels) = tensor.shape();
    if batch == 0 {
        return Err(LibraryError::InvalidArgument(
            "cannot convert an empty-batch tensor to an image".to_string(),
        ));
    }
    if channels < 3 {
        return Err(LibraryError::InvalidArgument(format!(
            "tensor has {} channels, need at least 3",
            channels
        )));
    }

    let mut out = RgbImage::new(width as u32, height as u32);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        for c in 0..3 {
            let sample = tensor
                .sample(0, y as usize, x as usize, c)
                .unwrap_or(0.0)
                .clamp(0.0, 1.0);
            pixel.0[c] = (sample * 255.0).round() as u8;
        }
    }
    Ok(out)
}
