//! Owned image tensor in NHWC layout.

use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// Pixel tensor of shape (batch, height, width, channels).
///
/// Samples are `f32` normalized to `[0.0, 1.0]`, stored row-major with the
/// channel index varying fastest. This is the value that flows through
/// `Image` sockets; nodes that only route images never inspect the data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImageTensor {
    batch: usize,
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<f32>,
}

impl ImageTensor {
    /// Build a tensor from raw samples. The data length must match the shape.
    pub fn new(
        batch: usize,
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, LibraryError> {
        let expected = batch * height * width * channels;
        if data.len() != expected {
            return Err(LibraryError::InvalidArgument(format!(
                "tensor data length {} does not match shape ({}, {}, {}, {})",
                data.len(),
                batch,
                height,
                width,
                channels
            )));
        }
        Ok(Self {
            batch,
            height,
            width,
            channels,
            data,
        })
    }

    /// All-zero tensor of the given shape.
    pub fn zeros(batch: usize, height: usize, width: usize, channels: usize) -> Self {
        Self {
            batch,
            height,
            width,
            channels,
            data: vec![0.0; batch * height * width * channels],
        }
    }

    /// Single-batch black RGB image of shape (1, height, width, 3).
    pub fn black(width: u32, height: u32) -> Self {
        Self::zeros(1, height as usize, width as usize, 3)
    }

    pub fn shape(&self) -> (usize, usize, usize, usize) {
        (self.batch, self.height, self.width, self.channels)
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Number of samples per batch element.
    pub fn pixel_count(&self) -> usize {
        self.height * self.width * self.channels
    }

    /// Sample at (batch, y, x, channel), or `None` when out of bounds.
    pub fn sample(&self, batch: usize, y: usize, x: usize, channel: usize) -> Option<f32> {
        if batch >= self.batch || y >= self.height || x >= self.width || channel >= self.channels {
            return None;
        }
        let index =
            ((batch * self.height + y) * self.width + x) * self.channels + channel;
        self.data.get(index).copied()
    }
}
