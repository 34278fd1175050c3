//! Basic image selection: pass whichever input is connected, with a fixed
//! black fallback when both are bypassed.

use library::model::image::ImageTensor;
use library::LibraryError;

/// Side length of the fallback image.
pub const FALLBACK_SIZE: u32 = 512;

/// Tie-break rule applied when both image inputs are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    #[default]
    Image1Priority,
    Image2Priority,
}

impl FallbackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackMode::Image1Priority => "image1_priority",
            FallbackMode::Image2Priority => "image2_priority",
        }
    }

    /// All mode strings, in UI order.
    pub fn variants() -> &'static [&'static str] {
        &["image1_priority", "image2_priority"]
    }

    pub fn parse(value: &str) -> Result<Self, LibraryError> {
        match value {
            "image1_priority" => Ok(FallbackMode::Image1Priority),
            "image2_priority" => Ok(FallbackMode::Image2Priority),
            other => Err(LibraryError::InvalidArgument(format!(
                "unknown fallback mode '{}'",
                other
            ))),
        }
    }
}

/// Select which image to pass downstream.
///
/// A connected input always wins over a bypassed one; `mode` only breaks
/// the tie when both are connected. With both inputs bypassed, a black
/// 512x512 RGB image is synthesized so downstream nodes still receive
/// pixel data.
pub fn select(
    image1: Option<ImageTensor>,
    image2: Option<ImageTensor>,
    mode: FallbackMode,
) -> ImageTensor {
    match (image1, image2) {
        (Some(image1), None) => image1,
        (None, Some(image2)) => image2,
        (Some(image1), Some(image2)) => match mode {
            FallbackMode::Image1Priority => image1,
            FallbackMode::Image2Priority => image2,
        },
        (None, None) => ImageTensor::black(FALLBACK_SIZE, FALLBACK_SIZE),
    }
}
