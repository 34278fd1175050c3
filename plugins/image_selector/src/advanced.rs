//! Advanced image selection: forced/auto/priority modes, a sized fallback,
//! and a human-readable report of the decision taken.

use library::model::image::ImageTensor;
use library::LibraryError;

/// Default edge length for the fallback image.
pub const DEFAULT_FALLBACK_DIMENSION: i64 = 512;
/// Host-enforced bounds for the fallback dimensions.
pub const FALLBACK_DIMENSION_MIN: i64 = 64;
pub const FALLBACK_DIMENSION_MAX: i64 = 2048;
pub const FALLBACK_DIMENSION_STEP: i64 = 64;

/// How the advanced selector decides between its two image inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Whichever input is connected; image1 wins when both are.
    #[default]
    AutoSelect,
    /// Image1 or the fallback, never image2.
    ForceImage1,
    /// Image2 or the fallback, never image1.
    ForceImage2,
    /// Image1 if connected, else image2, else the fallback.
    Image1Priority,
    /// Image2 if connected, else image1, else the fallback.
    Image2Priority,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::AutoSelect => "auto_select",
            SelectionMode::ForceImage1 => "force_image1",
            SelectionMode::ForceImage2 => "force_image2",
            SelectionMode::Image1Priority => "image1_priority",
            SelectionMode::Image2Priority => "image2_priority",
        }
    }

    /// All mode strings, in UI order.
    pub fn variants() -> &'static [&'static str] {
        &[
            "auto_select",
            "force_image1",
            "force_image2",
            "image1_priority",
            "image2_priority",
        ]
    }

    pub fn parse(value: &str) -> Result<Self, LibraryError> {
        match value {
            "auto_select" => Ok(SelectionMode::AutoSelect),
            "force_image1" => Ok(SelectionMode::ForceImage1),
            "force_image2" => Ok(SelectionMode::ForceImage2),
            "image1_priority" => Ok(SelectionMode::Image1Priority),
            "image2_priority" => Ok(SelectionMode::Image2Priority),
            other => Err(LibraryError::InvalidArgument(format!(
                "unknown selection mode '{}'",
                other
            ))),
        }
    }
}

/// Select an image and report the decision taken.
///
/// The fallback is an all-zero tensor of shape
/// (1, fallback_height, fallback_width, 3), emitted whenever the mode
/// cannot produce a connected input.
pub fn select_advanced(
    image1: Option<ImageTensor>,
    image2: Option<ImageTensor>,
    mode: SelectionMode,
    fallback_width: u32,
    fallback_height: u32,
) -> (ImageTensor, String) {
    let fallback = || ImageTensor::black(fallback_width, fallback_height);

    match mode {
        SelectionMode::ForceImage1 => match image1 {
            Some(image) => (image, "Forced selection: image1".to_string()),
            None => (
                fallback(),
                "Forced image1 but bypassed, using fallback".to_string(),
            ),
        },
        SelectionMode::ForceImage2 => match image2 {
            Some(image) => (image, "Forced selection: image2".to_string()),
            None => (
                fallback(),
                "Forced image2 but bypassed, using fallback".to_string(),
            ),
        },
        SelectionMode::AutoSelect => match (image1, image2) {
            (Some(image), None) => (image, "Auto selected: image1 (image2 bypassed)".to_string()),
            (None, Some(image)) => (image, "Auto selected: image2 (image1 bypassed)".to_string()),
            (Some(image), Some(_)) => (
                image,
                "Auto selected: image1 (both available, image1 priority)".to_string(),
            ),
            (None, None) => (
                fallback(),
                "Auto selected: fallback (both bypassed)".to_string(),
            ),
        },
        SelectionMode::Image1Priority => match (image1, image2) {
            (Some(image), _) => (image, "Priority selection: image1".to_string()),
            (None, Some(image)) => (
                image,
                "Priority selection: image2 (image1 bypassed)".to_string(),
            ),
            (None, None) => (
                fallback(),
                "Priority selection: fallback (both bypassed)".to_string(),
            ),
        },
        SelectionMode::Image2Priority => match (image1, image2) {
            (_, Some(image)) => (image, "Priority selection: image2".to_string()),
            (Some(image), None) => (
                image,
                "Priority selection: image1 (image2 bypassed)".to_string(),
            ),
            (None, None) => (
                fallback(),
                "Priority selection: fallback (both bypassed)".to_string(),
            ),
        },
    }
}
