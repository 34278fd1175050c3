//! Image selector nodes: route one of two optional image inputs downstream.
//!
//! Two node types are provided. `image.selector` picks whichever input is
//! connected and falls back to a fixed-size black image. The advanced
//! variant adds forced/priority modes, configurable fallback dimensions,
//! and a string output describing the decision taken.

pub mod advanced;
pub mod selector;

use library::model::property::PropertyValue;
use library::model::socket::{SocketDefinition, SocketKind};
use library::model::socket_value::{SocketValue, SocketValues};
use library::plugin::node_types::{NodeCategory, NodeTypeDefinition};
use library::plugin::traits::{NodePlugin, Plugin};
use library::LibraryError;
use log::debug;

use crate::advanced::{
    select_advanced, SelectionMode, DEFAULT_FALLBACK_DIMENSION, FALLBACK_DIMENSION_MAX,
    FALLBACK_DIMENSION_MIN, FALLBACK_DIMENSION_STEP,
};
use crate::selector::{select, FallbackMode};

/// Type id of the basic selector node.
pub const SELECTOR_TYPE_ID: &str = "image.selector";
/// Type id of the advanced selector node.
pub const SELECTOR_ADVANCED_TYPE_ID: &str = "image.selector_advanced";

pub struct ImageSelectorPlugin;

impl Plugin for ImageSelectorPlugin {
    fn id(&self) -> &'static str {
        "image_selector_plugin"
    }

    fn name(&self) -> String {
        "Image Selector".to_string()
    }

    fn version(&self) -> (u32, u32, u32) {
        (0, 1, 0)
    }
}

impl NodePlugin for ImageSelectorPlugin {
    fn node_types(&self) -> Vec<NodeTypeDefinition> {
        vec![selector_node_type(), selector_advanced_node_type()]
    }

    fn evaluate(
        &self,
        type_id: &str,
        inputs: &SocketValues,
    ) -> Result<Vec<SocketValue>, LibraryError> {
        match type_id {
            SELECTOR_TYPE_ID => evaluate_selector(inputs),
            SELECTOR_ADVANCED_TYPE_ID => evaluate_selector_advanced(inputs),
            other => Err(LibraryError::Plugin(format!(
                "unknown node type '{}'",
                other
            ))),
        }
    }
}

fn selector_node_type() -> NodeTypeDefinition {
    use SocketKind::*;

    NodeTypeDefinition::new(SELECTOR_TYPE_ID, "Image Bypasser", NodeCategory::Image)
        .with_description("Outputs image1 or image2 based on which one is bypassed")
        .with_inputs(vec![
            SocketDefinition::input("image1", "Image 1", Image).optional(),
            SocketDefinition::input("image2", "Image 2", Image).optional(),
            SocketDefinition::input("fallback_mode", "Fallback Mode", Enum)
                .optional()
                .with_default(PropertyValue::from(FallbackMode::default().as_str()))
                .with_options(FallbackMode::variants()),
        ])
        .with_outputs(vec![SocketDefinition::output(
            "output_image",
            "Output Image",
            Image,
        )])
}

fn selector_advanced_node_type() -> NodeTypeDefinition {
    use SocketKind::*;

    NodeTypeDefinition::new(
        SELECTOR_ADVANCED_TYPE_ID,
        "Image Bypasser (Advanced)",
        NodeCategory::Image,
    )
    .with_description("Image selection with forced modes, sized fallback and decision report")
    .with_inputs(vec![
        SocketDefinition::input("image1", "Image 1", Image).optional(),
        SocketDefinition::input("image2", "Image 2", Image).optional(),
        SocketDefinition::input("selection_mode", "Selection Mode", Enum)
            .optional()
            .with_default(PropertyValue::from(SelectionMode::default().as_str()))
            .with_options(SelectionMode::variants()),
        SocketDefinition::input("fallback_width", "Fallback Width", Integer)
            .optional()
            .with_default(PropertyValue::from(DEFAULT_FALLBACK_DIMENSION))
            .with_range(
                FALLBACK_DIMENSION_MIN,
                FALLBACK_DIMENSION_MAX,
                FALLBACK_DIMENSION_STEP,
            ),
        SocketDefinition::input("fallback_height", "Fallback Height", Integer)
            .optional()
            .with_default(PropertyValue::from(DEFAULT_FALLBACK_DIMENSION))
            .with_range(
                FALLBACK_DIMENSION_MIN,
                FALLBACK_DIMENSION_MAX,
                FALLBACK_DIMENSION_STEP,
            ),
    ])
    .with_outputs(vec![
        SocketDefinition::output("output_image", "Output Image", Image),
        SocketDefinition::output("selection_info", "Selection Info", String),
    ])
}

fn evaluate_selector(inputs: &SocketValues) -> Result<Vec<SocketValue>, LibraryError> {
    let mode = match inputs.get_str("fallback_mode") {
        Some(raw) => FallbackMode::parse(raw)?,
        None => FallbackMode::default(),
    };
    let image1 = inputs.get_image("image1");
    let image2 = inputs.get_image("image2");

    let selected = select(image1, image2, mode);
    Ok(vec![SocketValue::Image(selected)])
}

fn evaluate_selector_advanced(inputs: &SocketValues) -> Result<Vec<SocketValue>, LibraryError> {
    let mode = match inputs.get_str("selection_mode") {
        Some(raw) => SelectionMode::parse(raw)?,
        None => SelectionMode::default(),
    };
    let width = fallback_dimension(inputs, "fallback_width")?;
    let height = fallback_dimension(inputs, "fallback_height")?;
    let image1 = inputs.get_image("image1");
    let image2 = inputs.get_image("image2");

    let (selected, info) = select_advanced(image1, image2, mode, width, height);
    debug!("image.selector_advanced: {}", info);
    Ok(vec![
        SocketValue::Image(selected),
        SocketValue::String(info),
    ])
}

fn fallback_dimension(inputs: &SocketValues, name: &str) -> Result<u32, LibraryError> {
    let value = inputs.get_integer_or(name, DEFAULT_FALLBACK_DIMENSION);
    u32::try_from(value).map_err(|_| {
        LibraryError::InvalidArgument(format!("{} must be positive, got {}", name, value))
    })
}

#[allow(improper_ctypes_definitions)]
#[no_mangle]
pub extern "C" fn create_node_plugin() -> *mut dyn NodePlugin {
    let plugin: Box<dyn NodePlugin> = Box::new(ImageSelectorPlugin);
    Box::into_raw(plugin)
}
