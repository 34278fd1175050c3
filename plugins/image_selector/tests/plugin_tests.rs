use std::sync::Arc;

use image_selector_plugin::{
    ImageSelectorPlugin, SELECTOR_ADVANCED_TYPE_ID, SELECTOR_TYPE_ID,
};
use library::model::image::ImageTensor;
use library::model::property::PropertyValue;
use library::model::socket::{SocketConstraint, SocketKind};
use library::model::socket_value::{SocketValue, SocketValues};
use library::plugin::traits::NodePlugin;
use library::plugin::{NodeCategory, PluginManager};
use library::LibraryError;

fn manager() -> PluginManager {
    let _ = env_logger::builder().is_test(true).try_init();
    let manager = PluginManager::new();
    manager.register_node_plugin(Arc::new(ImageSelectorPlugin));
    manager
}

fn marked(value: f32) -> ImageTensor {
    ImageTensor::new(1, 2, 2, 3, vec![value; 12]).unwrap()
}

#[test]
fn registers_both_node_types() {
    let manager = manager();

    assert_eq!(
        manager.get_node_type_ids(),
        vec![
            SELECTOR_TYPE_ID.to_string(),
            SELECTOR_ADVANCED_TYPE_ID.to_string()
        ]
    );

    let names = manager.get_node_display_names();
    assert_eq!(
        names.get(SELECTOR_TYPE_ID),
        Some(&"Image Bypasser".to_string())
    );
    assert_eq!(
        names.get(SELECTOR_ADVANCED_TYPE_ID),
        Some(&"Image Bypasser (Advanced)".to_string())
    );
}

#[test]
fn selector_schema_matches_contract() {
    let def = manager()
        .get_node_type(SELECTOR_TYPE_ID)
        .expect("Missing selector node type");

    assert_eq!(def.category, NodeCategory::Image);

    let image1 = def.input("image1").expect("Missing image1 socket");
    assert_eq!(image1.data_type, SocketKind::Image);
    assert!(image1.optional);
    let image2 = def.input("image2").expect("Missing image2 socket");
    assert!(image2.optional);

    let mode = def.input("fallback_mode").expect("Missing fallback_mode");
    assert_eq!(mode.data_type, SocketKind::Enum);
    assert_eq!(
        mode.default_value,
        Some(PropertyValue::from("image1_priority"))
    );
    assert_eq!(
        mode.constraint,
        Some(SocketConstraint::Choice {
            options: vec![
                "image1_priority".to_string(),
                "image2_priority".to_string()
            ]
        })
    );

    assert_eq!(def.outputs.len(), 1);
    assert_eq!(def.outputs[0].name, "output_image");
    assert_eq!(def.outputs[0].data_type, SocketKind::Image);
}

#[test]
fn advanced_schema_matches_contract() {
    let def = manager()
        .get_node_type(SELECTOR_ADVANCED_TYPE_ID)
        .expect("Missing advanced node type");

    let mode = def.input("selection_mode").expect("Missing selection_mode");
    assert_eq!(mode.default_value, Some(PropertyValue::from("auto_select")));
    assert_eq!(
        mode.constraint,
        Some(SocketConstraint::Choice {
            options: vec![
                "auto_select".to_string(),
                "force_image1".to_string(),
                "force_image2".to_string(),
                "image1_priority".to_string(),
                "image2_priority".to_string()
            ]
        })
    );

    for name in ["fallback_width", "fallback_height"] {
        let socket = def.input(name).unwrap_or_else(|| panic!("Missing {}", name));
        assert_eq!(socket.data_type, SocketKind::Integer);
        assert!(socket.optional);
        assert_eq!(socket.default_value, Some(PropertyValue::Integer(512)));
        assert_eq!(
            socket.constraint,
            Some(SocketConstraint::IntegerRange {
                min: 64,
                max: 2048,
                step: 64
            })
        );
    }

    let output_names: Vec<&str> = def.outputs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(output_names, vec!["output_image", "selection_info"]);
    assert_eq!(def.outputs[1].data_type, SocketKind::String);
}

#[test]
fn evaluate_selector_through_manager() {
    let manager = manager();

    // Presence overrides priority: image1 connected, image2 bypassed.
    let inputs = SocketValues::new()
        .with("image1", SocketValue::Image(marked(0.25)))
        .with("image2", SocketValue::None)
        .with(
            "fallback_mode",
            SocketValue::String("image2_priority".to_string()),
        );
    let outputs = manager
        .evaluate(SELECTOR_TYPE_ID, &inputs)
        .expect("evaluate failed");
    assert_eq!(outputs.len(), 1);
    let image = outputs[0].clone().into_image().expect("not an image");
    assert_eq!(image, marked(0.25));
}

#[test]
fn evaluate_selector_defaults_without_mode_socket() {
    let manager = manager();

    let inputs = SocketValues::new()
        .with("image1", SocketValue::Image(marked(0.25)))
        .with("image2", SocketValue::Image(marked(0.75)));
    let outputs = manager
        .evaluate(SELECTOR_TYPE_ID, &inputs)
        .expect("evaluate failed");
    let image = outputs[0].clone().into_image().expect("not an image");
    // image1_priority is the default.
    assert_eq!(image, marked(0.25));
}

#[test]
fn evaluate_selector_fallback_when_all_bypassed() {
    let manager = manager();

    let outputs = manager
        .evaluate(SELECTOR_TYPE_ID, &SocketValues::new())
        .expect("evaluate failed");
    let image = outputs[0].clone().into_image().expect("not an image");
    assert_eq!(image.shape(), (1, 512, 512, 3));
    assert!(image.data().iter().all(|&v| v == 0.0));
}

#[test]
fn evaluate_advanced_through_manager() {
    let manager = manager();

    let inputs = SocketValues::new()
        .with(
            "selection_mode",
            SocketValue::String("force_image1".to_string()),
        )
        .with("fallback_width", SocketValue::Integer(128))
        .with("fallback_height", SocketValue::Integer(256));
    let outputs = manager
        .evaluate(SELECTOR_ADVANCED_TYPE_ID, &inputs)
        .expect("evaluate failed");

    assert_eq!(outputs.len(), 2);
    let image = outputs[0].clone().into_image().expect("not an image");
    assert_eq!(image.shape(), (1, 256, 128, 3));
    assert!(image.data().iter().all(|&v| v == 0.0));
    assert_eq!(
        outputs[1].as_str(),
        Some("Forced image1 but bypassed, using fallback")
    );
}

#[test]
fn evaluate_advanced_defaults_to_auto_select() {
    let manager = manager();

    let inputs = SocketValues::new()
        .with("image1", SocketValue::Image(marked(0.25)))
        .with("image2", SocketValue::Image(marked(0.75)));
    let outputs = manager
        .evaluate(SELECTOR_ADVANCED_TYPE_ID, &inputs)
        .expect("evaluate failed");

    let image = outputs[0].clone().into_image().expect("not an image");
    assert_eq!(image, marked(0.25));
    assert_eq!(
        outputs[1].as_str(),
        Some("Auto selected: image1 (both available, image1 priority)")
    );
}

#[test]
fn evaluate_rejects_malformed_mode_string() {
    let plugin = ImageSelectorPlugin;

    let inputs =
        SocketValues::new().with("fallback_mode", SocketValue::String("sideways".to_string()));
    let result = plugin.evaluate(SELECTOR_TYPE_ID, &inputs);
    assert!(matches!(result, Err(LibraryError::InvalidArgument(_))));
}

#[test]
fn evaluate_rejects_negative_fallback_dimension() {
    let plugin = ImageSelectorPlugin;

    let inputs = SocketValues::new().with("fallback_width", SocketValue::Integer(-64));
    let result = plugin.evaluate(SELECTOR_ADVANCED_TYPE_ID, &inputs);
    assert!(matches!(result, Err(LibraryError::InvalidArgument(_))));
}

#[test]
fn evaluate_unknown_type_id_errors() {
    let plugin = ImageSelectorPlugin;

    let result = plugin.evaluate("image.selector_pro", &SocketValues::new());
    assert!(matches!(result, Err(LibraryError::Plugin(_))));
}
