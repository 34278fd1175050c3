pub mod image;
pub mod property;
pub mod socket;
pub mod socket_value;

pub use image::ImageTensor;
pub use property::PropertyValue;
pub use socket::{SocketConstraint, SocketDefinition, SocketDirection, SocketKind};
pub use socket_value::{SocketValue, SocketValues};
