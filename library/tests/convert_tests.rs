use image::{Rgb, RgbImage};
use library::io::convert::{tensor_from_rgb, tensor_to_rgb};
use library::model::image::ImageTensor;

#[test]
fn test_rgb_to_tensor_and_back() {
    let mut source = RgbImage::new(3, 2);
    source.put_pixel(0, 0, Rgb([255, 0, 0]));
    source.put_pixel(1, 0, Rgb([0, 255, 0]));
    source.put_pixel(2, 1, Rgb([0, 0, 255]));

    let tensor = tensor_from_rgb(&source).expect("conversion failed");
    assert_eq!(tensor.shape(), (1, 2, 3, 3));
    assert_eq!(tensor.sample(0, 0, 0, 0), Some(1.0));
    assert_eq!(tensor.sample(0, 0, 1, 1), Some(1.0));
    assert_eq!(tensor.sample(0, 0, 1, 0), Some(0.0));

    let restored = tensor_to_rgb(&tensor).expect("back-conversion failed");
    assert_eq!(restored, source);
}

#[test]
fn test_black_tensor_renders_black_pixels() {
    let tensor = ImageTensor::black(4, 4);
    let rendered = tensor_to_rgb(&tensor).expect("conversion failed");
    assert!(rendered.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn test_tensor_to_rgb_requires_three_channels() {
    let gray = ImageTensor::zeros(1, 4, 4, 1);
    assert!(tensor_to_rgb(&gray).is_err());
}
