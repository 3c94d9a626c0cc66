use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

use crate::config::TensorLayout;
use crate::error::DetectError;

/// Largest centered square that fits inside the image.
pub fn center_crop_square(image: &DynamicImage) -> DynamicImage {
    let (w, h) = (image.width(), image.height());
    let side = w.min(h);
    image.crop_imm((w - side) / 2, (h - side) / 2, side, side)
}

/// Map a channel value from `0..=255` to `-1.0..=1.0`.
fn normalize(value: u8) -> f32 {
    value as f32 / 127.5 - 1.0
}

/// Crop, resize and normalize an image into a single-batch input tensor.
pub fn image_to_tensor(
    image: &DynamicImage,
    size: u32,
    layout: TensorLayout,
) -> Result<Tensor, DetectError> {
    if image.width() == 0 || image.height() == 0 || size == 0 {
        return Err(DetectError::Inference(format!(
            "cannot build a {size}x{size} input from a {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let rgb = center_crop_square(image)
        .resize_exact(size, size, imageops::FilterType::Triangle)
        .to_rgb8();
    let s = size as usize;

    let tensor = match layout {
        TensorLayout::Nhwc => tract_ndarray::Array4::from_shape_fn((1, s, s, 3), |(_, y, x, c)| {
            normalize(rgb.get_pixel(x as u32, y as u32)[c])
        })
        .into_tensor(),
        TensorLayout::Nchw => tract_ndarray::Array4::from_shape_fn((1, 3, s, s), |(_, c, y, x)| {
            normalize(rgb.get_pixel(x as u32, y as u32)[c])
        })
        .into_tensor(),
    };

    Ok(tensor)
}

/// Input shape the model is pinned to.
pub fn input_shape(size: u32, layout: TensorLayout) -> [usize; 4] {
    let s = size as usize;
    match layout {
        TensorLayout::Nhwc => [1, s, s, 3],
        TensorLayout::Nchw => [1, 3, s, s],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use image::{ImageBuffer, Rgb};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_nhwc_shape_and_range() {
        let tensor = image_to_tensor(&solid(50, 50, [255, 0, 255]), 32, TensorLayout::Nhwc).unwrap();
        assert_eq!(tensor.shape(), &[1, 32, 32, 3]);

        let view = tensor.to_array_view::<f32>().unwrap();
        assert_abs_diff_eq!(view[[0, 0, 0, 0]], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(view[[0, 0, 0, 1]], -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(view[[0, 31, 31, 2]], 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_nchw_shape() {
        let tensor = image_to_tensor(&solid(40, 20, [0, 255, 0]), 16, TensorLayout::Nchw).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 16, 16]);

        let view = tensor.to_array_view::<f32>().unwrap();
        assert_abs_diff_eq!(view[[0, 0, 8, 8]], -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(view[[0, 1, 8, 8]], 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_center_crop_discards_sides() {
        // 300x100: red borders, green 100x100 center.
        let mut img = ImageBuffer::from_pixel(300, 100, Rgb([255u8, 0, 0]));
        for y in 0..100 {
            for x in 100..200 {
                img.put_pixel(x, y, Rgb([0, 255, 0]));
            }
        }
        let cropped = center_crop_square(&DynamicImage::ImageRgb8(img));
        assert_eq!((cropped.width(), cropped.height()), (100, 100));

        let rgb = cropped.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([0, 255, 0]));
        assert_eq!(rgb.get_pixel(99, 99), &Rgb([0, 255, 0]));
    }

    #[test]
    fn test_mid_gray_is_near_zero() {
        let tensor = image_to_tensor(&solid(10, 10, [128, 128, 128]), 8, TensorLayout::Nhwc).unwrap();
        let view = tensor.to_array_view::<f32>().unwrap();
        let expected = 128.0 / 127.5 - 1.0;
        assert_abs_diff_eq!(view[[0, 4, 4, 1]], expected, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_size_rejected() {
        let empty = DynamicImage::new_rgb8(0, 0);
        assert!(image_to_tensor(&empty, 8, TensorLayout::Nhwc).is_err());
    }

    #[test]
    fn test_input_shape() {
        assert_eq!(input_shape(224, TensorLayout::Nhwc), [1, 224, 224, 3]);
        assert_eq!(input_shape(224, TensorLayout::Nchw), [1, 3, 224, 224]);
    }
}
