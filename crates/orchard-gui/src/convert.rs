use image::DynamicImage;

/// Longest edge uploaded as a texture. Larger previews are downscaled.
const MAX_TEXTURE_EDGE: u32 = 2048;

/// Convert a decoded image to an egui ColorImage for the preview.
pub fn image_to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let rgba = if image.width() > MAX_TEXTURE_EDGE || image.height() > MAX_TEXTURE_EDGE {
        image.thumbnail(MAX_TEXTURE_EDGE, MAX_TEXTURE_EDGE).to_rgba8()
    } else {
        image.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
