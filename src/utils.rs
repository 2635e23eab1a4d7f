//! Utility functions

/// Decode an embedded image (PNG bytes baked in via `include_bytes!`) into an
/// egui color image ready for texture upload.
pub fn decode_embedded_image(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &img))
}
