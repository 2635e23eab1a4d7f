//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;
use egui::text::{LayoutJob, TextFormat, TextWrapping};

/// Headlines never run past this many lines; overflow is elided.
pub const HEADLINE_MAX_ROWS: usize = 2;

/// Layout job for the headline: wraps to the given width, capped at
/// [`HEADLINE_MAX_ROWS`] rows with a trailing ellipsis.
pub fn headline_job(text: &str, max_width: f32) -> LayoutJob {
    let mut job = LayoutJob::single_section(
        text.to_owned(),
        TextFormat {
            font_id: egui::FontId::proportional(theme::FONT_HEADLINE),
            color: theme::TEXT_PRIMARY,
            ..Default::default()
        },
    );
    job.wrap = TextWrapping {
        max_width,
        max_rows: HEADLINE_MAX_ROWS,
        break_anywhere: false,
        overflow_character: Some('…'),
    };
    job
}

/// Secondary text line (location, date) in the muted body style.
pub fn body_label(text: &str) -> egui::Label {
    egui::Label::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(theme::TEXT_SECONDARY),
    )
}

/// UV rectangle that crops the source to cover the destination, like
/// a background image scaled to fill. The excess dimension is trimmed
/// symmetrically so the crop stays centered.
pub fn cover_crop_uv(src_w: f32, src_h: f32, dst_w: f32, dst_h: f32) -> egui::Rect {
    let src_aspect = src_w / src_h;
    let dst_aspect = dst_w / dst_h;
    if src_aspect > dst_aspect {
        // Source is wider than the target: trim left and right
        let kept = dst_aspect / src_aspect;
        let margin = (1.0 - kept) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        // Source is taller than the target: trim top and bottom
        let kept = src_aspect / dst_aspect;
        let margin = (1.0 - kept) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

/// Paint a texture into `rect` with rounded corners, center-cropped to
/// preserve the source aspect ratio.
pub fn rounded_cover_image(
    ui: &mut egui::Ui,
    texture: &egui::TextureHandle,
    rect: egui::Rect,
    corner_radius: f32,
) {
    let tex_size = texture.size_vec2();
    let uv = cover_crop_uv(tex_size.x, tex_size.y, rect.width(), rect.height());
    // Textured RectShape clips the image to the rounded corners
    let brush = egui::epaint::Brush {
        fill_texture_id: texture.id(),
        uv,
    };
    let mut shape = egui::epaint::RectShape::filled(
        rect,
        egui::CornerRadius::same(corner_radius as u8),
        egui::Color32::WHITE,
    );
    shape.brush = Some(std::sync::Arc::new(brush));
    ui.painter().add(shape);
}
