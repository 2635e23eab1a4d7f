//! Centralized theme constants for News Story
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Surfaces
// =============================================================================
pub const SURFACE: Color32 = Color32::WHITE;
pub const BACKGROUND: Color32 = Color32::WHITE;
pub const SURFACE_DIM: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf5); // gray-100

// =============================================================================
// COLORS - Accent (Purple)
// =============================================================================
pub const PRIMARY: Color32 = Color32::from_rgb(0x62, 0x00, 0xee); // purple-500

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x21, 0x21, 0x21); // near-black headline ink
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x66, 0x66, 0x66); // muted gray for metadata

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADLINE: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SCREEN_PADDING: f32 = 16.0;
pub const HEADER_IMAGE_HEIGHT: f32 = 180.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_IMAGE: f32 = 4.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: SURFACE,
        window_fill: SURFACE,
        extreme_bg_color: BACKGROUND,
        faint_bg_color: SURFACE_DIM,
        hyperlink_color: PRIMARY,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgba_unmultiplied(0x62, 0x00, 0xee, 40), // purple-500 ~16% alpha
            stroke: egui::Stroke::NONE,
        },
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_SM);
    });
}

// =============================================================================
// HELPER - Screen frame
// =============================================================================
pub fn screen_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(SURFACE)
        .inner_margin(egui::Margin::same(SCREEN_PADDING as i8))
}
