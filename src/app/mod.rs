//! App module - contains the application state and screen rendering

mod screen;

use crate::story::Story;
use crate::theme;
use crate::utils;
use eframe::egui;
use tracing::warn;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) story: Story,
    pub(crate) header_texture: Option<egui::TextureHandle>,
}

// ============================================================================
// APP INITIALIZATION
// ============================================================================

impl App {
    pub fn new(ctx: &egui::Context) -> Self {
        Self::with_story(ctx, Story::sample())
    }

    /// Build the app around a specific story. The header texture is uploaded
    /// once here; if the image bytes do not decode, the screen renders text only.
    pub fn with_story(ctx: &egui::Context, story: Story) -> Self {
        // Force light theme
        ctx.set_theme(egui::Theme::Light);

        // Apply theme from theme.rs
        theme::apply_visuals(ctx);

        let header_texture = story.header_image.and_then(|bytes| {
            match utils::decode_embedded_image(bytes) {
                Ok(img) => {
                    Some(ctx.load_texture("story_header", img, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    warn!(error = %e, "Failed to decode header image, showing text only");
                    None
                }
            }
        });

        Self {
            story,
            header_texture,
        }
    }

    /// Render one frame. Separate from `eframe::App::update` so tests can
    /// drive frames on a bare `egui::Context`.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(theme::screen_frame())
            .show(ctx, |ui| {
                self.render_story(ui);
            });
    }
}
