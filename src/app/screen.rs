//! Story screen - the single card of header image, headline, and metadata

use super::App;
use crate::theme;
use crate::ui::components;
use eframe::egui;

impl App {
    /// Render the story top to bottom: cropped header image (when present),
    /// two-line headline, then the location and date lines.
    pub(crate) fn render_story(&mut self, ui: &mut egui::Ui) {
        if let Some(texture) = &self.header_texture {
            let desired = egui::vec2(ui.available_width(), theme::HEADER_IMAGE_HEIGHT);
            let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
            if ui.is_rect_visible(rect) {
                components::rounded_cover_image(ui, texture, rect, theme::RADIUS_IMAGE);
            }
        }

        ui.add(egui::Label::new(components::headline_job(
            self.story.headline,
            ui.available_width(),
        )));
        ui.add(components::body_label(self.story.location));
        ui.add(components::body_label(self.story.date));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Story;
    use crate::ui::components::HEADLINE_MAX_ROWS;
    use std::sync::Arc;

    const TEST_WIDTH: f32 = 390.0;
    const TEST_HEIGHT: f32 = 760.0;

    /// Drive one frame at a fixed window size and return the painted shapes.
    fn run_frame(app: &mut App, ctx: &egui::Context) -> Vec<egui::Shape> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(TEST_WIDTH, TEST_HEIGHT),
            )),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| app.show(ctx));
        output.shapes.into_iter().map(|c| c.shape).collect()
    }

    fn collect_galleys(shapes: &[egui::Shape], out: &mut Vec<(egui::Pos2, Arc<egui::Galley>)>) {
        for shape in shapes {
            match shape {
                egui::Shape::Text(text) => out.push((text.pos, text.galley.clone())),
                egui::Shape::Vec(nested) => collect_galleys(nested, out),
                _ => {}
            }
        }
    }

    /// All text in the frame, top to bottom.
    fn frame_texts(shapes: &[egui::Shape]) -> Vec<String> {
        let mut galleys = Vec::new();
        collect_galleys(shapes, &mut galleys);
        galleys.sort_by(|a, b| a.0.y.total_cmp(&b.0.y));
        galleys
            .into_iter()
            .map(|(_, galley)| galley.text().to_owned())
            .collect()
    }

    /// The bounding rect of the painted header image, if any.
    fn find_header_rect(shapes: &[egui::Shape]) -> Option<egui::Rect> {
        for shape in shapes {
            match shape {
                egui::Shape::Vec(nested) => {
                    if let Some(rect) = find_header_rect(nested) {
                        return Some(rect);
                    }
                }
                egui::Shape::Text(_) => {}
                other => {
                    let rect = other.visual_bounding_rect();
                    if (rect.height() - theme::HEADER_IMAGE_HEIGHT).abs() < 1.0 {
                        return Some(rect);
                    }
                }
            }
        }
        None
    }

    #[test]
    fn screen_shows_story_texts_in_order() {
        let ctx = egui::Context::default();
        let mut app = App::new(&ctx);
        let shapes = run_frame(&mut app, &ctx);

        let story = Story::sample();
        let texts = frame_texts(&shapes);
        assert_eq!(texts, vec![story.headline, story.location, story.date]);
    }

    #[test]
    fn headline_is_limited_to_two_rows() {
        let ctx = egui::Context::default();
        let mut app = App::new(&ctx);
        let shapes = run_frame(&mut app, &ctx);

        let mut galleys = Vec::new();
        collect_galleys(&shapes, &mut galleys);
        let headline = galleys
            .iter()
            .map(|(_, galley)| galley)
            .find(|galley| galley.text() == Story::sample().headline)
            .unwrap();
        assert_eq!(headline.rows.len(), HEADLINE_MAX_ROWS);
        assert!(headline.elided);
    }

    #[test]
    fn header_image_fills_width_at_fixed_height() {
        let ctx = egui::Context::default();
        let mut app = App::new(&ctx);
        assert!(app.header_texture.is_some());
        let shapes = run_frame(&mut app, &ctx);

        let rect = find_header_rect(&shapes).unwrap();
        let content_width = TEST_WIDTH - 2.0 * theme::SCREEN_PADDING;
        assert!((rect.width() - content_width).abs() < 1.0);
        assert!((rect.min.x - theme::SCREEN_PADDING).abs() < 1.0);
        assert!((rect.min.y - theme::SCREEN_PADDING).abs() < 1.0);
    }

    #[test]
    fn image_less_story_renders_texts_only() {
        let ctx = egui::Context::default();
        let story = Story {
            header_image: None,
            ..Story::sample()
        };
        let mut app = App::with_story(&ctx, story);
        assert!(app.header_texture.is_none());
        let shapes = run_frame(&mut app, &ctx);

        assert_eq!(frame_texts(&shapes).len(), 3);
        assert!(find_header_rect(&shapes).is_none());
    }
}
