use image::RgbaImage;

use crate::history::StrokeHistory;
use crate::input::{PointerSample, PointerTracker};
use crate::surface::{self, RenderSurface};
use crate::texture_cache::CanvasTexture;

/// The on-screen drawing stage: turns pointer input into stroke operations
/// and shows the rasterized drawing.
#[derive(Debug)]
pub struct CanvasView {
    texture: CanvasTexture,
    pointer: PointerTracker,
}

impl CanvasView {
    pub fn new(texture_name: impl Into<String>) -> Self {
        Self {
            texture: CanvasTexture::new(texture_name),
            pointer: PointerTracker::new(),
        }
    }

    /// Force a re-rasterization, e.g. after the background changed
    pub fn invalidate(&mut self) {
        self.texture.invalidate();
    }

    /// Free the texture while the canvas is off screen
    pub fn release(&mut self) {
        self.texture.release();
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_resident()
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        history: &mut StrokeHistory,
        surface: &RenderSurface,
        background: Option<&RgbaImage>,
    ) -> egui::Response {
        let [width, height] = surface.size();
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width as f32, height as f32), egui::Sense::drag());
        let rect = response.rect;

        let sample = PointerSample::from_ctx(ui.ctx(), response.hovered());
        for event in self.pointer.update(sample, rect) {
            history.handle_pointer(event);
        }

        let texture_id = self.texture.get_or_update(ui.ctx(), history.version(), || {
            surface::to_color_image(&surface.paint(background, history.strokes()))
        });

        // Erased areas show the stage color through
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        painter.image(
            texture_id,
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::BLACK));

        response.on_hover_cursor(egui::CursorIcon::Crosshair)
    }
}
