use egui::{Key, KeyboardShortcut, Modifiers};
use image::RgbaImage;

use super::{Page, PageContext};
use crate::error::ShareError;
use crate::event::LogEventHandler;
use crate::history::StrokeHistory;
use crate::panels::{tools_panel, CanvasView};
use crate::router::CanvasId;
use crate::settings::Settings;
use crate::share::{Artifact, ShareHost};
use crate::stroke::{Brush, Tool};
use crate::surface::RenderSurface;

const REDO_SHIFT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_Y: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

/// The drawing page, one per canvas route
pub struct CanvasPage {
    id: CanvasId,
    history: StrokeHistory,
    surface: RenderSurface,
    background: Option<RgbaImage>,
    view: CanvasView,
}

impl CanvasPage {
    pub fn new(id: Option<CanvasId>, settings: &Settings) -> Self {
        let id = id.unwrap_or_else(CanvasId::generate);
        let history = StrokeHistory::with_brush(settings.brush);
        history.events().subscribe(Box::new(LogEventHandler));

        let [width, height] = settings.surface_size();
        log::info!("Opening canvas {id} ({width}x{height})");

        Self {
            view: CanvasView::new(format!("canvas-{id}")),
            id,
            history,
            surface: RenderSurface::new(width, height),
            background: None,
        }
    }

    /// Paint strokes over `image` instead of a transparent surface
    pub fn with_background(mut self, image: RgbaImage) -> Self {
        self.background = Some(image);
        self.view.invalidate();
        self
    }

    pub fn id(&self) -> &CanvasId {
        &self.id
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut StrokeHistory {
        &mut self.history
    }

    /// The full-resolution image the share buttons export
    pub fn rasterize(&self) -> RgbaImage {
        self.surface
            .paint(self.background.as_ref(), self.history.strokes())
    }

    pub fn save_file(&self, host: &mut dyn ShareHost) -> Result<(), ShareError> {
        let artifact = Artifact::from_surface(&self.rasterize(), Some(self.id.clone()))?;
        log::info!("Sharing {}", artifact.file_name());
        host.save_file(artifact)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Keys belong to the focused text field, e.g. the color picker's hex edit
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input_mut(|input| self.apply_shortcuts(input));
    }

    fn apply_shortcuts(&mut self, input: &mut egui::InputState) {
        // Cmd+Z also matches Cmd+Shift+Z, so redo is checked first
        if input.consume_shortcut(&REDO_SHIFT) || input.consume_shortcut(&REDO_Y) {
            self.history.redo();
        } else if input.consume_shortcut(&UNDO) {
            self.history.undo();
        }

        if input.key_pressed(Key::P) {
            self.history.set_tool(Tool::Pen);
        } else if input.key_pressed(Key::E) {
            self.history.set_tool(Tool::Eraser);
        }
    }

    fn share_buttons(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let previous = ctx.share.has_previous();
            if ui
                .add_enabled(previous, egui::Button::new("Share Previous Art"))
                .on_hover_text("Share the last exported art again")
                .clicked()
            {
                match ctx.share.share_prev() {
                    Ok(id) => *ctx.status = Some(format!("Shared {} again", id.simple())),
                    Err(err) => {
                        log::error!("share previous failed: {err}");
                        *ctx.status = Some(format!("Share failed: {err}"));
                    }
                }
            }

            if ui
                .button("Share Art")
                .on_hover_text("Share your current art")
                .clicked()
            {
                match self.save_file(&mut *ctx.share) {
                    Ok(()) => *ctx.status = Some("Art shared".to_owned()),
                    Err(err) => {
                        log::error!("share failed: {err}");
                        *ctx.status = Some(format!("Share failed: {err}"));
                    }
                }
            }
        });
    }
}

impl Page for CanvasPage {
    fn title(&self) -> String {
        format!("Canvas {}", self.id)
    }

    fn brush(&self) -> Option<Brush> {
        Some(self.history.brush())
    }

    fn on_leave(&mut self) {
        log::debug!("Releasing texture of canvas {}", self.id);
        self.view.release();
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) {
        self.handle_shortcuts(ui.ctx());

        tools_panel::toolbar(ui, &mut self.history);
        ui.separator();

        ui.horizontal_top(|ui| {
            self.view
                .show(ui, &mut self.history, &self.surface, self.background.as_ref());
            ui.vertical(|ui| {
                ui.add_enabled_ui(self.history.brush().tool == Tool::Pen, |ui| {
                    tools_panel::color_panel(ui, &mut self.history);
                });
            });
        });

        ui.add_space(8.0);
        self.share_buttons(ui, ctx);
        ui.separator();
        tools_panel::history_debug(ui, &self.history, ctx.status);
    }
}
