use super::{Page, PageContext};
use crate::router::CanvasId;

#[derive(Debug, Default)]
pub struct HomePage;

impl Page for HomePage {
    fn title(&self) -> String {
        "Home".to_owned()
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Scribble");
            ui.label("Draw with a pen or eraser, undo and redo freely, then share your art.");
            ui.add_space(16.0);

            if ui.button("Start drawing").clicked() {
                ctx.navigator.go("/canvas");
            }
            if ui
                .button("New canvas")
                .on_hover_text("Open a canvas with its own shareable link")
                .clicked()
            {
                ctx.navigator.go(format!("/canvas/{}", CanvasId::generate()));
            }
        });
    }
}
