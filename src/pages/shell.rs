use super::{Page, PageContext};
use crate::router::RoutePattern;

/// The `/app` page: an overview of the running application
#[derive(Debug, Default)]
pub struct ShellPage;

impl Page for ShellPage {
    fn title(&self) -> String {
        "App".to_owned()
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) {
        ui.heading("Scribble");
        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
        ui.separator();

        ui.strong("Routes");
        for pattern in RoutePattern::ALL {
            ui.monospace(pattern.as_str());
        }
        ui.separator();

        ui.strong("Open pages");
        for path in ctx.loaded_paths {
            if ui.link(path).clicked() {
                ctx.navigator.go(path.clone());
            }
        }
        ui.separator();

        ui.label(format!("Artworks shared: {}", ctx.share.saved_count()));
    }
}
