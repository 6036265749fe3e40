//! Chrome shared by every page: navigation bar, status line and the
//! fallback for unknown paths.

use crate::error::RouteError;
use crate::router::{Navigator, Route, RoutePattern};

const NAV_LINKS: [(&str, &str); 3] = [("Home", "/"), ("Canvas", "/canvas"), ("App", "/app")];

pub fn top_bar(
    ctx: &egui::Context,
    title: Option<&str>,
    current: Option<&Route>,
    navigator: &mut Navigator,
) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.strong("Scribble");
            if let Some(title) = title {
                ui.label(title);
            }
            ui.separator();

            let current_path = current.map(Route::path);
            for (label, path) in NAV_LINKS {
                let selected = current_path.as_deref() == Some(path);
                if ui.selectable_label(selected, label).clicked() && !selected {
                    navigator.go(path);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    });
}

pub fn status_bar(ctx: &egui::Context, status: &Option<String>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| match status {
            Some(message) => {
                ui.label(message);
            }
            None => {
                ui.weak("Ready");
            }
        });
    });
}

pub fn not_found(ui: &mut egui::Ui, error: &RouteError, navigator: &mut Navigator) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("Page not found");
        ui.label(error.to_string());
        ui.add_space(12.0);
        ui.label("Known routes:");
        for pattern in RoutePattern::ALL {
            ui.monospace(pattern.as_str());
        }
        ui.add_space(12.0);
        if ui.button("Go home").clicked() {
            navigator.go("/");
        }
    });
}
