use crate::components::ToolButton;
use crate::history::StrokeHistory;
use crate::stroke::{BrushSize, Tool};

/// Tool buttons, brush size and undo/redo, laid out in one row
pub fn toolbar(ui: &mut egui::Ui, history: &mut StrokeHistory) {
    ui.horizontal(|ui| {
        let brush = history.brush();

        for tool in [Tool::Pen, Tool::Eraser] {
            let selected = brush.tool == tool;
            let mut button = ToolButton::new(tool, selected);
            // Only the pen shows the color it will paint with
            if selected && tool == Tool::Pen {
                button = button.indicator(brush.color);
            }
            if button.show(ui).clicked() {
                log::info!("Tool selected from UI: {}", tool.name());
                history.set_tool(tool);
            }
        }

        ui.separator();
        size_slider(ui, history);
        ui.separator();

        if ui
            .add_enabled(history.can_undo(), egui::Button::new("⟲ Undo"))
            .on_hover_text("Ctrl+Z")
            .clicked()
        {
            history.undo();
        }
        if ui
            .add_enabled(history.can_redo(), egui::Button::new("⟳ Redo"))
            .on_hover_text("Ctrl+Shift+Z")
            .clicked()
        {
            history.redo();
        }
    });
}

fn size_slider(ui: &mut egui::Ui, history: &mut StrokeHistory) {
    let mut size = history.brush().size.get();

    let changed = ui
        .vertical(|ui| {
            let mut changed = ui
                .add(
                    egui::Slider::new(&mut size, BrushSize::MIN..=BrushSize::MAX)
                        .step_by(1.0)
                        .suffix("pt"),
                )
                .changed();

            ui.horizontal(|ui| {
                for mark in BrushSize::MARKS {
                    if ui.small_button(format!("{mark}pt")).clicked() {
                        size = mark;
                        changed = true;
                    }
                }
            });
            changed
        })
        .inner;

    if changed {
        match BrushSize::new(size) {
            Ok(size) => history.set_size(size),
            Err(err) => log::warn!("{err}"),
        }
    }
}

/// Inline color picker for the pen
pub fn color_panel(ui: &mut egui::Ui, history: &mut StrokeHistory) {
    let mut color = history.brush().color;
    if egui::color_picker::color_picker_color32(ui, &mut color, egui::color_picker::Alpha::Opaque) {
        history.set_color(color);
    }
}

/// Collapsible view of the history internals
pub fn history_debug(ui: &mut egui::Ui, history: &StrokeHistory, status: &mut Option<String>) {
    egui::CollapsingHeader::new("History debug").show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Strokes: {}", history.strokes().len()));
            ui.label(format!("Redo buffer: {}", history.redo_buffer().len()));
            ui.label(format!("Version: {}", history.version()));
        });

        if ui.button("Dump state").clicked() {
            match history.dump_state().to_json() {
                Ok(json) => {
                    log::info!("history state:\n{json}");
                    *status = Some("History state written to the log".to_owned());
                }
                Err(err) => log::error!("failed to dump history state: {err}"),
            }
        }
    });
}
