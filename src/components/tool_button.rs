use eframe::egui;
use crate::stroke::Tool;

/// Square toolbar button for a drawing tool, with an indicator bar underneath
/// showing the color the tool will paint with.
pub struct ToolButton {
    pub tool: Tool,
    pub icon: &'static str,
    pub selected: bool,
    /// Indicator color; `None` leaves the bar blank
    pub indicator: Option<egui::Color32>,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        let icon = match tool {
            Tool::Pen => "✏",
            Tool::Eraser => "⌫",
        };
        Self {
            tool,
            icon,
            selected,
            indicator: None,
        }
    }

    pub fn indicator(mut self, color: egui::Color32) -> Self {
        self.indicator = Some(color);
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());
        let split_y = rect.bottom() - 4.0;
        let face = egui::Rect::from_min_max(rect.min, egui::pos2(rect.right(), split_y));
        let bar = egui::Rect::from_min_max(egui::pos2(rect.left(), split_y), rect.max);

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(40)
            } else {
                egui::Color32::from_gray(30)
            };

            ui.painter().rect_filled(face, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                face.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    face,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }

            ui.painter().rect_filled(
                bar,
                0.0,
                self.indicator.unwrap_or(egui::Color32::WHITE),
            );
        }

        response.on_hover_text(self.tool.name())
    }
}
