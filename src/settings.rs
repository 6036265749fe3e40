use serde::{Deserialize, Serialize};

use crate::stroke::Brush;
use crate::surface::DEFAULT_SURFACE_SIZE;

/// User settings, persisted through eframe storage between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    /// Brush new canvases start with
    pub brush: Brush,
    /// Width and height of new canvases, in pixels
    pub canvas_size: [u32; 2],
    /// Where native builds write shared PNGs. `None` uses `./shared`.
    pub export_dir: Option<std::path::PathBuf>,
    /// Path shown when the app was last closed
    pub last_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brush: Brush::default(),
            canvas_size: DEFAULT_SURFACE_SIZE,
            export_dir: None,
            last_path: "/canvas".to_owned(),
        }
    }
}

impl Settings {
    pub fn export_dir(&self) -> std::path::PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| std::path::PathBuf::from("shared"))
    }

    /// Canvas size clamped to something a texture can hold
    pub fn surface_size(&self) -> [u32; 2] {
        let [w, h] = self.canvas_size;
        [w.clamp(1, 4096), h.clamp(1, 4096)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Tool;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"last_path": "/app"}"#).unwrap();
        assert_eq!(settings.last_path, "/app");
        assert_eq!(settings.canvas_size, [500, 500]);
        assert_eq!(settings.brush.tool, Tool::Pen);
        assert_eq!(settings.brush.size.get(), 5.0);
    }

    #[test]
    fn test_surface_size_clamped() {
        let settings = Settings {
            canvas_size: [0, 100_000],
            ..Settings::default()
        };
        assert_eq!(settings.surface_size(), [1, 4096]);
    }
}
