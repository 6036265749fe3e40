use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::error::BrushError;

/// Which implement paints a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
        }
    }
}

/// Brush width in points. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct BrushSize(f32);

impl BrushSize {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 20.0;

    /// Slider marks offered by the toolbar
    pub const MARKS: [f32; 6] = [1.0, 3.0, 5.0, 10.0, 15.0, 20.0];

    pub fn new(size: f32) -> Result<Self, BrushError> {
        if size.is_finite() && size > 0.0 {
            Ok(Self(size))
        } else {
            Err(BrushError::InvalidSize(size))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(5.0)
    }
}

impl TryFrom<f32> for BrushSize {
    type Error = BrushError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BrushSize> for f32 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// The parameters the next stroke will be started with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brush {
    pub tool: Tool,
    pub color: Color32,
    pub size: BrushSize,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            color: Color32::BLACK,
            size: BrushSize::default(),
        }
    }
}

/// One continuous pen or eraser path from press to release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    tool: Tool,
    points: Vec<Pos2>,
    color: Color32,
    size: BrushSize,
}

impl Stroke {
    /// Start a stroke at `origin` using the given brush
    pub fn begin(brush: Brush, origin: Pos2) -> Self {
        Self {
            tool: brush.tool,
            points: vec![origin],
            color: brush.color,
            size: brush.size,
        }
    }

    pub fn new(tool: Tool, points: Vec<Pos2>, color: Color32, size: BrushSize) -> Self {
        Self {
            tool,
            points,
            color,
            size,
        }
    }

    // Only the history manager extends strokes, and only the open one.
    pub(crate) fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Points as `[x0, y0, x1, y1, ...]`
    pub fn flat_points(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Paint color. Meaningless for eraser strokes, which always cut out.
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> BrushSize {
        self.size
    }

    pub fn is_eraser(&self) -> bool {
        self.tool == Tool::Eraser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_brush_size_validation() {
        assert!(BrushSize::new(0.0).is_err());
        assert!(BrushSize::new(-3.0).is_err());
        assert!(BrushSize::new(f32::NAN).is_err());
        assert!(BrushSize::new(f32::INFINITY).is_err());
        assert_eq!(BrushSize::new(3.0).unwrap().get(), 3.0);
    }

    #[test]
    fn test_flat_points() {
        let mut stroke = Stroke::begin(Brush::default(), pos2(1.0, 2.0));
        stroke.push_point(pos2(3.0, 4.0));
        assert_eq!(stroke.flat_points(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_serde_names() {
        let stroke = Stroke::new(
            Tool::Eraser,
            vec![pos2(0.0, 0.0)],
            Color32::RED,
            BrushSize::new(10.0).unwrap(),
        );
        let json = serde_json::to_value(&stroke).unwrap();
        assert_eq!(json["tool"], "eraser");
        assert_eq!(json["size"], 10.0);

        let back: Stroke = serde_json::from_value(json).unwrap();
        assert_eq!(back, stroke);
    }

    #[test]
    fn test_invalid_size_rejected_on_deserialize() {
        let result: Result<BrushSize, _> = serde_json::from_str("0.0");
        assert!(result.is_err());
    }
}
