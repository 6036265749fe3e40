use egui::{Color32, Pos2};
use serde::Serialize;

use crate::event::{EventBus, HistoryEvent};
use crate::input::PointerEvent;
use crate::stroke::{Brush, BrushSize, Stroke, Tool};

/// Owns the drawing, the redo buffer and the stroke currently being dragged.
///
/// The drawing and the redo buffer are disjoint: a stroke only moves between
/// them through [`StrokeHistory::undo`] and [`StrokeHistory::redo`]. While a
/// drag is open, the open stroke is always the last element of the drawing.
///
/// Every change to the drawing or the redo buffer bumps
/// [`StrokeHistory::version`], and every state change is reported as a
/// [`HistoryEvent`] on [`StrokeHistory::events`].
#[derive(Debug, Default)]
pub struct StrokeHistory {
    /// Committed strokes in paint order
    drawing: Vec<Stroke>,
    /// Undone strokes, most recently undone last
    redo_buffer: Vec<Stroke>,
    brush: Brush,
    is_dragging: bool,
    version: u64,
    events: EventBus,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history whose first stroke will use `brush`
    pub fn with_brush(brush: Brush) -> Self {
        Self {
            brush,
            ..Self::default()
        }
    }

    /// Start a new stroke at `position` with the active brush.
    ///
    /// Any redo history is dropped. If a previous drag was never released
    /// (the pointer left the surface, for example), that stroke is ended
    /// first and stays in the drawing as it was.
    pub fn begin_stroke(&mut self, position: Pos2) {
        if self.is_dragging {
            log::debug!("begin_stroke while dragging; closing the open stroke");
            self.end_stroke();
        }

        self.drawing.push(Stroke::begin(self.brush, position));
        self.redo_buffer.clear();
        self.is_dragging = true;
        self.mark_modified();

        self.events.emit(HistoryEvent::StrokeStarted {
            index: self.drawing.len() - 1,
            tool: self.brush.tool,
        });
    }

    /// Append `position` to the open stroke. Does nothing without a drag.
    pub fn extend_stroke(&mut self, position: Pos2) {
        if !self.is_dragging {
            return;
        }
        let Some(stroke) = self.drawing.last_mut() else {
            // The open stroke can only disappear through undo, which closes the drag.
            self.is_dragging = false;
            return;
        };

        stroke.push_point(position);
        let points = stroke.points().len();
        self.mark_modified();

        self.events.emit(HistoryEvent::StrokeExtended {
            index: self.drawing.len() - 1,
            points,
        });
    }

    /// Release the open stroke. The drawing itself is untouched.
    pub fn end_stroke(&mut self) {
        if !self.is_dragging {
            return;
        }
        self.is_dragging = false;

        if let Some(index) = self.drawing.len().checked_sub(1) {
            self.events.emit(HistoryEvent::StrokeEnded { index });
        }
    }

    /// Move the most recent stroke into the redo buffer.
    ///
    /// Returns `false` and leaves everything unchanged when the drawing is empty.
    pub fn undo(&mut self) -> bool {
        if self.drawing.is_empty() {
            return false;
        }
        // A stroke that is no longer in the drawing cannot stay open.
        self.end_stroke();
        let Some(stroke) = self.drawing.pop() else {
            return false;
        };
        self.redo_buffer.push(stroke);
        self.mark_modified();

        self.events.emit(HistoryEvent::Undone {
            drawing_len: self.drawing.len(),
            redo_len: self.redo_buffer.len(),
        });
        true
    }

    /// Move the most recently undone stroke back onto the drawing.
    ///
    /// Returns `false` and leaves everything unchanged when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.redo_buffer.pop() else {
            return false;
        };
        self.end_stroke();
        self.drawing.push(stroke);
        self.mark_modified();

        self.events.emit(HistoryEvent::Redone {
            drawing_len: self.drawing.len(),
            redo_len: self.redo_buffer.len(),
        });
        true
    }

    /// Route a canvas pointer event to the matching stroke operation
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(pos) => self.begin_stroke(pos),
            PointerEvent::Move(pos) => self.extend_stroke(pos),
            PointerEvent::Release => self.end_stroke(),
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.brush.tool != tool {
            self.brush.tool = tool;
            self.brush_changed();
        }
    }

    pub fn set_size(&mut self, size: BrushSize) {
        if self.brush.size != size {
            self.brush.size = size;
            self.brush_changed();
        }
    }

    pub fn set_color(&mut self, color: Color32) {
        if self.brush.color != color {
            self.brush.color = color;
            self.brush_changed();
        }
    }

    /// Snapshot of both sequences for diagnostics
    pub fn dump_state(&self) -> HistoryDump {
        HistoryDump {
            drawing: self.drawing.clone(),
            redo_buffer: self.redo_buffer.clone(),
            is_dragging: self.is_dragging,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.drawing
    }

    pub fn redo_buffer(&self) -> &[Stroke] {
        &self.redo_buffer
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn can_undo(&self) -> bool {
        !self.drawing.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    /// Changes whenever the drawing or redo buffer changes
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn mark_modified(&mut self) {
        self.version += 1;
    }

    fn brush_changed(&mut self) {
        self.events.emit(HistoryEvent::BrushChanged(self.brush));
    }
}

/// Read-only copy of the history, as produced by [`StrokeHistory::dump_state`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryDump {
    pub drawing: Vec<Stroke>,
    pub redo_buffer: Vec<Stroke>,
    pub is_dragging: bool,
}

impl HistoryDump {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
