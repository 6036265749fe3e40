use crate::stroke::{Brush, Tool};

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    StrokeStarted {
        index: usize,
        tool: Tool,
    },
    StrokeExtended {
        index: usize,
        /// Number of points in the open stroke after the extension
        points: usize,
    },
    StrokeEnded {
        index: usize,
    },
    Undone {
        drawing_len: usize,
        redo_len: usize,
    },
    Redone {
        drawing_len: usize,
        redo_len: usize,
    },
    BrushChanged(Brush),
}
