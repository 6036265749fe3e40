use egui::{Pos2, Rect};

/// Pointer events as the canvas sees them, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Pos2),
    Move(Pos2),
    Release,
}

/// Raw primary-button pointer state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// The position in screen coordinates
    pub pos: Option<Pos2>,
    /// Primary button went down this frame over the canvas
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
    /// Primary button is currently held
    pub down: bool,
}

impl PointerSample {
    /// Read the primary button state from egui.
    ///
    /// `over_canvas` should come from the canvas response so that presses on
    /// widgets layered above the canvas do not start strokes.
    pub fn from_ctx(ctx: &egui::Context, over_canvas: bool) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.interact_pos(),
            pressed: over_canvas && input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            down: input.pointer.primary_down(),
        })
    }
}

/// Turns per-frame pointer samples into press/move/release events
#[derive(Debug, Default)]
pub struct PointerTracker {
    dragging: bool,
    last_pos: Option<Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn update(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if sample.pressed {
            if let Some(pos) = sample.pos.filter(|pos| canvas_rect.contains(*pos)) {
                events.push(PointerEvent::Press(to_local(pos)));
                self.dragging = true;
                self.last_pos = Some(pos);
            }
        } else if self.dragging {
            if let Some(pos) = sample.pos {
                if Some(pos) != self.last_pos {
                    events.push(PointerEvent::Move(to_local(pos)));
                    self.last_pos = Some(pos);
                }
            }
        }

        if self.dragging && (sample.released || !sample.down) {
            events.push(PointerEvent::Release);
            self.dragging = false;
            self.last_pos = None;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), vec2(500.0, 500.0))
    }

    fn held(pos: Pos2) -> PointerSample {
        PointerSample {
            pos: Some(pos),
            down: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_drag_sequence_in_local_coordinates() {
        let mut tracker = PointerTracker::new();

        let press = PointerSample {
            pressed: true,
            ..held(pos2(110.0, 60.0))
        };
        assert_eq!(
            tracker.update(press, canvas()),
            vec![PointerEvent::Press(pos2(10.0, 10.0))]
        );
        assert!(tracker.is_dragging());

        assert_eq!(
            tracker.update(held(pos2(115.0, 65.0)), canvas()),
            vec![PointerEvent::Move(pos2(15.0, 15.0))]
        );

        // Unchanged position produces nothing
        assert!(tracker.update(held(pos2(115.0, 65.0)), canvas()).is_empty());

        let release = PointerSample {
            pos: Some(pos2(115.0, 65.0)),
            released: true,
            ..Default::default()
        };
        assert_eq!(tracker.update(release, canvas()), vec![PointerEvent::Release]);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut tracker = PointerTracker::new();
        let press = PointerSample {
            pressed: true,
            ..held(pos2(10.0, 10.0))
        };
        assert!(tracker.update(press, canvas()).is_empty());
        assert!(tracker.update(held(pos2(200.0, 200.0)), canvas()).is_empty());
    }

    #[test]
    fn test_moves_outside_canvas_continue_the_drag() {
        let mut tracker = PointerTracker::new();
        let press = PointerSample {
            pressed: true,
            ..held(pos2(120.0, 70.0))
        };
        tracker.update(press, canvas());

        assert_eq!(
            tracker.update(held(pos2(90.0, 70.0)), canvas()),
            vec![PointerEvent::Move(pos2(-10.0, 20.0))]
        );
    }

    #[test]
    fn test_click_in_one_frame() {
        let mut tracker = PointerTracker::new();
        let click = PointerSample {
            pos: Some(pos2(200.0, 200.0)),
            pressed: true,
            released: true,
            down: false,
        };
        assert_eq!(
            tracker.update(click, canvas()),
            vec![PointerEvent::Press(pos2(100.0, 150.0)), PointerEvent::Release]
        );
    }
}
