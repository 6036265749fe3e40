use std::cell::RefCell;
use crate::event::{EventHandler, HistoryEvent};

/// A simple event bus for broadcasting history events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Emit an event to all registered handlers
    ///
    /// Handlers must not emit on the same bus from inside `handle_event`.
    pub fn emit(&self, event: HistoryEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Counter(Rc<RefCell<usize>>);

    impl EventHandler for Counter {
        fn handle_event(&mut self, _event: &HistoryEvent) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_emit_reaches_every_handler() {
        let bus = EventBus::new();
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        bus.subscribe(Box::new(Counter(first.clone())));
        bus.subscribe(Box::new(Counter(second.clone())));
        assert_eq!(bus.handler_count(), 2);

        bus.emit(HistoryEvent::StrokeEnded { index: 0 });
        bus.emit(HistoryEvent::StrokeEnded { index: 1 });

        assert_eq!(*first.borrow(), 2);
        assert_eq!(*second.borrow(), 2);
    }
}
