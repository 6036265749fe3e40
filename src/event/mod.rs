mod bus;
mod events;

pub use bus::EventBus;
pub use events::HistoryEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &HistoryEvent);
}

/// Forwards every history event to the `log` facade
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &HistoryEvent) {
        log::debug!("history: {:?}", event);
    }
}
