pub mod central_panel;
pub mod tools_panel;

pub use central_panel::CanvasView;
