#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod geometry;
pub mod history;
pub mod input;
pub mod pages;
pub mod panels;
pub mod router;
pub mod settings;
pub mod share;
pub mod stroke;
pub mod surface;
pub mod texture_cache;
pub mod util;

pub use app::ScribbleApp;
pub use error::{BrushError, RouteError, ShareError, SurfaceError};
pub use event::{EventBus, EventHandler, HistoryEvent};
pub use history::StrokeHistory;
pub use input::{PointerEvent, PointerTracker};
pub use router::{Route, Router};
pub use share::{Artifact, ShareHost};
pub use stroke::{Brush, BrushSize, Stroke, Tool};
pub use surface::RenderSurface;
