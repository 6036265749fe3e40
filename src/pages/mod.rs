pub mod canvas;
pub mod home;
pub mod layout;
pub mod shell;

pub use canvas::CanvasPage;
pub use home::HomePage;
pub use shell::ShellPage;

use std::cell::Cell;
use std::rc::Rc;

use crate::router::{Navigator, Route, RoutePattern, Router};
use crate::settings::Settings;
use crate::share::ShareHost;
use crate::stroke::Brush;

/// Everything a page may touch besides its own state
pub struct PageContext<'a> {
    pub navigator: &'a mut Navigator,
    pub share: &'a mut dyn ShareHost,
    /// One-line message shown in the layout's status bar
    pub status: &'a mut Option<String>,
    /// Paths of pages that have been built so far
    pub loaded_paths: &'a [String],
}

/// A screen reachable through the router
pub trait Page {
    fn title(&self) -> String;

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>);

    /// The brush this page draws with, if it draws at all
    fn brush(&self) -> Option<Brush> {
        None
    }

    /// Called when the router switches away from this page. The page stays
    /// loaded, so it should only drop what it can rebuild.
    fn on_leave(&mut self) {}
}

/// The routing table the app runs with.
///
/// New canvases start with whatever `brush` holds when they are first
/// visited, so a brush picked on one canvas carries over to the next.
pub fn app_router(settings: &Settings, brush: Rc<Cell<Brush>>) -> Router {
    let canvas_settings = settings.clone();
    let canvas_factory = move |route: &Route| -> Box<dyn Page> {
        let id = match route {
            Route::Canvas { id } => id.clone(),
            _ => None,
        };
        let settings = Settings {
            brush: brush.get(),
            ..canvas_settings.clone()
        };
        Box::new(CanvasPage::new(id, &settings))
    };

    Router::new()
        .route(RoutePattern::Home, |_| Box::new(HomePage::default()))
        .route(RoutePattern::Canvas, canvas_factory.clone())
        .route(RoutePattern::CanvasWithId, canvas_factory)
        .route(RoutePattern::App, |_| Box::new(ShellPage::default()))
}
