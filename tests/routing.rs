use std::cell::Cell;
use std::rc::Rc;

use scribble::pages::{Page, PageContext};
use scribble::router::{CanvasId, Navigator, Route, RoutePattern, Router};
use scribble::share::MemoryShareHost;
use scribble::RouteError;

struct Blank;

impl Page for Blank {
    fn title(&self) -> String {
        "blank".to_owned()
    }

    fn ui(&mut self, _ui: &mut egui::Ui, _ctx: &mut PageContext<'_>) {}
}

fn counting_router(built: Rc<Cell<usize>>) -> Router {
    let factory = move |_: &Route| -> Box<dyn Page> {
        built.set(built.get() + 1);
        Box::new(Blank)
    };
    let mut router = Router::new();
    for pattern in RoutePattern::ALL {
        router = router.route(pattern, factory.clone());
    }
    router
}

#[test]
fn test_pages_are_built_on_first_visit_only() {
    let built = Rc::new(Cell::new(0));
    let mut router = counting_router(built.clone());
    assert_eq!(built.get(), 0);

    router.navigate("/canvas");
    assert!(router.current_page().is_some());
    assert!(router.current_page().is_some());
    assert_eq!(built.get(), 1);

    router.navigate("/app");
    router.current_page();
    router.navigate("/canvas");
    router.current_page();
    assert_eq!(built.get(), 2);
    assert_eq!(router.loaded_paths(), vec!["/app".to_owned(), "/canvas".to_owned()]);
}

#[test]
fn test_each_canvas_id_gets_its_own_page() {
    let built = Rc::new(Cell::new(0));
    let mut router = counting_router(built.clone());

    router.navigate("/canvas/first");
    router.current_page();
    router.navigate("/canvas/second");
    router.current_page();
    router.navigate("/canvas/first");
    router.current_page();

    assert_eq!(built.get(), 2);
    let first = Route::Canvas {
        id: CanvasId::new("first"),
    };
    assert!(router.is_loaded(&first));
}

struct Tracked(Rc<Cell<usize>>);

impl Page for Tracked {
    fn title(&self) -> String {
        "tracked".to_owned()
    }

    fn ui(&mut self, _ui: &mut egui::Ui, _ctx: &mut PageContext<'_>) {}

    fn on_leave(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_leaving_a_page_notifies_it_and_keeps_it_loaded() {
    let left = Rc::new(Cell::new(0));
    let tracked = left.clone();
    let mut router = Router::new()
        .route(RoutePattern::Canvas, move |_| Box::new(Tracked(tracked.clone())))
        .route(RoutePattern::App, |_| Box::new(Blank));

    router.navigate("/canvas");
    router.current_page();

    // Re-navigating to the same route is not a leave
    router.navigate("/canvas");
    assert_eq!(left.get(), 0);

    router.navigate("/app");
    assert_eq!(left.get(), 1);
    assert!(router.is_loaded(&Route::Canvas { id: None }));

    router.navigate("/missing");
    router.navigate("/canvas");
    assert_eq!(left.get(), 1);
}

#[test]
fn test_unknown_path_has_no_page() {
    let built = Rc::new(Cell::new(0));
    let mut router = counting_router(built.clone());

    router.navigate("/gallery");
    assert_eq!(
        router.current(),
        Err(&RouteError::NotFound("/gallery".to_owned()))
    );
    assert!(router.current_page().is_none());
    assert_eq!(built.get(), 0);
}

#[test]
fn test_unregistered_pattern_has_no_page() {
    let mut router = Router::new().route(RoutePattern::Home, |_| Box::new(Blank));
    router.navigate("/app");
    assert!(router.current().is_ok());
    assert!(router.current_page().is_none());
}

#[test]
fn test_app_router_serves_every_pattern() {
    let settings = scribble::settings::Settings {
        canvas_size: [20, 20],
        ..Default::default()
    };
    let brush = Rc::new(Cell::new(settings.brush));
    let mut router = scribble::pages::app_router(&settings, brush);

    for path in ["/", "/canvas", "/canvas/abc", "/app"] {
        router.navigate(path);
        assert!(router.current_page().is_some(), "no page for {path}");
    }
    assert_eq!(router.loaded_paths().len(), 4);
}

#[test]
fn test_pages_request_navigation_through_navigator() {
    let ctx = egui::Context::default();
    let mut navigator = Navigator::default();
    let mut share = MemoryShareHost::new();
    let mut status = None;
    let mut page = scribble::pages::HomePage;

    // A frame without clicks does not navigate
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut page_ctx = PageContext {
                navigator: &mut navigator,
                share: &mut share,
                status: &mut status,
                loaded_paths: &[],
            };
            page.ui(ui, &mut page_ctx);
        });
    });
    assert_eq!(navigator.take(), None);

    navigator.go("/app");
    assert_eq!(navigator.take().as_deref(), Some("/app"));
    assert_eq!(navigator.take(), None);
}
