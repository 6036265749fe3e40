use std::cell::Cell;
use std::rc::Rc;

use crate::pages::{self, layout, PageContext};
use crate::router::{Navigator, Router};
use crate::settings::Settings;
use crate::share::ShareHost;
use crate::stroke::Brush;

pub struct ScribbleApp {
    settings: Settings,
    /// Brush of the canvas used last; seeds new canvases and is persisted
    brush: Rc<Cell<Brush>>,
    router: Router,
    navigator: Navigator,
    share: Box<dyn ShareHost>,
    status: Option<String>,
    show_debug: bool,
}

impl ScribbleApp {
    /// Called once before the first frame.
    ///
    /// `initial_path` comes from the command line or the browser location;
    /// without one the page open at last shutdown is restored.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_path: Option<String>) -> Self {
        Self::from_storage(cc.storage, initial_path)
    }

    pub fn from_storage(storage: Option<&dyn eframe::Storage>, initial_path: Option<String>) -> Self {
        let settings: Settings = storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_settings(settings, initial_path)
    }

    pub fn with_settings(settings: Settings, initial_path: Option<String>) -> Self {
        let share = share_host(&settings);
        let brush = Rc::new(Cell::new(settings.brush));
        let mut router = pages::app_router(&settings, brush.clone());
        let path = initial_path.unwrap_or_else(|| settings.last_path.clone());
        router.navigate(&path);

        Self {
            settings,
            brush,
            router,
            navigator: Navigator::default(),
            share,
            status: None,
            show_debug: false,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn apply_navigation(&mut self) {
        if let Some(path) = self.navigator.take() {
            self.status = None;
            self.router.navigate(&path);
            if let Ok(route) = self.router.current() {
                self.settings.last_path = route.path();
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn share_host(settings: &Settings) -> Box<dyn ShareHost> {
    let host = crate::share::DiskShareHost::new(settings.export_dir());
    log::info!("Shared art is written to {}", host.dir().display());
    Box::new(host)
}

#[cfg(target_arch = "wasm32")]
fn share_host(_settings: &Settings) -> Box<dyn ShareHost> {
    Box::new(crate::share::MemoryShareHost::new())
}

impl eframe::App for ScribbleApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

impl ScribbleApp {
    /// One frame of the whole app
    pub fn ui(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::F12)) {
            self.show_debug = !self.show_debug;
        }
        egui::Window::new("Router Debug")
            .open(&mut self.show_debug)
            .show(ctx, |ui| {
                ui.label(format!("{:#?}", self.router));
            });

        let current = self.router.current().ok().cloned();
        let title = self.router.current_page().map(|page| page.title());
        layout::top_bar(ctx, title.as_deref(), current.as_ref(), &mut self.navigator);
        layout::status_bar(ctx, &self.status);

        let loaded_paths = self.router.loaded_paths();
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Err(err) = self.router.current() {
                let err = err.clone();
                layout::not_found(ui, &err, &mut self.navigator);
                return;
            }

            if let Some(page) = self.router.current_page() {
                let mut page_ctx = PageContext {
                    navigator: &mut self.navigator,
                    share: self.share.as_mut(),
                    status: &mut self.status,
                    loaded_paths: &loaded_paths,
                };
                page.ui(ui, &mut page_ctx);

                if let Some(brush) = page.brush() {
                    self.brush.set(brush);
                }
            }
        });
        self.settings.brush = self.brush.get();

        self.apply_navigation();
    }
}
