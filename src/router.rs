//! Path → page routing table with lazily constructed pages.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::pages::Page;

/// Identifier of a drawing, as it appears in `/canvas/:id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasId(String);

impl CanvasId {
    /// A fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Accepts any non-empty path segment
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        (!id.is_empty() && !id.contains('/')).then_some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The shapes of path the router knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePattern {
    Home,
    Canvas,
    CanvasWithId,
    App,
}

impl RoutePattern {
    pub const ALL: [RoutePattern; 4] = [
        RoutePattern::Home,
        RoutePattern::Canvas,
        RoutePattern::CanvasWithId,
        RoutePattern::App,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePattern::Home => "/",
            RoutePattern::Canvas => "/canvas",
            RoutePattern::CanvasWithId => "/canvas/:id",
            RoutePattern::App => "/app",
        }
    }
}

/// A resolved path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Canvas { id: Option<CanvasId> },
    App,
}

impl Route {
    /// Resolve `path`, ignoring any query string, fragment and empty segments
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path_only = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["canvas"] => Ok(Route::Canvas { id: None }),
            ["canvas", id] => Ok(Route::Canvas {
                id: CanvasId::new(*id),
            }),
            ["app"] => Ok(Route::App),
            _ => Err(RouteError::NotFound(path.to_owned())),
        }
    }

    pub fn pattern(&self) -> RoutePattern {
        match self {
            Route::Home => RoutePattern::Home,
            Route::Canvas { id: None } => RoutePattern::Canvas,
            Route::Canvas { id: Some(_) } => RoutePattern::CanvasWithId,
            Route::App => RoutePattern::App,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_owned(),
            Route::Canvas { id: None } => "/canvas".to_owned(),
            Route::Canvas { id: Some(id) } => format!("/canvas/{id}"),
            Route::App => "/app".to_owned(),
        }
    }
}

/// Collects navigation requests made while a frame is being drawn
#[derive(Debug, Default)]
pub struct Navigator {
    pending: Option<String>,
}

impl Navigator {
    pub fn go(&mut self, path: impl Into<String>) {
        self.pending = Some(path.into());
    }

    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}

pub type PageFactory = Box<dyn Fn(&Route) -> Box<dyn Page>>;

/// Maps routes to page factories and keeps every page built so far
pub struct Router {
    table: HashMap<RoutePattern, PageFactory>,
    /// Never evicted: a canvas page owns its undo history, which has no other
    /// home. Pages shed GPU resources in [`Page::on_leave`] instead.
    pages: HashMap<Route, Box<dyn Page>>,
    current: Result<Route, RouteError>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("patterns", &self.table.keys().collect::<Vec<_>>())
            .field("loaded", &self.pages.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .finish()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            pages: HashMap::new(),
            current: Ok(Route::Home),
        }
    }

    /// Register the page factory for `pattern`
    pub fn route<F>(mut self, pattern: RoutePattern, factory: F) -> Self
    where
        F: Fn(&Route) -> Box<dyn Page> + 'static,
    {
        self.table.insert(pattern, Box::new(factory));
        self
    }

    /// Switch to `path`. Unknown paths are remembered so a not-found page can be shown.
    pub fn navigate(&mut self, path: &str) {
        let next = Route::parse(path);
        if let Ok(previous) = &self.current {
            if next.as_ref() != Ok(previous) {
                if let Some(page) = self.pages.get_mut(previous) {
                    page.on_leave();
                }
            }
        }
        self.current = next;
        match &self.current {
            Ok(route) => log::info!("navigated to {}", route.path()),
            Err(err) => log::warn!("{err}"),
        }
    }

    pub fn current(&self) -> Result<&Route, &RouteError> {
        self.current.as_ref()
    }

    /// The page for the current route, building it on first visit
    pub fn current_page(&mut self) -> Option<&mut dyn Page> {
        let route = self.current.as_ref().ok()?.clone();

        if !self.pages.contains_key(&route) {
            let factory = self.table.get(&route.pattern())?;
            log::info!("loading page for {}", route.path());
            self.pages.insert(route.clone(), factory(&route));
        }

        self.pages.get_mut(&route).map(|page| page.as_mut() as &mut dyn Page)
    }

    pub fn is_loaded(&self, route: &Route) -> bool {
        self.pages.contains_key(route)
    }

    /// Paths of every page built so far, sorted
    pub fn loaded_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.pages.keys().map(Route::path).collect();
        paths.sort();
        paths
    }
}
