//! Path dispatch.
//!
//! A path is resolved in three tiers, first match wins:
//!
//! ```text
//! path ─► inline pages (/, /about, /home, /html, /json)
//!      ─► route table (exact match)
//!      ─► static files under the content root ─► 404
//! ```
//!
//! A route or file that shares a path with an inline page is never reached.

pub mod handler;
pub mod static_files;

use std::collections::HashMap;

use crate::http::response::{Response, StatusCode};

pub use handler::{Handler, Page};
pub use static_files::{NotFound, StaticFile, StaticFiles};

/// Exact path to handler mapping. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Handler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The routes the server ships with.
    pub fn standard() -> Self {
        Self::new()
            .with_route("/api/hello", Handler::Hello)
            .with_route("/api/goodbye", Handler::Goodbye)
    }

    pub fn with_route(mut self, path: impl Into<String>, handler: Handler) -> Self {
        self.routes.insert(path.into(), handler);
        self
    }

    pub fn get(&self, path: &str) -> Option<Handler> {
        self.routes.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// What a request path resolved to.
#[derive(Debug)]
pub enum Action<'a> {
    Page(Page),
    Route(Handler),
    Static { files: &'a StaticFiles, path: &'a str },
}

impl Action<'_> {
    /// Produces the response for this action. Static misses become 404.
    pub async fn respond(&self) -> Response {
        match self {
            Action::Page(page) => page.respond(),
            Action::Route(handler) => handler.respond(),
            Action::Static { files, path } => match files.resolve(path).await {
                Ok(file) => Response::new(StatusCode::OK, file.content_type, file.content),
                Err(_) => Response::not_found(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    static_files: StaticFiles,
}

impl Router {
    pub fn new(table: RouteTable, static_files: StaticFiles) -> Self {
        Self {
            table,
            static_files,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn route<'a>(&'a self, path: &'a str) -> Action<'a> {
        if let Some(page) = Page::from_path(path) {
            return Action::Page(page);
        }

        if let Some(handler) = self.table.get(path) {
            return Action::Route(handler);
        }

        Action::Static {
            files: &self.static_files,
            path,
        }
    }

    pub async fn respond(&self, path: &str) -> Response {
        let action = self.route(path);
        tracing::debug!(path = %path, action = ?action, "Routed request");
        action.respond().await
    }
}
