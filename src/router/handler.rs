//! The fixed set of things a path can dispatch to.

use crate::http::response::Response;

/// Pages answered inline, before the route table or the filesystem is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Welcome,
    About,
    Home,
    Html,
    Json,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Page::Welcome),
            "/about" => Some(Page::About),
            "/home" => Some(Page::Home),
            "/html" => Some(Page::Html),
            "/json" => Some(Page::Json),
            _ => None,
        }
    }

    pub fn respond(&self) -> Response {
        match self {
            Page::Welcome => Response::text("Welcome to the Lantern server!\n"),
            Page::About => {
                Response::text("Lantern is a tiny TCP server that speaks just enough HTTP.\n")
            }
            Page::Home => Response::html("<h1>Home</h1><p>You are home.</p>"),
            Page::Html => Response::html("<html><body><h1>Hello, HTML!</h1></body></html>"),
            Page::Json => {
                let body = serde_json::json!({
                    "message": "Hello, JSON!",
                    "status": "ok",
                });
                Response::json(body.to_string())
            }
        }
    }
}

/// Handlers that can be registered in a [`RouteTable`](super::RouteTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Hello,
    Goodbye,
}

impl Handler {
    pub fn respond(&self) -> Response {
        match self {
            Handler::Hello => Response::text("Hello from the /api/hello endpoint!\n"),
            Handler::Goodbye => Response::text("Goodbye from the /api/goodbye endpoint!\n"),
        }
    }
}
