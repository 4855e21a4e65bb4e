//! Lantern - a tiny one-request-per-connection TCP server
//!
//! Parses a request line and headers, dispatches the path to an inline
//! page, a registered route, or a static file, and writes one response.
//! The `counter` module is a separate locking demo.

pub mod config;
pub mod counter;
pub mod http;
pub mod router;
pub mod server;
