//! Just enough HTTP/1.1 to answer one request per connection.
//!
//! # Architecture
//!
//! - **`lines`**: reads `\n`-terminated lines from a buffered stream
//! - **`parser`**: turns the request line and headers into a [`request::Request`]
//! - **`request`**: the parsed request
//! - **`response`**: status code, media type and body
//! - **`writer`**: serializes a response and writes it to the peer
//! - **`mime`**: media type detection from file suffixes
//! - **`connection`**: the per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← request line + headers
//!        └──────┬──────┘
//!               │ parsed            (parse error ──► Closed, nothing sent)
//!               ▼
//!        ┌──────────────────┐
//!        │    Routing       │ ← inline page / route table / static file
//!        └──────┬───────────┘
//!               │ response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← status line, Content-Type, Content-Length, body
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! There is no keep-alive: the connection closes after one response.

pub mod connection;
pub mod lines;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
