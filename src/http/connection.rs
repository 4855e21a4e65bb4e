use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, BufReader};

use crate::http::lines::LineReader;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::writer::{ResponseWriter, WriteError};
use crate::router::Router;

#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to write response: {0}")]
    Write(#[from] WriteError),
}

/// One accepted connection: one request in, at most one response out.
///
/// The stream is owned here, so it is closed whenever the connection is
/// dropped, whichever way `run` returned.
pub struct Connection<S> {
    reader: LineReader<BufReader<S>>,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Routing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            reader: LineReader::new(BufReader::new(stream)),
            router,
            state: ConnectionState::Reading,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, ConnectionState::Closed)
    }

    /// Drives the connection to `Closed`.
    ///
    /// Each step takes the current state out and leaves `Closed` behind, so
    /// an error at any step leaves the connection closed.
    pub async fn run(&mut self) -> Result<(), ConnectionError> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => {
                    let request = parse_request(&mut self.reader).await?;
                    tracing::debug!(
                        method = %request.method,
                        path = %request.path,
                        version = %request.version,
                        headers = ?request.headers,
                        "Parsed request"
                    );
                    ConnectionState::Routing(request)
                }

                ConnectionState::Routing(request) => {
                    let response = self.router.respond(&request.path).await;
                    tracing::info!(
                        method = %request.method,
                        path = %request.path,
                        status = response.status.as_u16(),
                        "Serving response"
                    );
                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to(self.reader.get_mut()).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }
}
