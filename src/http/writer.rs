use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("connection closed while writing")]
    Closed,
}

pub fn serialize_response(resp: &Response) -> BytesMut {
    let head = format!(
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type,
        resp.body.len(),
    );

    let mut buf = BytesMut::with_capacity(head.len() + resp.body.len());
    buf.put_slice(head.as_bytes());
    buf.put_slice(&resp.body);
    buf
}

/// A serialized response and how much of it has reached the sink.
pub struct ResponseWriter {
    buffer: BytesMut,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.written == self.buffer.len()
    }

    pub async fn write_to<W>(&mut self, sink: &mut W) -> Result<(), WriteError>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = sink.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(WriteError::Closed);
            }

            self.written += n;
        }

        sink.flush().await?;
        Ok(())
    }
}

/// Serializes and writes one response to `sink`.
pub async fn write_response<W>(
    sink: &mut W,
    status: StatusCode,
    content_type: &str,
    body: &[u8],
) -> Result<(), WriteError>
where
    W: AsyncWrite + Unpin,
{
    let response = Response::new(status, content_type, body);
    ResponseWriter::new(&response).write_to(sink).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_status_line_headers_and_body() {
        let bytes = serialize_response(&Response::text("hi\n"));

        assert_eq!(
            &bytes[..],
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nhi\n"
        );
    }

    #[test]
    fn unknown_status_gets_fallback_phrase() {
        let bytes = serialize_response(&Response::new(StatusCode(302), "text/plain", ""));

        assert!(bytes.starts_with(b"HTTP/1.1 302 Unknown Status\r\n"));
    }
}
