use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stream ended before end of line")]
    UnexpectedEof,
}

/// Reads `\n`-terminated lines from a buffered stream.
///
/// Returned lines keep their delimiter (and any `\r` before it). Callers
/// decide how much whitespace to trim.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(256),
        }
    }

    /// Reads the next line.
    ///
    /// End of stream before a `\n` is an error, even when some bytes were
    /// already read: a partial line is never returned.
    pub async fn read_line(&mut self) -> Result<String, ReadError> {
        self.buf.clear();
        self.inner.read_until(b'\n', &mut self.buf).await?;

        if self.buf.last() != Some(&b'\n') {
            return Err(ReadError::UnexpectedEof);
        }

        Ok(String::from_utf8_lossy(&self.buf).into_owned())
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }
}
