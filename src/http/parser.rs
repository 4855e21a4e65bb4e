use crate::http::lines::{LineReader, ReadError};
use crate::http::request::Request;
use std::collections::HashMap;
use tokio::io::AsyncBufRead;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read request line: {0}")]
    RequestLineRead(#[source] ReadError),
    #[error("malformed request line: {line:?}")]
    MalformedRequestLine { line: String },
    #[error("failed to read headers: {0}")]
    HeaderRead(#[source] ReadError),
}

/// Reads one request line and its headers from `reader`.
///
/// The request line must split on single spaces into exactly three
/// non-empty tokens. Header lines are split on the first colon; lines
/// without one are skipped. Reading stops at the first blank line and
/// anything after it is left unread.
pub async fn parse_request<R>(reader: &mut LineReader<R>) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let line = reader
        .read_line()
        .await
        .map_err(ParseError::RequestLineRead)?;
    let (method, path, version) = split_request_line(&line)?;

    let mut headers = HashMap::new();
    loop {
        let line = reader.read_line().await.map_err(ParseError::HeaderRead)?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(Request {
        method,
        path,
        version,
        headers,
    })
}

fn split_request_line(line: &str) -> Result<(String, String, String), ParseError> {
    let malformed = || ParseError::MalformedRequestLine {
        line: line.trim().to_string(),
    };

    let parts: Vec<&str> = line.trim().split(' ').collect();
    match parts.as_slice() {
        [method, path, version] if parts.iter().all(|p| !p.is_empty()) => Ok((
            method.to_string(),
            path.to_string(),
            version.to_string(),
        )),
        _ => Err(malformed()),
    }
}
