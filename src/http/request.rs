use std::collections::HashMap;

/// A parsed request line and its headers.
///
/// Built once per connection by [`parse_request`](crate::http::parser::parse_request).
/// The method and version are kept as sent; nothing validates them. The
/// body is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method as sent (e.g. "GET")
    pub method: String,
    /// The raw request path (e.g. "/index.html")
    pub path: String,
    /// Protocol version token (typically "HTTP/1.1")
    pub version: String,
    /// Header names and values, both trimmed; later duplicates win
    pub headers: HashMap<String, String>,
}

/// Builder for constructing Request objects.
#[derive(Default)]
pub struct RequestBuilder {
    method: Option<String>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.unwrap_or_else(|| "GET".to_string()),
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
        })
    }
}

impl Request {
    /// Retrieves a header value by its exact (trimmed) name.
    ///
    /// Names are not case-folded: `Host` and `host` are different keys.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
