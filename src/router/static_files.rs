//! Static content lookup under a content root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::StaticConfig;
use crate::http::mime::content_type_for;

#[derive(Debug, thiserror::Error)]
#[error("no static file for {path}")]
pub struct NotFound {
    pub path: String,
}

/// A file read from the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    pub content: Vec<u8>,
    pub content_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    contain_paths: bool,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            contain_paths: false,
        }
    }

    pub fn from_config(cfg: &StaticConfig) -> Self {
        Self::new(cfg.root.clone()).contain_paths(cfg.contain_paths)
    }

    /// When enabled, paths that resolve outside the root are treated as missing.
    pub fn contain_paths(mut self, enabled: bool) -> Self {
        self.contain_paths = enabled;
        self
    }

    /// The file a request path maps to: the root with the raw path appended.
    ///
    /// This is string concatenation, so `/etc/passwd` stays under the root
    /// but `../` segments are kept as-is.
    pub fn candidate(&self, path: &str) -> PathBuf {
        let mut full = OsString::from(self.root.as_os_str());
        full.push(path);
        PathBuf::from(full)
    }

    pub async fn resolve(&self, path: &str) -> Result<StaticFile, NotFound> {
        let not_found = || NotFound {
            path: path.to_string(),
        };
        let candidate = self.candidate(path);

        if self.contain_paths && !self.is_contained(&candidate).await {
            tracing::warn!(path = %path, "Static path escapes content root");
            return Err(not_found());
        }

        match tokio::fs::read(&candidate).await {
            Ok(content) => Ok(StaticFile {
                content,
                content_type: content_type_for(path),
            }),
            Err(e) => {
                tracing::debug!(file = %candidate.display(), error = %e, "Static lookup missed");
                Err(not_found())
            }
        }
    }

    async fn is_contained(&self, candidate: &Path) -> bool {
        let root = tokio::fs::canonicalize(&self.root).await;
        let full = tokio::fs::canonicalize(candidate).await;

        match (root, full) {
            (Ok(root), Ok(full)) => full.starts_with(root),
            _ => false,
        }
    }
}
