//! Media type detection from file name suffixes.

pub const OCTET_STREAM: &str = "application/octet-stream";

const TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
];

/// Returns the media type for `path` based on its suffix alone.
///
/// Matching is case-sensitive; anything unrecognized is `application/octet-stream`.
///
/// ```
/// # use lantern::http::mime::content_type_for;
/// assert_eq!(content_type_for("/css/site.css"), "text/css");
/// assert_eq!(content_type_for("/photo.JPG"), "application/octet-stream");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    TYPES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or(OCTET_STREAM)
}
