//! Tests for path dispatch

use lantern::http::response::StatusCode;
use lantern::router::{Action, Handler, Page, RouteTable, Router, StaticFiles};
use std::path::PathBuf;

fn temp_root(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lantern-router-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn router_with_root(root: impl Into<PathBuf>) -> Router {
    Router::new(RouteTable::standard(), StaticFiles::new(root))
}

#[test]
fn test_standard_route_table() {
    let table = RouteTable::standard();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("/api/hello"), Some(Handler::Hello));
    assert_eq!(table.get("/api/goodbye"), Some(Handler::Goodbye));
    assert_eq!(table.get("/api/hello/"), None);
    assert_eq!(table.get("/api"), None);
}

#[test]
fn test_literal_pages_take_priority() {
    let router = Router::new(
        RouteTable::new().with_route("/", Handler::Goodbye),
        StaticFiles::new("./static"),
    );

    for (path, page) in [
        ("/", Page::Welcome),
        ("/about", Page::About),
        ("/home", Page::Home),
        ("/html", Page::Html),
        ("/json", Page::Json),
    ] {
        assert!(matches!(router.route(path), Action::Page(p) if p == page));
    }
}

#[test]
fn test_route_table_before_static() {
    let router = router_with_root("./static");

    assert!(matches!(router.route("/api/hello"), Action::Route(Handler::Hello)));
    assert!(matches!(
        router.route("/styles.css"),
        Action::Static { path: "/styles.css", .. }
    ));
}

#[tokio::test]
async fn test_api_hello_response() {
    let response = router_with_root("./static").respond("/api/hello").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, "text/plain");
    assert_eq!(response.body, b"Hello from the /api/hello endpoint!\n".to_vec());
}

#[tokio::test]
async fn test_api_goodbye_response() {
    let response = router_with_root("./static").respond("/api/goodbye").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"Goodbye from the /api/goodbye endpoint!\n".to_vec());
}

#[tokio::test]
async fn test_json_page_is_valid_json() {
    let response = router_with_root("./static").respond("/json").await;

    assert_eq!(response.content_type, "application/json");
    let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(value["message"], "Hello, JSON!");
}

#[tokio::test]
async fn test_welcome_wins_over_file_and_route() {
    let root = temp_root("welcome");
    // "<root>/" with an index file next to it, plus a registered "/" route
    std::fs::write(root.join("index.html"), b"<p>file</p>").unwrap();
    let router = Router::new(
        RouteTable::standard().with_route("/", Handler::Hello),
        StaticFiles::new(&root),
    );

    let response = router.respond("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"Welcome to the Lantern server!\n".to_vec());
    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_static_fallback_serves_file() {
    let root = temp_root("fallback");
    std::fs::write(root.join("site.css"), b"h1 { margin: 0 }").unwrap();

    let response = router_with_root(&root).respond("/site.css").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, "text/css");
    assert_eq!(response.body, b"h1 { margin: 0 }".to_vec());
    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_static_fallback_shadowed_by_route() {
    let root = temp_root("shadowed");
    std::fs::create_dir_all(root.join("api")).unwrap();
    std::fs::write(root.join("api/hello"), b"from disk").unwrap();

    let response = router_with_root(&root).respond("/api/hello").await;

    assert_eq!(response.body, b"Hello from the /api/hello endpoint!\n".to_vec());
    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let root = temp_root("missing");

    let response = router_with_root(&root).respond("/does/not/exist.html").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8_lossy(&response.body).contains("404"));
    let _ = std::fs::remove_dir_all(root);
}
