use std::sync::Arc;

use lantern::config::Config;
use lantern::router::{RouteTable, Router, StaticFiles};
use lantern::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let router = Arc::new(Router::new(
        RouteTable::standard(),
        StaticFiles::from_config(&cfg.static_files),
    ));
    tracing::info!(
        routes = router.table().len(),
        static_root = %cfg.static_files.root.display(),
        contain_paths = cfg.static_files.contain_paths,
        "Router ready"
    );

    tokio::select! {
        res = server::listener::run(&cfg.server.listen_addr, router) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
