use anyhow::Context;
use lantern::counter::run_concurrent_increments;

const DEFAULT_TASKS: usize = 100_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let tasks = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid task count: {}", arg))?,
        None => DEFAULT_TASKS,
    };

    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    tracing::info!(cores, tasks, "Starting increments");

    let total = run_concurrent_increments(tasks).await?;
    tracing::info!(total, "Final counter value after all tasks finished");

    Ok(())
}
