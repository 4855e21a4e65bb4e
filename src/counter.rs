//! A counter shared by many tasks behind one lock.

use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct SharedCounter {
    value: Arc<Mutex<u64>>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lock, adds one, and releases it when the guard drops.
    pub async fn increment(&self) {
        let mut value = self.value.lock().await;
        *value += 1;
    }

    pub async fn get(&self) -> u64 {
        *self.value.lock().await
    }
}

/// Spawns `tasks` tasks that each increment a fresh counter once, waits for
/// all of them, and returns the final value.
pub async fn run_concurrent_increments(tasks: usize) -> anyhow::Result<u64> {
    let counter = SharedCounter::new();

    let handles: Vec<_> = (0..tasks)
        .map(|_| {
            let counter = counter.clone();
            tokio::spawn(async move { counter.increment().await })
        })
        .collect();

    for handle in handles {
        handle.await?;
    }

    Ok(counter.get().await)
}
