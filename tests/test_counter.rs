use lantern::counter::{SharedCounter, run_concurrent_increments};

#[tokio::test]
async fn test_counter_starts_at_zero() {
    assert_eq!(SharedCounter::new().get().await, 0);
}

#[tokio::test]
async fn test_clones_share_one_value() {
    let counter = SharedCounter::new();
    let other = counter.clone();

    counter.increment().await;
    other.increment().await;

    assert_eq!(counter.get().await, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_increments_are_not_lost() {
    assert_eq!(run_concurrent_increments(10_000).await.unwrap(), 10_000);
}
