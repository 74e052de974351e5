//! Bounded fan-out over independent items with index-preserving results.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use futures::{stream::FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;
use tracing::warn;

pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Runs `worker(index, item)` for every item with at most `max_concurrency`
/// workers in flight and returns the results in input order.
///
/// Each worker runs as its own task. A worker that returns `Err` or panics
/// leaves `R::default()` in its slot; every other slot still completes.
/// Empty input returns immediately without spawning anything.
pub async fn dispatch<T, R, E, F, Fut>(items: Vec<T>, max_concurrency: usize, worker: F) -> Vec<R>
where
    T: Send + 'static,
    R: Default + Send + 'static,
    E: Display + Send + 'static,
    F: Fn(usize, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    if items.is_empty() {
        return Vec::new();
    }

    let total = items.len();
    let permits = max_concurrency.clamp(1, total);
    let sem = Arc::new(Semaphore::new(permits));
    let worker = Arc::new(worker);
    let mut tasks = FuturesUnordered::new();

    for (index, item) in items.into_iter().enumerate() {
        let sem = sem.clone();
        let worker = worker.clone();

        let handle = tokio::spawn(async move {
            // Permit held for the whole worker run; the semaphore is never closed
            let _permit = sem.acquire_owned().await.ok();
            worker(index, item).await
        });

        tasks.push(async move { (index, handle.await) });
    }

    let mut slots: Vec<R> = std::iter::repeat_with(R::default).take(total).collect();
    while let Some((index, joined)) = tasks.next().await {
        match joined {
            Ok(Ok(result)) => slots[index] = result,
            Ok(Err(e)) => warn!("Dispatch slot {}/{} failed: {}", index + 1, total, e),
            Err(e) => warn!("Dispatch slot {}/{} aborted: {}", index + 1, total, e),
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use anyhow::{anyhow, Result};

    use super::*;

    #[tokio::test]
    async fn test_empty_input_yields_empty_output() {
        let results: Vec<String> =
            dispatch(Vec::<u32>::new(), 8, |_, _| async { Ok::<_, anyhow::Error>(String::new()) })
                .await;
        assert!(results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_follow_input_order_not_completion_order() {
        // Later items finish first
        let items = vec![50u64, 40, 30, 20, 10];
        let results = dispatch(items, 8, |index, delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok::<_, anyhow::Error>(format!("{index}:{delay}"))
        })
        .await;

        assert_eq!(results, vec!["0:50", "1:40", "2:30", "3:20", "4:10"]);
    }

    #[tokio::test]
    async fn test_failed_worker_only_blanks_its_own_slot() {
        let items = vec!["a", "b", "c", "d"];
        let results = dispatch(items, 2, |_, item| async move {
            if item == "c" {
                Err(anyhow!("worker for {item} failed"))
            } else {
                Ok(item.to_uppercase())
            }
        })
        .await;

        assert_eq!(results, vec!["A", "B", "", "D"]);
    }

    #[tokio::test]
    async fn test_panicking_worker_is_isolated() {
        let items = vec![1, 2, 3];
        let results = dispatch(items, 3, |_, n| async move {
            if n == 2 {
                panic!("boom");
            }
            Ok::<_, anyhow::Error>(n.to_string())
        })
        .await;

        assert_eq!(results, vec!["1", "", "3"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrency_never_exceeds_cap() {
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let (r, p) = (running.clone(), peak.clone());
        let results = dispatch((0..20).collect(), 3, move |_, n: u32| {
            let (running, peak) = (r.clone(), p.clone());
            async move {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                running.fetch_sub(1, Ordering::SeqCst);
                Ok::<_, anyhow::Error>(n * 2)
            }
        })
        .await;

        assert_eq!(results.len(), 20);
        assert_eq!(results[19], 38);
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_zero_concurrency_still_makes_progress() -> Result<()> {
        let results = dispatch(vec![1, 2], 0, |_, n| async move { Ok::<_, anyhow::Error>(n + 1) }).await;
        assert_eq!(results, vec![2, 3]);
        Ok(())
    }
}
