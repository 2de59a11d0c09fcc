use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Semaphore, watch};

/// Runs background futures without a join point.
///
/// At most `n_tasks` futures run at once. Waiting tasks get permits in no
/// guaranteed order, so callers that care about which write lands last must
/// not rely on submission order. Tasks are never cancelled, they run to
/// completion or fail on their own.
#[derive(Clone)]
pub struct TaskPool {
    semaphore: Arc<Semaphore>,
    in_flight: Arc<watch::Sender<usize>>,
}

/// Decrements the in-flight count when the task finishes or panics.
struct InFlightGuard(Arc<watch::Sender<usize>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.send_modify(|n| *n = n.saturating_sub(1));
    }
}

impl TaskPool {
    pub fn new(n_tasks: usize) -> TaskPool {
        let semaphore = Arc::new(Semaphore::new(n_tasks.max(1)));
        let (in_flight, _) = watch::channel(0);

        TaskPool {
            semaphore,
            in_flight: Arc::new(in_flight),
        }
    }

    /// Spawns `func` on the current Tokio runtime.
    pub fn execute<F, T>(&self, func: F)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        self.in_flight.send_modify(|n| *n += 1);
        let guard = InFlightGuard(self.in_flight.clone());
        let semaphore = self.semaphore.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let Ok(_permit) = semaphore.acquire().await else {
                return;
            };
            func.await;
        });
    }

    /// Waits until no task is in flight. Any number of callers may wait at
    /// once, and tasks submitted while waiting extend the wait.
    pub async fn wait_idle(&self) {
        let mut rx = self.in_flight.subscribe();
        let _ = rx.wait_for(|n| *n == 0).await;
    }

    pub fn pending(&self) -> usize {
        *self.in_flight.borrow()
    }
}
