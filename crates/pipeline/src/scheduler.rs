//! Deadline-bounded task scheduling.
//!
//! Render work should run when the host is otherwise idle, but no later
//! than a configured deadline after being scheduled. This is modeled as
//! a FIFO queue drained by a worker that yields to the executor while
//! the deadline has slack, then runs the task to completion on the
//! blocking pool.

use std::time::{Duration, Instant};

use tokio::sync::{mpsc, oneshot};

/// How many times the worker yields to the executor before considering
/// the runtime idle enough to start a task.
const IDLE_YIELDS: u32 = 16;

struct Job {
    submitted: Instant,
    task: Box<dyn FnOnce() + Send + 'static>,
    done: oneshot::Sender<()>,
}

/// A FIFO task queue with a latest-start deadline.
///
/// Tasks execute strictly in submission order, one at a time. Each task
/// starts once the executor has drained other ready work, or when the
/// deadline for that task expires, whichever comes first.
#[derive(Clone)]
pub struct IdleScheduler {
    tx: mpsc::UnboundedSender<Job>,
    deadline: Duration,
}

impl IdleScheduler {
    /// Create a scheduler whose tasks start no later than `deadline`
    /// after submission. Spawns the worker on the current runtime.
    pub fn new(deadline: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(rx, deadline));
        Self { tx, deadline }
    }

    /// The configured latest-start deadline.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Queue a task; the returned future resolves when it has run.
    ///
    /// Resolves to `false` if the scheduler shut down before the task
    /// could run.
    pub async fn schedule<F>(&self, task: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        let job = Job {
            submitted: Instant::now(),
            task: Box::new(task),
            done: done_tx,
        };
        if self.tx.send(job).is_err() {
            return false;
        }
        done_rx.await.is_ok()
    }
}

async fn run_worker(mut rx: mpsc::UnboundedReceiver<Job>, deadline: Duration) {
    while let Some(job) = rx.recv().await {
        let slack = deadline.saturating_sub(job.submitted.elapsed());
        if !slack.is_zero() {
            // Let interactive work drain first, bounded by the deadline.
            let _ = tokio::time::timeout(slack, async {
                for _ in 0..IDLE_YIELDS {
                    tokio::task::yield_now().await;
                }
            })
            .await;
        }

        match tokio::task::spawn_blocking(job.task).await {
            Ok(()) => {
                let _ = job.done.send(());
            }
            Err(err) => {
                tracing::error!(error = %err, "scheduled render task panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_task_runs_and_completes() {
        let scheduler = IdleScheduler::new(Duration::from_millis(100));
        let ran = Arc::new(AtomicU32::new(0));
        let ran_clone = Arc::clone(&ran);

        let completed = scheduler
            .schedule(move || {
                ran_clone.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        assert!(completed);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_tasks_run_in_submission_order() {
        let scheduler = IdleScheduler::new(Duration::from_millis(50));
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let submit = |i: u32| {
            let order = Arc::clone(&order);
            let scheduler = scheduler.clone();
            async move {
                scheduler
                    .schedule(move || {
                        order.lock().unwrap().push(i);
                    })
                    .await
            }
        };

        // join! polls in argument order, so submission order is 0..=4
        let results = tokio::join!(submit(0), submit(1), submit(2), submit(3), submit(4));
        assert_eq!(results, (true, true, true, true, true));

        let order = order.lock().unwrap();
        assert_eq!(*order, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_starts_within_deadline_under_load() {
        let scheduler = IdleScheduler::new(Duration::from_millis(50));

        // A steady stream of ready tasks keeps the executor busy.
        let busy = tokio::spawn(async {
            loop {
                tokio::task::yield_now().await;
            }
        });

        let started = Instant::now();
        let completed = scheduler.schedule(|| {}).await;
        busy.abort();

        assert!(completed);
        // Deadline plus scheduling overhead headroom
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
