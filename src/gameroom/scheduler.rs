use std::sync::Mutex;
use std::time::Duration;

/// Deferred unit of work; must not block.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fire-and-forget delayed execution.
/// Sessions use it to pace `newGame`/`exit` notifications
/// without holding the match lock.
pub trait Scheduler: Send + Sync {
    fn defer(&self, delay: Duration, job: Job);
}

/// Runs jobs on the tokio timer wheel.
#[derive(Debug, Default, Clone, Copy)]
pub struct Realtime;

impl Scheduler for Realtime {
    fn defer(&self, delay: Duration, job: Job) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job();
        });
    }
}

/// Holds jobs until explicitly fired.
/// Lets tests observe scheduled-but-unsent notifications deterministically.
#[derive(Default)]
pub struct Manual {
    queue: Mutex<Vec<(Duration, Job)>>,
}

impl Manual {
    /// Number of jobs scheduled and not yet fired.
    pub fn pending(&self) -> usize {
        self.queue.lock().expect("scheduler lock").len()
    }
    /// Delays of the pending jobs, in scheduling order.
    pub fn delays(&self) -> Vec<Duration> {
        self.queue
            .lock()
            .expect("scheduler lock")
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }
    /// Runs every pending job in scheduling order, returning how many ran.
    pub fn fire(&self) -> usize {
        let jobs = std::mem::take(&mut *self.queue.lock().expect("scheduler lock"));
        let n = jobs.len();
        jobs.into_iter().for_each(|(_, job)| job());
        n
    }
}

impl Scheduler for Manual {
    fn defer(&self, delay: Duration, job: Job) {
        self.queue
            .lock()
            .expect("scheduler lock")
            .push((delay, job));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    #[test]
    fn manual_holds_until_fired() {
        let manual = Manual::default();
        let count = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let count = count.clone();
            manual.defer(
                Duration::from_secs(2),
                Box::new(move || {
                    count.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }
        assert_eq!(manual.pending(), 3);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(manual.delays(), vec![Duration::from_secs(2); 3]);
        assert_eq!(manual.fire(), 3);
        assert_eq!(manual.pending(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn realtime_fires_after_delay() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        Realtime.defer(
            Duration::from_secs(2),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        tokio::time::timeout(Duration::from_secs(3), rx)
            .await
            .expect("job fired before timeout")
            .unwrap();
    }
}
