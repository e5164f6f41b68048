//! Fixed-size worker pool fed through a blocking channel.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use tracing::{info, warn};

use crate::{SimError, SimResult};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Count of submitted jobs that have not finished yet.
#[derive(Default)]
struct Pending {
    count: Mutex<usize>,
    idle:  Condvar,
}

impl Pending {
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn add(&self) {
        *self.lock() += 1;
    }

    fn done(&self) {
        let mut count = self.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.idle.notify_all();
        }
    }
}

/// Worker threads pulling boxed jobs off a shared queue.
///
/// A panicking job is contained: the worker logs it, counts the job as
/// finished, and keeps serving.  Dropping the pool closes the queue and
/// joins every worker.
pub struct WorkerPool {
    sender:  Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
    pending: Arc<Pending>,
}

impl WorkerPool {
    /// Spawn `size` workers (at least one).
    pub fn new(size: usize) -> SimResult<Self> {
        let size = size.max(1);
        let (sender, receiver) = crossbeam_channel::unbounded::<Job>();
        let pending = Arc::new(Pending::default());

        let mut workers = Vec::with_capacity(size);
        for i in 0..size {
            let receiver = receiver.clone();
            let pending = Arc::clone(&pending);
            let handle = thread::Builder::new()
                .name(format!("meadow-worker-{i}"))
                .spawn(move || worker_loop(receiver, pending))
                .map_err(SimError::PoolSpawn)?;
            workers.push(handle);
        }
        info!(workers = size, "worker_pool_started");
        Ok(Self { sender: Some(sender), workers, pending })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Jobs submitted but not yet finished.
    pub fn pending(&self) -> usize {
        *self.pending.lock()
    }

    /// Queue `job` for the next free worker.
    pub fn submit<F>(&self, job: F) -> SimResult<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or(SimError::PoolClosed)?;
        self.pending.add();
        if sender.send(Box::new(job)).is_err() {
            self.pending.done();
            return Err(SimError::PoolClosed);
        }
        Ok(())
    }

    /// Block until every submitted job has finished.
    pub fn wait_all(&self) {
        let mut count = self.pending.lock();
        while *count > 0 {
            count = self.pending.idle.wait(count).unwrap_or_else(PoisonError::into_inner);
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.sender.take();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
        info!("worker_pool_stopped");
    }
}

fn worker_loop(receiver: Receiver<Job>, pending: Arc<Pending>) {
    for job in receiver.iter() {
        // The job and everything it captured are dropped before `done`.
        if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            warn!(worker = thread::current().name().unwrap_or("?"), "worker_job_panicked");
        }
        pending.done();
    }
}
