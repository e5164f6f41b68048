//! The per-frame scheduler.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use crossbeam_channel::unbounded;
use tracing::{info, warn};

use meadow_behavior::DecisionStrategy;
use meadow_systems::{InputSnapshot, PIPELINE, SystemId};

use crate::frame::{FrameInputs, SharedFrame, run_exclusive};
use crate::{ExecutionStrategy, FrameObserver, FrameStats, SimError, SimResult, World, WorkerPool};

/// Runs [`PIPELINE`] once per frame under one [`ExecutionStrategy`], then
/// the removal barrier on the calling thread.
///
/// The worker pool, if any, lives exactly as long as the scheduler.
pub struct Scheduler {
    strategy: ExecutionStrategy,
    decision: Arc<dyn DecisionStrategy>,
    pool:     Option<WorkerPool>,
}

impl Scheduler {
    pub fn new(strategy: ExecutionStrategy, decision: Arc<dyn DecisionStrategy>) -> SimResult<Self> {
        let pool = match strategy {
            ExecutionStrategy::WorkerPool { workers } => Some(WorkerPool::new(workers)?),
            ExecutionStrategy::ThreadPerSystem => {
                warn!("thread-per-system gives no ordering between systems within a frame");
                None
            }
            ExecutionStrategy::Sequential | ExecutionStrategy::GloballyLocked => None,
        };
        info!(strategy = %strategy, decision = decision.name(), "scheduler_ready");
        Ok(Self { strategy, decision, pool })
    }

    #[inline]
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// The NPC decision strategy shared by every frame.
    #[inline]
    pub fn decision(&self) -> &dyn DecisionStrategy {
        self.decision.as_ref()
    }

    /// Advance `world` by one frame of `dt` seconds.
    ///
    /// `GloballyLocked` acquires `world` once per system so other threads can
    /// get in between systems; every other strategy holds it for the whole
    /// frame.
    pub fn run_frame<O: FrameObserver + ?Sized>(
        &self,
        world:    &Mutex<World>,
        input:    &InputSnapshot,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<FrameStats> {
        let stats = if self.strategy == ExecutionStrategy::GloballyLocked {
            let (frame, inputs) = {
                let w = lock_world(world)?;
                (w.frame(), self.inputs(&w, input, dt))
            };
            observer.on_frame_start(frame);
            let mut stats = FrameStats::new(frame);
            for id in PIPELINE {
                let mut w = lock_world(world)?;
                stats.record(id, run_exclusive(id, &mut w, &inputs));
            }
            stats.removed = lock_world(world)?.end_frame();
            stats
        } else {
            let mut w = lock_world(world)?;
            observer.on_frame_start(w.frame());
            let inputs = self.inputs(&w, input, dt);
            self.run_held(&mut w, inputs)?
        };
        observer.on_frame_end(&stats);
        Ok(stats)
    }

    fn inputs(&self, world: &World, input: &InputSnapshot, dt: f32) -> FrameInputs {
        FrameInputs {
            input:    *input,
            dt,
            behavior: world.config.behavior.clone(),
            vitals:   world.config.vitals.clone(),
            decision: Arc::clone(&self.decision),
        }
    }

    /// One frame with the world already held exclusively.
    fn run_held(&self, world: &mut World, inputs: FrameInputs) -> SimResult<FrameStats> {
        let mut stats = FrameStats::new(world.frame());

        let counts: Vec<(SystemId, usize)> = match self.strategy {
            ExecutionStrategy::Sequential | ExecutionStrategy::GloballyLocked => PIPELINE
                .iter()
                .map(|&id| (id, run_exclusive(id, world, &inputs)))
                .collect(),
            ExecutionStrategy::ThreadPerSystem => {
                let frame = SharedFrame::take(world);
                let outcome = run_threads(&frame, &inputs);
                frame.restore(world);
                outcome?
            }
            ExecutionStrategy::WorkerPool { .. } => {
                let pool = self.pool.as_ref().ok_or(SimError::PoolClosed)?;
                run_pooled(pool, world, inputs)?
            }
        };
        for (id, count) in counts {
            stats.record(id, count);
        }

        stats.removed = world.end_frame();
        Ok(stats)
    }
}

fn lock_world(world: &Mutex<World>) -> SimResult<MutexGuard<'_, World>> {
    world.lock().map_err(|_| SimError::Poisoned("world"))
}

/// Every system on its own scoped thread; all are joined before returning.
fn run_threads(frame: &SharedFrame, inputs: &FrameInputs) -> SimResult<Vec<(SystemId, usize)>> {
    thread::scope(|scope| -> SimResult<Vec<(SystemId, usize)>> {
        let mut handles = Vec::with_capacity(PIPELINE.len());
        for id in PIPELINE {
            let handle = thread::Builder::new()
                .name(format!("meadow-{id}"))
                .spawn_scoped(scope, move || frame.run(id, inputs))
                .map_err(SimError::PoolSpawn)?;
            handles.push((id, handle));
        }
        let joined: Vec<_> = handles.into_iter().map(|(id, h)| (id, h.join())).collect();
        joined
            .into_iter()
            .map(|(id, result)| match result {
                Ok(count) => count.map(|n| (id, n)),
                Err(_) => Err(SimError::SystemPanicked(id)),
            })
            .collect()
    })
}

/// Every system as a pool job.  Returns once the pool is idle again and the
/// tables are back in `world`.
fn run_pooled(
    pool:   &WorkerPool,
    world:  &mut World,
    inputs: FrameInputs,
) -> SimResult<Vec<(SystemId, usize)>> {
    let frame = Arc::new(SharedFrame::take(world));
    let inputs = Arc::new(inputs);
    let (tx, rx) = unbounded();

    let mut submit_error = None;
    for id in PIPELINE {
        let (frame, inputs, tx) = (Arc::clone(&frame), Arc::clone(&inputs), tx.clone());
        let submitted = pool.submit(move || {
            let _ = tx.send((id, frame.run(id, &inputs)));
        });
        if let Err(e) = submitted {
            submit_error = Some(e);
            break;
        }
    }
    drop(tx);
    pool.wait_all();

    let frame = Arc::try_unwrap(frame).map_err(|_| SimError::Poisoned("shared frame"))?;
    frame.restore(world);
    if let Some(e) = submit_error {
        return Err(e);
    }

    let mut results: Vec<(SystemId, SimResult<usize>)> = rx.try_iter().collect();
    PIPELINE
        .iter()
        .map(|&id| {
            let at = results
                .iter()
                .position(|(done, _)| *done == id)
                .ok_or(SimError::SystemPanicked(id))?;
            results.swap_remove(at).1.map(|n| (id, n))
        })
        .collect()
}
