//! How the frame pipeline is executed.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::thread;

use crate::SimError;

/// Concurrency strategy for one scheduler.
///
/// `Sequential` and `GloballyLocked` keep the pipeline order.  The two
/// parallel strategies only guarantee that every system finishes before the
/// removal barrier.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ExecutionStrategy {
    #[default]
    Sequential,
    /// Each system holds the world lock for its whole body.
    GloballyLocked,
    /// One scoped OS thread per system, per frame.
    ThreadPerSystem,
    /// A fixed pool of worker threads created with the scheduler.
    WorkerPool { workers: usize },
}

impl ExecutionStrategy {
    /// `WorkerPool` sized to the machine.
    pub fn pool() -> Self {
        let workers = thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(4);
        ExecutionStrategy::WorkerPool { workers }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExecutionStrategy::Sequential      => "sequential",
            ExecutionStrategy::GloballyLocked  => "locked",
            ExecutionStrategy::ThreadPerSystem => "threads",
            ExecutionStrategy::WorkerPool { .. } => "pool",
        }
    }

    /// `true` if systems of one frame may run at the same time.
    pub fn is_parallel(self) -> bool {
        matches!(self, ExecutionStrategy::ThreadPerSystem | ExecutionStrategy::WorkerPool { .. })
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStrategy::WorkerPool { workers } => write!(f, "pool:{workers}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Accepts `sequential`, `locked`, `threads`, `pool` and `pool:<n>`.
impl FromStr for ExecutionStrategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SimError::UnknownStrategy(s.to_owned());
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(ExecutionStrategy::Sequential),
            "locked" | "globally-locked" => Ok(ExecutionStrategy::GloballyLocked),
            "threads" | "thread-per-system" => Ok(ExecutionStrategy::ThreadPerSystem),
            "pool" => Ok(ExecutionStrategy::pool()),
            other => {
                let n = other.strip_prefix("pool:").ok_or_else(unknown)?;
                let workers: usize = n.parse().map_err(|_| unknown())?;
                if workers == 0 {
                    return Err(unknown());
                }
                Ok(ExecutionStrategy::WorkerPool { workers })
            }
        }
    }
}
