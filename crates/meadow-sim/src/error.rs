use meadow_core::CoreError;
use meadow_systems::SystemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("no grid oracle supplied to the builder")]
    MissingGrid,

    #[error("unknown execution strategy {0:?}")]
    UnknownStrategy(String),

    #[error("failed to spawn worker thread: {0}")]
    PoolSpawn(#[source] std::io::Error),

    #[error("worker pool has shut down")]
    PoolClosed,

    #[error("system {0} panicked")]
    SystemPanicked(SystemId),

    #[error("{0} lock poisoned by a panicked system")]
    Poisoned(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
