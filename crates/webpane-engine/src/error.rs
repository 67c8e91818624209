use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Convenient result type for the engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for the input engine.
///
/// Translation itself never fails; the only fallible operation is standing
/// up the event thread.
#[derive(Debug, Error)]
pub enum Error {
    /// The event thread could not be spawned.
    #[error("failed to spawn event thread: {0}")]
    Spawn(#[from] io::Error),
}
