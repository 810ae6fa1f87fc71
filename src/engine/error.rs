//! Domain errors raised by the game engine.
//!
//! None of these are fatal: the console turns each one into a message and
//! the loop carries on.

use rand::distributions::WeightedError;
use thiserror::Error;

use crate::engine::equipment::ComponentKind;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Location name must not be empty.")]
    EmptyLocationName,

    #[error("Location '{0}' already exists.")]
    DuplicateLocation(String),

    #[error("Unknown location '{0}'.")]
    UnknownLocation(String),

    #[error("Location '{0}' is still locked.")]
    LocationLocked(String),

    #[error("This equipment has no {0}.")]
    UnknownComponent(ComponentKind),

    /// Weighted draw could not be built (empty catalog or zero total weight).
    #[error("Location '{location}' has nothing to catch: {source}")]
    EmptyCatalog {
        location: String,
        #[source]
        source: WeightedError,
    },
}
