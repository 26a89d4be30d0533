//! Core puzzle types: discs, rods, moves, set state, configuration.
//!
//! Everything here concerns a single puzzle set. Running several sets in
//! lockstep is the job of [`crate::driver`].

pub mod disc;
pub mod rod;
pub mod moves;
pub mod error;
pub mod config;
pub mod state;

pub use disc::Disc;
pub use rod::{Ring, Rod, RodId, Rotation, ROD_COUNT};
pub use moves::{Move, MoveSequence};
pub use error::{PuzzleError, PuzzleResult};
pub use config::{DriverConfig, SetConfig, DEFAULT_DISC_COUNTS, DEFAULT_MOVES};
pub use state::{Layout, PuzzleSet};
