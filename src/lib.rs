//! # ring-hanoi
//!
//! Simulation of Tower of Hanoi sets played on a ring of three rods, each
//! driven by its own fixed, endlessly repeated move sequence.
//!
//! ## Rules
//!
//! Moves are written as `'0'`, `'1'`, `'2'`:
//! - `'0'` / `'1'`: move disc 1 to the clockwise / counterclockwise rod
//! - `'2'`: between the two rods not holding disc 1, move the smaller top
//!   disc onto the other rod (no-op if both are empty)
//!
//! A set is won when every disc sits on the rod clockwise of the one it
//! started on.
//!
//! ## Modules
//!
//! - `core`: Discs, rods, moves, set state, configuration, errors
//! - `driver`: Lockstep driver that runs several sets until all are won
//! - `analysis`: Cycle detection and convergence prediction
//!
//! ```
//! use ring_hanoi::{DriverConfig, SetConfig, SyncDriver, RunOutcome};
//!
//! let config = DriverConfig::new()
//!     .with_set(SetConfig::new(1, "1"))
//!     .with_set(SetConfig::new(1, "01"))
//!     .with_max_rounds(100);
//!
//! let mut driver = SyncDriver::new(&config).unwrap();
//! assert_eq!(driver.run(), RunOutcome::Converged { rounds: 5 });
//! ```

pub mod core;
pub mod driver;
pub mod analysis;

// Re-export commonly used types
pub use crate::core::{
    Disc, Rod, RodId, Ring, Rotation,
    Move, MoveSequence,
    PuzzleError, PuzzleResult,
    DriverConfig, SetConfig,
    Layout, PuzzleSet,
};

pub use crate::driver::{Lane, RunOutcome, SyncDriver};

pub use crate::analysis::{first_common_win, predict_convergence, CycleProfile};
