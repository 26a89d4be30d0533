//! Cycle analysis of driven sets.
//!
//! Predicts when a driver converges (or proves that it never does) from
//! the periodic win pattern of each lane, instead of stepping every round.

pub mod cycle;

pub use cycle::{first_common_win, predict_convergence, CycleProfile};
