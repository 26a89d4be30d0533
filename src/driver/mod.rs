//! Synchronized driving of several puzzle sets.
//!
//! Each set is paired with its own cyclic move sequence in a [`Lane`].
//! [`SyncDriver`] advances all lanes one move per round and stops at the
//! first round after which every set is won.

pub mod sync;

pub use sync::{Lane, RunOutcome, SyncDriver};
