//! The ant colony optimization loop.
//!
//! - [`AntColony`] — Validated run: construct ants, evaporate, deposit, bound
//! - [`UpdatePolicy`] — Variant-specific rules ([`StandardPolicy`], [`MaxMinPolicy`])
//! - [`StagnationTracker`] — Counts repeated iteration-best values
//! - [`ProgressObserver`] — Periodic progress callback
//! - [`AcoResult`] — Final and best-ever outcome

mod colony;
mod observer;
mod policy;
mod result;
mod stagnation;
mod state;

pub use colony::AntColony;
pub use observer::{HistoryObserver, LogObserver, NoopObserver, ProgressObserver};
pub use policy::{policy_for, MaxMinPolicy, StandardPolicy, UpdatePolicy};
pub use result::{AcoResult, IterationRecord};
pub use stagnation::StagnationTracker;
pub use state::RunState;
