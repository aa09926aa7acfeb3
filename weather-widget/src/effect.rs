//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure; the main loop turns effects into spawned work.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spawn one widget run (acquire location, fetch, render)
    RunWidget,
}
