//! Systems that operate on the game world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components.

pub mod movement;
pub mod snapshot;
