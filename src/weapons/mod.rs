//! Weapon roster state: the fixed slot set owned by a session and the
//! bounded selector moving between slots.

/// Bounded, non-wrapping slot selection.
pub mod selector;
/// Loaded weapon slots.
pub mod slot;

pub use selector::{SwitchDirection, WeaponSelector};
pub use slot::{WeaponSet, WeaponSlot};
