//! Live, mutable session state.
//!
//! Everything in this module is instantiated per playthrough: the player,
//! and the world's per-area copies of creatures, doors and floor items.
//! Registry templates are never mutated during play.
mod inventory;
mod player;
mod world;

pub use inventory::{Inventory, ItemClass};
pub use player::{EquipError, PlayerClass, PlayerState};
pub use world::{AreaState, CreatureState, DoorState, WorldState};
