//! Static entity definitions loaded from content files.
//!
//! Definitions are immutable templates: the registry owns the canonical copy
//! and live state ([`crate::state`]) is instantiated from them at session
//! start. Cross-type references (a door's target area, a creature's loot)
//! are stored as raw identifiers and resolved through the registry at the
//! point of use.
mod creatures;
mod items;
mod world;

pub use creatures::CreatureDefinition;
pub use items::{ArmorData, DamageRoll, ItemDefinition, ItemKind, WeaponData};
pub use world::{AreaDefinition, DoorDefinition};
