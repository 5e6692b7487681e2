//! Core game logic and data types for the Wayfarer text adventure.
//!
//! `game-core` defines the canonical rules (definitions, battle engine,
//! dialogue state machine, live world state) and exposes pure APIs that are
//! reused by the runtime and offline tools. All interaction with the player
//! flows through the [`dialogue::Console`] boundary, and all static content
//! is resolved through [`registry::Registry`].
pub mod combat;
pub mod config;
pub mod defs;
pub mod dialogue;
pub mod registry;
pub mod rng;
pub mod state;

pub use combat::{Battle, BattleError, BattleOutcome};
pub use config::{ClassStats, GameConfig};
pub use defs::{
    AreaDefinition, ArmorData, CreatureDefinition, DamageRoll, DoorDefinition, ItemDefinition,
    ItemKind, WeaponData,
};
pub use dialogue::{Console, Dialogue, ScriptedConsole};
pub use registry::{Definition, LookupError, Registry};
pub use rng::GameRng;
pub use state::{
    AreaState, CreatureState, DoorState, EquipError, Inventory, ItemClass, PlayerClass,
    PlayerState, WorldState,
};
