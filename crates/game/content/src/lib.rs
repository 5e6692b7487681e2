//! Content loaders for reading game data from files.
//!
//! `game-content` converts RON catalogs and the TOML balance config into a
//! populated [`game_core::Registry`]. The [`loaders::ContentFactory`] is
//! the entry point: it loads every catalog in the required order and hands
//! the registry to the runtime.
pub mod loaders;

pub use loaders::{
    AreaLoader, ArmorLoader, ConfigLoader, ContentFactory, CreatureLoader, DoorLoader, ItemLoader,
    LoadResult, WeaponLoader,
};
