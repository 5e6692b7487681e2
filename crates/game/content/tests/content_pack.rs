//! The shipped content pack must load and resolve completely.

use std::path::PathBuf;

use game_content::ContentFactory;
use game_core::{AreaDefinition, DoorDefinition, ItemDefinition, WorldState};

fn shipped_pack() -> ContentFactory {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../content");
    ContentFactory::new(dir)
}

#[test]
fn pack_loads_and_instantiates() {
    let factory = shipped_pack();
    let config = factory.load_config().unwrap();
    let registry = factory.load_registry().unwrap();

    // The starting area must exist, and every cross-reference must
    // resolve when the live world is built.
    registry.get::<AreaDefinition>(&config.starting_area).unwrap();
    let world = WorldState::instantiate(&registry).unwrap();

    let entrance = world.area(&config.starting_area).unwrap();
    assert!(entrance.creatures.is_empty());
    assert!(!entrance.doors.is_empty());
}

#[test]
fn pack_keys_open_something() {
    let registry = shipped_pack().load_registry().unwrap();

    let gate: &DoorDefinition = registry.get("door_corridor_crypt").unwrap();
    assert!(gate.locked);
    let key = gate.key.as_deref().unwrap();
    assert!(registry.get::<ItemDefinition>(key).is_ok());
}

#[test]
fn pack_has_equippable_gear() {
    let registry = shipped_pack().load_registry().unwrap();

    let sword: &ItemDefinition = registry.get("rusty_sword").unwrap();
    assert!(sword.is_weapon());
    let jerkin: &ItemDefinition = registry.get("leather_jerkin").unwrap();
    assert!(jerkin.is_armor());
}
