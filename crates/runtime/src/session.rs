//! Top-level game session: navigation, encounters and menus.

use game_core::{
    Battle, BattleOutcome, Console, Dialogue, GameConfig, GameRng, ItemClass, LookupError,
    PlayerClass, PlayerState, Registry, WorldState,
};

use crate::error::SessionError;
use crate::repository::{SaveDocuments, SaveRepository};

/// Result of moving the player through a door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// The door requires a key the player lacks; nothing changed.
    Locked,
    /// The player had the key: the door is now permanently unlocked and
    /// the player moved through it.
    Unlocked,
    /// The door was already open and the player moved through it.
    Passed,
}

/// Ask for a name and either load the matching save or create a fresh
/// character through class selection.
///
/// A missing save never errors; it routes to the class dialogue. Fighter
/// and Rogue are the offered classes, anything else (including the meta
/// sentinel) falls back to Adventurer.
pub fn start_player(
    registry: &Registry,
    config: &GameConfig,
    repository: &dyn SaveRepository,
    console: &mut dyn Console,
) -> Result<PlayerState, SessionError> {
    console.print("What's your name?");
    let name = console.read_token();

    if let Some(docs) = repository.load(&name)? {
        tracing::info!(player = %name, "loaded existing save");
        return Ok(docs.restore(registry, config)?);
    }

    let class = match Dialogue::new("Choose your class", ["Fighter", "Rogue"]).activate(console) {
        1 => PlayerClass::Fighter,
        2 => PlayerClass::Rogue,
        _ => PlayerClass::Adventurer,
    };
    tracing::info!(player = %name, %class, "created new character");
    Ok(PlayerState::new(name, class, config))
}

/// A running game session.
///
/// Owns all mutable state of one playthrough; the registry stays shared
/// and read-only. The session is strictly sequential: the only suspension
/// points are console reads.
pub struct Session<'a, R: SaveRepository> {
    registry: &'a Registry,
    config: &'a GameConfig,
    repository: R,
    world: WorldState,
    player: PlayerState,
    rng: GameRng,
}

impl<'a, R: SaveRepository> Session<'a, R> {
    /// Instantiate the live world and wrap the player into a session.
    pub fn new(
        registry: &'a Registry,
        config: &'a GameConfig,
        repository: R,
        player: PlayerState,
    ) -> Result<Self, SessionError> {
        let world = WorldState::instantiate(registry)?;
        Ok(Self {
            registry,
            config,
            repository,
            world,
            player,
            rng: GameRng::from_entropy(),
        })
    }

    /// Replace the time-seeded rng, for deterministic tests.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Run the session until the player dies.
    ///
    /// Every iteration marks the current area visited and autosaves before
    /// anything else happens, so progress survives a battle loss.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<(), SessionError> {
        loop {
            self.player.visited.insert(self.player.current_area.clone());
            self.autosave()?;

            let area_id = self.player.current_area.clone();
            if !self.world.area(&area_id)?.creatures.is_empty() {
                self.announce_ambush(console)?;
                let outcome = Battle::run(
                    &mut self.player,
                    self.world.area_mut(&area_id)?,
                    self.registry,
                    self.config,
                    &mut self.rng,
                    console,
                )?;
                match outcome {
                    BattleOutcome::Victory { .. } => {
                        // Restart the iteration to force a fresh save.
                        continue;
                    }
                    BattleOutcome::Defeat => {
                        console.print("\t----YOU DIED----\n    Game Over");
                        return Ok(());
                    }
                }
            }

            if !self.player.is_alive() {
                console.print("\t----YOU DIED----\n    Game Over");
                return Ok(());
            }

            let (static_len, door_count, options) = self.room_options()?;
            let result = options.activate(console);

            if result == 0 {
                self.meta_menu(console);
            } else if result <= static_len {
                // Content hook for area-specific events.
            } else if result <= static_len + door_count {
                let door_index = result - static_len - 1;
                self.report_traversal(door_index, console)?;
            } else {
                self.search(console)?;
            }
        }
    }

    fn announce_ambush(&self, console: &mut dyn Console) -> Result<(), SessionError> {
        let area = self.world.area(&self.player.current_area)?;
        let names: Vec<&str> = area.creatures.iter().map(|c| c.name.as_str()).collect();
        console.print(&format!("You are attacked by {}!", names.join(", ")));
        Ok(())
    }

    /// The room dialogue: static area choices, one choice per door, then
    /// "Search".
    fn room_options(&self) -> Result<(usize, usize, Dialogue), SessionError> {
        let area = self.world.area(&self.player.current_area)?;
        let mut options = Dialogue::new(area.prompt.clone(), area.choices.clone());
        for door in &area.doors {
            options.push_choice(format!("Go through the {}", door.description));
        }
        options.push_choice("Search");
        Ok((area.choices.len(), area.doors.len(), options))
    }

    /// Move the player through the given door if its lock allows it.
    pub fn traverse(&mut self, door_index: usize) -> Result<Traversal, SessionError> {
        let area = self.world.area_mut(&self.player.current_area)?;
        let door = area
            .doors
            .get_mut(door_index)
            .ok_or_else(|| LookupError::new("door", door_index.to_string()))?;

        if door.locked {
            let has_key = door
                .key
                .as_deref()
                .is_some_and(|key| self.player.inventory.contains(key));
            if !has_key {
                return Ok(Traversal::Locked);
            }
            door.locked = false;
            let target = door.target.clone();
            tracing::info!(area = %target, "unlocked door and moved");
            self.player.current_area = target;
            return Ok(Traversal::Unlocked);
        }

        let target = door.target.clone();
        tracing::debug!(area = %target, "moved through open door");
        self.player.current_area = target;
        Ok(Traversal::Passed)
    }

    fn report_traversal(
        &mut self,
        door_index: usize,
        console: &mut dyn Console,
    ) -> Result<(), SessionError> {
        let description = self.world.area(&self.player.current_area)?.doors[door_index]
            .description
            .clone();
        match self.traverse(door_index)? {
            Traversal::Locked => {
                console.print(&format!("The {description} is locked."));
            }
            Traversal::Unlocked => {
                console.print(&format!("You unlock the {description} and go through it."));
            }
            Traversal::Passed => {
                console.print(&format!("You go through the {description}."));
            }
        }
        Ok(())
    }

    /// Drain the area's loose items into the player's inventory.
    fn search(&mut self, console: &mut dyn Console) -> Result<(), SessionError> {
        let area = self.world.area_mut(&self.player.current_area)?;
        if area.items.is_empty() {
            console.print("You find nothing.");
            return Ok(());
        }

        let (listing, _) = area.items.describe(ItemClass::Any, false);
        console.print("You find:");
        console.print(&listing);
        self.player.inventory.merge(&mut area.items);
        Ok(())
    }

    /// Character information menu: items, equipment, character sheet.
    fn meta_menu(&mut self, console: &mut dyn Console) {
        match Dialogue::new("Menu\n====", ["Items", "Equipment", "Character"]).activate(console) {
            1 => {
                let (listing, _) = self.player.inventory.describe(ItemClass::Any, false);
                console.print(&format!("Items\n=====\n{listing}----------------"));
            }
            2 => {
                self.equipment_menu(console);
            }
            3 => {
                console.print(&self.character_sheet());
            }
            _ => {}
        }
    }

    fn equipment_menu(&mut self, console: &mut dyn Console) {
        let armor_name = self
            .player
            .equipped_armor()
            .map_or("Nothing", |item| item.name.as_str());
        let weapon_name = self
            .player
            .equipped_weapon()
            .map_or("Nothing", |item| item.name.as_str());
        console.print(&format!(
            "Equipment\n=========\nArmor: {armor_name}\nWeapon: {weapon_name}"
        ));

        match Dialogue::new("", ["Equip Armor", "Equip Weapon", "Close"]).activate(console) {
            1 => self.equip_prompt(ItemClass::Armor, console),
            2 => self.equip_prompt(ItemClass::Weapon, console),
            _ => {}
        }
        console.print("----------------");
    }

    /// List the relevant inventory class numbered and loop a raw numeric
    /// prompt until a valid ordinal (or 0 to cancel) is read.
    fn equip_prompt(&mut self, class: ItemClass, console: &mut dyn Console) {
        let (listing, count) = self.player.inventory.describe(class, true);
        if count == 0 {
            return;
        }
        console.print(&listing);

        loop {
            console.print("Equip which item?");
            let Ok(selection) = console.read_token().trim().parse::<usize>() else {
                continue;
            };
            if selection == 0 {
                return;
            }
            if selection > count {
                continue;
            }

            let Some(id) = self
                .player
                .inventory
                .nth_of_class(class, selection - 1)
                .map(|item| item.id.clone())
            else {
                continue;
            };
            let equipped = match class {
                ItemClass::Armor => self.player.equip_armor(&id),
                _ => self.player.equip_weapon(&id),
            };
            match equipped {
                Ok(_) => {}
                // Cannot equip what is not (or no longer) in the
                // inventory; report and leave the slot untouched.
                Err(err) => console.print(&err.to_string()),
            }
            return;
        }
    }

    fn character_sheet(&self) -> String {
        let player = &self.player;
        let mut out = format!("Character\n=========\n{}", player.name);
        out.push_str(&format!(" the {}\n", player.class));
        out.push_str(&format!("Health:   {} / {}\n", player.hp, player.hp_max));
        out.push_str(&format!("Strength: {}\n", player.strength));
        out.push_str(&format!("Agility:  {}\n", player.agility));
        out.push_str(&format!(
            "Level:    {} ({} / {})\n",
            player.level,
            player.xp,
            self.config.xp_to_level(player.level + 1)
        ));
        out.push_str("----------------");
        out
    }

    fn autosave(&self) -> Result<(), SessionError> {
        let docs = SaveDocuments::capture(&self.player);
        self.repository.save(&docs)?;
        tracing::debug!(player = %self.player.name, area = %self.player.current_area, "autosaved");
        Ok(())
    }
}
