//! Turn-based battle resolution.
//!
//! A battle consumes the player plus every creature in the triggering area
//! and runs alternating turns until resolution. Turn order is fixed and
//! deterministic: creatures act in area-list order, then the player, each
//! full round repeating until either side is dead.

use crate::config::GameConfig;
use crate::defs::ItemDefinition;
use crate::dialogue::{Console, Dialogue};
use crate::registry::{LookupError, Registry};
use crate::rng::GameRng;
use crate::state::{AreaState, PlayerState};

/// Terminal state of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// All creatures are dead; `xp_gained` was granted to the player.
    Victory { xp_gained: u32 },
    /// The player's health reached zero.
    Defeat,
}

/// A battle aborted mid-resolution. No retries: the error surfaces to the
/// session loop.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// The battle engine. Stateless: all mutable state lives in the combatants.
pub struct Battle;

impl Battle {
    /// Run a battle to resolution, mutating the player and the area.
    ///
    /// On victory the summed experience of the area's creature list is
    /// granted to the player, each creature's loot is dropped onto the
    /// area floor, and the creature list is cleared. On defeat the engine
    /// only reports; ending the session is the caller's decision.
    pub fn run(
        player: &mut PlayerState,
        area: &mut AreaState,
        registry: &Registry,
        config: &GameConfig,
        rng: &mut GameRng,
        console: &mut dyn Console,
    ) -> Result<BattleOutcome, BattleError> {
        tracing::debug!(area = %area.id, creatures = area.creatures.len(), "battle started");

        loop {
            // Creature turns, in area-list order. The player is the sole
            // target in a single-player battle.
            for creature in area.creatures.iter().filter(|c| c.is_alive()) {
                let dealt = player
                    .equipped_armor()
                    .and_then(ItemDefinition::as_armor)
                    .map(|armor| armor.mitigate(creature.strength))
                    .unwrap_or(creature.strength);
                player.take_damage(dealt);
                console.print(&format!(
                    "The {} hits you for {} damage. ({}/{} hp)",
                    creature.name, dealt, player.hp, player.hp_max
                ));

                if !player.is_alive() {
                    tracing::debug!(area = %area.id, "battle lost");
                    return Ok(BattleOutcome::Defeat);
                }
            }

            if area.creatures.iter().all(|c| !c.is_alive()) {
                return Self::resolve_victory(player, area, registry, config, console);
            }

            // Player turn.
            Self::player_turn(player, area, rng, console)?;

            if area.creatures.iter().all(|c| !c.is_alive()) {
                return Self::resolve_victory(player, area, registry, config, console);
            }
        }
    }

    fn player_turn(
        player: &mut PlayerState,
        area: &mut AreaState,
        rng: &mut GameRng,
        console: &mut dyn Console,
    ) -> Result<(), BattleError> {
        let actions = Dialogue::new("What will you do?", ["Attack"]);
        while actions.activate(console) == 0 {
            // The meta-menu sentinel has no meaning mid-battle.
        }

        let living: Vec<usize> = area
            .creatures
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect();

        let mut targets = Dialogue::new("Attack which?", Vec::<String>::new());
        for &i in &living {
            targets.push_choice(area.creatures[i].name.clone());
        }
        let selection = loop {
            let choice = targets.activate(console);
            if choice > 0 {
                break choice;
            }
        };
        let target = &mut area.creatures[living[selection - 1]];

        // An equipped id that no longer resolves in the inventory is a
        // broken reference, fatal to the battle.
        if let Some(id) = player.equipped_weapon_id()
            && player.equipped_weapon().is_none()
        {
            return Err(LookupError::new("item", id).into());
        }

        let roll = player
            .attack_roll()
            .roll_damage(player.strength, player.crit_chance, rng);
        if roll.missed {
            console.print(&format!("You swing at the {} and miss.", target.name));
            return Ok(());
        }

        target.take_damage(roll.amount);
        if roll.critical {
            console.print(&format!(
                "Critical hit! You strike the {} for {} damage.",
                target.name, roll.amount
            ));
        } else {
            console.print(&format!(
                "You hit the {} for {} damage.",
                target.name, roll.amount
            ));
        }
        if !target.is_alive() {
            console.print(&format!("The {} dies.", target.name));
        }
        Ok(())
    }

    fn resolve_victory(
        player: &mut PlayerState,
        area: &mut AreaState,
        registry: &Registry,
        config: &GameConfig,
        console: &mut dyn Console,
    ) -> Result<BattleOutcome, BattleError> {
        let xp_gained: u32 = area.creatures.iter().map(|c| c.xp).sum();
        player.grant_xp(xp_gained, config);
        console.print(&format!("You gained {xp_gained} experience!"));

        // Loot falls to the area floor, ready to be searched for.
        for creature in &area.creatures {
            for loot_id in &creature.loot {
                let item: &ItemDefinition = registry.get(loot_id)?;
                area.items.add(item.clone());
            }
        }
        area.creatures.clear();

        tracing::debug!(area = %area.id, xp_gained, "battle won");
        Ok(BattleOutcome::Victory { xp_gained })
    }
}
