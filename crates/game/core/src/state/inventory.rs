//! Item storage for players and area floors.

use crate::defs::ItemDefinition;

/// Filter over the item hierarchy used for listing and ordinal access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemClass {
    Any,
    Weapon,
    Armor,
}

impl ItemClass {
    fn matches(self, item: &ItemDefinition) -> bool {
        match self {
            Self::Any => true,
            Self::Weapon => item.is_weapon(),
            Self::Armor => item.is_armor(),
        }
    }
}

/// Insertion-stable collection of owned item instances.
///
/// Ordinals handed out by a class-filtered enumeration stay valid until the
/// next mutation, so "list numbered, then read an ordinal back" works
/// without re-listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    items: Vec<ItemDefinition>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: ItemDefinition) {
        self.items.push(item);
    }

    /// Move all items from `other` into this inventory, leaving it empty.
    pub fn merge(&mut self, other: &mut Inventory) {
        self.items.append(&mut other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn of_class(&self, class: ItemClass) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter().filter(move |item| class.matches(item))
    }

    pub fn count_of(&self, class: ItemClass) -> usize {
        self.of_class(class).count()
    }

    /// The nth item (0-based) of a class, in the same order `of_class`
    /// enumerates. Callers check the count first; `None` means the ordinal
    /// was out of range.
    pub fn nth_of_class(&self, class: ItemClass, index: usize) -> Option<&ItemDefinition> {
        self.of_class(class).nth(index)
    }

    /// Render a listing of one item class, optionally with 1-based ordinal
    /// labels. Returns the text and the number of items listed; an empty
    /// filter result is a count of zero, never an error.
    pub fn describe(&self, class: ItemClass, numbered: bool) -> (String, usize) {
        let mut out = String::new();
        let mut count = 0;
        for item in self.of_class(class) {
            count += 1;
            if numbered {
                out.push_str(&format!("{}: {}\n", count, item.summary()));
            } else {
                out.push_str(&format!("{}\n", item.summary()));
            }
        }
        (out, count)
    }

    /// Item ids in insertion order, for persistence.
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{ArmorData, ItemKind, WeaponData};

    fn trinket(id: &str) -> ItemDefinition {
        ItemDefinition {
            id: id.to_owned(),
            name: id.to_owned(),
            description: String::new(),
            value: 0,
            kind: ItemKind::Trinket,
        }
    }

    fn weapon(id: &str) -> ItemDefinition {
        ItemDefinition {
            kind: ItemKind::Weapon(WeaponData {
                damage_min: 1,
                damage_max: 2,
                hit_chance: 1.0,
            }),
            ..trinket(id)
        }
    }

    fn armor(id: &str) -> ItemDefinition {
        ItemDefinition {
            kind: ItemKind::Armor(ArmorData { defense: 1 }),
            ..trinket(id)
        }
    }

    #[test]
    fn merge_unions_in_order_and_empties_the_source() {
        let mut a = Inventory::new();
        a.add(trinket("key"));
        let mut b = Inventory::new();
        b.add(weapon("sword"));
        b.add(armor("jerkin"));

        a.merge(&mut b);

        assert_eq!(a.ids(), vec!["key", "sword", "jerkin"]);
        assert!(b.is_empty());
    }

    #[test]
    fn merging_an_empty_inventory_is_a_noop() {
        let mut a = Inventory::new();
        a.add(trinket("key"));
        let mut b = Inventory::new();

        a.merge(&mut b);
        assert_eq!(a.ids(), vec!["key"]);
    }

    #[test]
    fn class_filter_keeps_insertion_order() {
        let mut inv = Inventory::new();
        inv.add(trinket("key"));
        inv.add(weapon("dagger"));
        inv.add(armor("jerkin"));
        inv.add(weapon("sword"));

        let weapons: Vec<_> = inv.of_class(ItemClass::Weapon).map(|i| i.id.as_str()).collect();
        assert_eq!(weapons, vec!["dagger", "sword"]);
        assert_eq!(inv.nth_of_class(ItemClass::Weapon, 1).map(|i| i.id.as_str()), Some("sword"));
        assert_eq!(inv.count_of(ItemClass::Armor), 1);
    }

    #[test]
    fn empty_filter_result_is_count_zero() {
        let mut inv = Inventory::new();
        inv.add(trinket("key"));

        let (text, count) = inv.describe(ItemClass::Weapon, true);
        assert_eq!(count, 0);
        assert!(text.is_empty());
        assert!(inv.nth_of_class(ItemClass::Weapon, 0).is_none());
    }
}
