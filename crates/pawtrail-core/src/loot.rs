//! Treasure items the dog can dig up on a walk.
//!
//! Like the achievement catalog, the loot table is immutable and loaded
//! once. Items are grouped into rarity tiers; the economy rolls a tier
//! first and then picks uniformly from that tier's pool.

use serde::{Deserialize, Serialize};

/// Loot rarity tier. Distinct from achievement rarity: loot has an
/// `Uncommon` tier and no `Epic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LootRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl LootRarity {
    /// All tiers, cheapest first.
    pub const ALL: [LootRarity; 4] = [
        LootRarity::Common,
        LootRarity::Uncommon,
        LootRarity::Rare,
        LootRarity::Legendary,
    ];
}

/// One treasure item definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LootItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: LootRarity,
    /// Legendary items flagged here only ever drop from walks, never from
    /// other sources such as the shop.
    pub map_exclusive: bool,
}

/// Immutable table of all treasure items.
pub struct LootCatalog {
    items: Vec<LootItem>,
}

impl LootCatalog {
    /// The built-in treasure table.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    pub fn from_items(items: Vec<LootItem>) -> Self {
        Self { items }
    }

    /// Look up an item by id.
    pub fn lookup(&self, id: &str) -> Option<&LootItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items of one rarity tier, in declaration order. May be empty, in
    /// which case a successful drop of that tier yields nothing.
    pub fn pool(&self, rarity: LootRarity) -> Vec<&LootItem> {
        self.items.iter().filter(|i| i.rarity == rarity).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LootItem> + '_ {
        self.items.iter()
    }
}

fn builtin_items() -> Vec<LootItem> {
    use LootRarity::{Common, Legendary, Rare, Uncommon};

    let item = |id, name, description, rarity, map_exclusive| LootItem {
        id,
        name,
        description,
        rarity,
        map_exclusive,
    };
    vec![
        item(
            "c_stick",
            "Dry Branch",
            "Nobody knows why, but the dog loves chewing this.",
            Common,
            false,
        ),
        item(
            "c_ball",
            "Worn Tennis Ball",
            "Chewed far beyond recognition.",
            Common,
            false,
        ),
        item(
            "c_can",
            "Tin Can",
            "Technically litter, but the dog seems fascinated.",
            Common,
            false,
        ),
        item(
            "u_stone",
            "Smooth Pebble",
            "A remarkably round little stone.",
            Uncommon,
            false,
        ),
        item(
            "u_coin",
            "Lost Coin",
            "Looks like today is a lucky day!",
            Uncommon,
            false,
        ),
        item(
            "u_feather",
            "Bird Feather",
            "Probably a gift from a pigeon.",
            Uncommon,
            false,
        ),
        item(
            "r_glass",
            "Glowing Glass Bead",
            "Sparkles in the sunlight.",
            Rare,
            false,
        ),
        item(
            "r_duck",
            "Squeaky Toy Duck",
            "The kind that squeaks when you squeeze it!",
            Rare,
            false,
        ),
        item(
            "l_alien",
            "Alien Widget",
            "What kind of technology is this?!",
            Legendary,
            true,
        ),
        item(
            "l_gold_bone",
            "Golden Bone",
            "The legendary treasure every dog dreams of.",
            Legendary,
            true,
        ),
    ]
}
