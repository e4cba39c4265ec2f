//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition a game can deal, keyed by
//! its stable catalog key. `CardCatalog::starter()` is the built-in set used
//! to seed starter decks.

use rustc_hash::FxHashMap;

use super::definition::{Ability, AbilityCategory, AbilityId, CardDefinition, ElementType, Rarity};

/// Catalog keys of the default starter deck, in deal order before shuffling.
pub const STARTER_DECK: &[&str] = &[
    "pikachu",
    "pikachu",
    "charizard",
    "squirtle",
    "bulbasaur",
    "machop",
    "abra",
    "umbreon",
    "magnemite",
    "eevee",
];

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use pokecard_battle::cards::{CardCatalog, CardDefinition, ElementType};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new("eevee", "Eevee", ElementType::Normal, 55));
///
/// let found = catalog.get("eevee").unwrap();
/// assert_eq!(found.name, "Eevee");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog of starter Pokémon.
    #[must_use]
    pub fn starter() -> Self {
        let mut catalog = Self::new();
        for def in starter_definitions() {
            catalog.register(def);
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same key already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.key) {
            panic!("Card with key {:?} already registered", card.key);
        }
        self.cards.insert(card.key.clone(), card);
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CardDefinition> {
        self.cards.get(key)
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

fn starter_definitions() -> Vec<CardDefinition> {
    use AbilityCategory::{Physical, Special, Status};

    let ability = |id: u32, name: &str, damage: u32, cost: u32, category: AbilityCategory, text: &str| {
        Ability::new(AbilityId::new(id), name, damage, cost, category).with_description(text)
    };

    vec![
        CardDefinition::new("pikachu", "Pikachu", ElementType::Electric, 60)
            .with_stats(55, 40, 90)
            .with_ability(ability(1, "Thunderbolt", 30, 1, Special, "Deal 30 electric damage"))
            .with_ability(ability(2, "Quick Attack", 15, 0, Physical, "Deal 15 damage, always goes first")),
        CardDefinition::new("charizard", "Charizard", ElementType::Fire, 120)
            .with_stats(84, 78, 100)
            .with_ability(ability(3, "Flamethrower", 40, 2, Special, "Deal 40 fire damage"))
            .with_ability(ability(4, "Dragon Claw", 30, 1, Physical, "Deal 30 physical damage"))
            .with_rarity(Rarity::Legendary)
            .with_cost(3),
        CardDefinition::new("squirtle", "Squirtle", ElementType::Water, 50)
            .with_stats(48, 65, 43)
            .with_ability(ability(5, "Water Gun", 20, 1, Special, "Deal 20 water damage"))
            .with_ability(ability(6, "Withdraw", 0, 1, Status, "Retreat into its shell")),
        CardDefinition::new("bulbasaur", "Bulbasaur", ElementType::Grass, 55)
            .with_stats(49, 49, 45)
            .with_ability(ability(7, "Vine Whip", 25, 1, Physical, "Deal 25 grass damage"))
            .with_ability(ability(8, "Growl", 0, 0, Status, "Growl at the opponent")),
        CardDefinition::new("machop", "Machop", ElementType::Fighting, 70)
            .with_stats(80, 50, 35)
            .with_ability(ability(9, "Karate Chop", 35, 2, Physical, "Deal 35 fighting damage"))
            .with_ability(ability(10, "Low Kick", 20, 1, Physical, "Deal 20 physical damage"))
            .with_rarity(Rarity::Uncommon)
            .with_cost(2),
        CardDefinition::new("abra", "Abra", ElementType::Psychic, 40)
            .with_stats(20, 15, 90)
            .with_ability(ability(11, "Psybeam", 30, 1, Special, "Deal 30 psychic damage"))
            .with_ability(ability(12, "Teleport", 0, 0, Status, "Blink out of reach"))
            .with_rarity(Rarity::Uncommon),
        CardDefinition::new("umbreon", "Umbreon", ElementType::Dark, 95)
            .with_stats(65, 110, 65)
            .with_ability(ability(13, "Dark Pulse", 35, 2, Special, "Deal 35 dark damage"))
            .with_ability(ability(14, "Mean Look", 0, 1, Status, "Stare the opponent down"))
            .with_rarity(Rarity::Epic)
            .with_cost(3),
        CardDefinition::new("magnemite", "Magnemite", ElementType::Steel, 45)
            .with_stats(35, 70, 45)
            .with_ability(ability(15, "Thunder Shock", 20, 1, Special, "Deal 20 electric damage"))
            .with_ability(ability(16, "Metal Sound", 0, 0, Status, "Emit a grating screech"))
            .with_rarity(Rarity::Uncommon),
        CardDefinition::new("clefairy", "Clefairy", ElementType::Fairy, 65)
            .with_stats(45, 48, 35)
            .with_ability(ability(17, "Moonblast", 30, 2, Special, "Deal 30 fairy damage"))
            .with_ability(ability(18, "Sing", 0, 1, Status, "Lull the opponent").with_cooldown(2))
            .with_rarity(Rarity::Rare)
            .with_cost(2),
        CardDefinition::new("eevee", "Eevee", ElementType::Normal, 55)
            .with_stats(55, 50, 55)
            .with_ability(ability(19, "Tackle", 20, 1, Physical, "Deal 20 physical damage"))
            .with_ability(ability(20, "Tail Whip", 0, 0, Status, "Wag its tail")),
    ]
}
