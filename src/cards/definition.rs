//! Card and ability data model.
//!
//! `CardDefinition` holds the immutable template of a Pokémon as it appears
//! in the catalog. `CardDefinition::instantiate` turns it into a `Card`: an
//! independent instance with its own id and current HP. Two Pikachu dealt
//! into the same deck are two distinct cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::StateError;

/// Elemental type of a Pokémon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Fighting,
    Dark,
    Steel,
    Fairy,
    Normal,
}

/// Rarity tier of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Category of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    Physical,
    Special,
    Status,
}

/// Identifier of an ability, unique within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AbilityId(pub u32);

impl AbilityId {
    /// Create a new ability ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ability({})", self.0)
    }
}

/// Identifier of a dealt card instance, unique within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An attack or effect a card can use while active.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub description: String,
    /// Damage dealt to the opposing active card.
    pub damage: u32,
    /// Energy spent to use the ability.
    pub cost: u32,
    pub category: AbilityCategory,
    /// Carried for display; no rule reads it yet.
    pub cooldown: Option<u32>,
}

impl Ability {
    /// Create a new ability with an empty description and no cooldown.
    #[must_use]
    pub fn new(
        id: AbilityId,
        name: impl Into<String>,
        damage: u32,
        cost: u32,
        category: AbilityCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            damage,
            cost,
            category,
            cooldown: None,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cooldown (builder pattern).
    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = Some(turns);
        self
    }
}

/// Most cards carry one or two abilities.
pub type AbilityList = SmallVec<[Ability; 2]>;

/// Static card template stored in the catalog.
///
/// ## Example
///
/// ```
/// use pokecard_battle::cards::{Ability, AbilityCategory, AbilityId, CardDefinition, CardId, ElementType};
///
/// let pikachu = CardDefinition::new("pikachu", "Pikachu", ElementType::Electric, 60)
///     .with_ability(Ability::new(AbilityId::new(1), "Thunderbolt", 30, 1, AbilityCategory::Special));
///
/// let card = pikachu.instantiate(CardId::new(7));
/// assert_eq!(card.hp(), 60);
/// assert_eq!(card.id, CardId::new(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog key (`"pikachu"`).
    pub key: String,
    pub name: String,
    pub element: ElementType,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub abilities: AbilityList,
    pub rarity: Rarity,
    /// Energy needed to put the card into play.
    pub cost: u32,
}

impl CardDefinition {
    /// Create a common, cost-1 definition with zeroed stats and no abilities.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, element: ElementType, max_hp: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            element,
            max_hp,
            attack: 0,
            defense: 0,
            speed: 0,
            abilities: AbilityList::new(),
            rarity: Rarity::Common,
            cost: 1,
        }
    }

    /// Set attack, defense and speed (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32, speed: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self.speed = speed;
        self
    }

    /// Append an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the play cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Create a fresh, full-HP card instance of this definition.
    #[must_use]
    pub fn instantiate(&self, id: CardId) -> Card {
        Card {
            id,
            name: self.name.clone(),
            element: self.element,
            hp: self.max_hp,
            max_hp: self.max_hp,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            abilities: self.abilities.clone(),
            rarity: self.rarity,
            cost: self.cost,
        }
    }
}

/// A card dealt into a game.
///
/// `hp` only ever decreases, through [`Card::take_damage`], and never drops
/// below zero or rises above `max_hp`. Deserialization rejects cards with
/// `hp > max_hp`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub element: ElementType,
    hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub abilities: AbilityList,
    pub rarity: Rarity,
    pub cost: u32,
}

/// Unchecked wire form of a [`Card`].
#[derive(Deserialize)]
struct CardRecord {
    id: CardId,
    name: String,
    element: ElementType,
    hp: u32,
    max_hp: u32,
    attack: u32,
    defense: u32,
    speed: u32,
    abilities: AbilityList,
    rarity: Rarity,
    cost: u32,
}

impl TryFrom<CardRecord> for Card {
    type Error = StateError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        if record.hp > record.max_hp {
            return Err(StateError::HpAboveMax {
                card: record.id,
                hp: record.hp,
                max_hp: record.max_hp,
            });
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            element: record.element,
            hp: record.hp,
            max_hp: record.max_hp,
            attack: record.attack,
            defense: record.defense,
            speed: record.speed,
            abilities: record.abilities,
            rarity: record.rarity,
            cost: record.cost,
        })
    }
}

impl Card {
    /// Current hit points.
    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Whether the card has been knocked out.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Remaining HP as a fraction of max HP, for health bars.
    #[must_use]
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.hp as f32 / self.max_hp as f32
        }
    }

    /// Look up one of this card's abilities.
    #[must_use]
    pub fn ability(&self, id: AbilityId) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.id == id)
    }

    /// Reduce HP by `amount`, saturating at zero.
    ///
    /// Returns the HP actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charizard() -> CardDefinition {
        CardDefinition::new("charizard", "Charizard", ElementType::Fire, 120)
            .with_stats(84, 78, 100)
            .with_ability(
                Ability::new(AbilityId::new(1), "Flamethrower", 40, 2, AbilityCategory::Special)
                    .with_description("Deal 40 fire damage"),
            )
            .with_ability(Ability::new(AbilityId::new(2), "Dragon Claw", 30, 1, AbilityCategory::Physical))
            .with_rarity(Rarity::Legendary)
            .with_cost(3)
    }

    #[test]
    fn test_ids() {
        assert_eq!(CardId::new(42).raw(), 42);
        assert_eq!(format!("{}", CardId::new(42)), "Card(42)");
        assert_eq!(format!("{}", AbilityId::new(3)), "Ability(3)");
    }

    #[test]
    fn test_definition_builder() {
        let def = charizard();

        assert_eq!(def.key, "charizard");
        assert_eq!(def.attack, 84);
        assert_eq!(def.abilities.len(), 2);
        assert!(!def.abilities.spilled());
        assert_eq!(def.rarity, Rarity::Legendary);
        assert_eq!(def.cost, 3);
    }

    #[test]
    fn test_instantiate_is_full_hp() {
        let card = charizard().instantiate(CardId::new(5));

        assert_eq!(card.id, CardId::new(5));
        assert_eq!(card.hp(), 120);
        assert_eq!(card.max_hp, 120);
        assert_eq!(card.hp_fraction(), 1.0);
    }

    #[test]
    fn test_instances_are_independent() {
        let def = charizard();
        let mut a = def.instantiate(CardId::new(1));
        let b = def.instantiate(CardId::new(2));

        a.take_damage(50);

        assert_eq!(a.hp(), 70);
        assert_eq!(b.hp(), 120);
    }

    #[test]
    fn test_take_damage_saturates() {
        let mut card = charizard().instantiate(CardId::new(1));

        assert_eq!(card.take_damage(100), 100);
        assert_eq!(card.hp(), 20);
        assert!(!card.is_defeated());

        assert_eq!(card.take_damage(40), 20);
        assert_eq!(card.hp(), 0);
        assert!(card.is_defeated());

        assert_eq!(card.take_damage(10), 0);
        assert_eq!(card.hp(), 0);
    }

    #[test]
    fn test_ability_lookup() {
        let card = charizard().instantiate(CardId::new(1));

        assert_eq!(card.ability(AbilityId::new(2)).map(|a| a.damage), Some(30));
        assert!(card.ability(AbilityId::new(99)).is_none());
    }

    #[test]
    fn test_serialization_uses_lowercase_enums() {
        let json = serde_json::to_string(&ElementType::Electric).unwrap();
        assert_eq!(json, "\"electric\"");

        let card = charizard().instantiate(CardId::new(1));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_hp_above_max() {
        let card = charizard().instantiate(CardId::new(5));
        let mut value = serde_json::to_value(&card).unwrap();
        value["hp"] = serde_json::json!(999);

        let err = serde_json::from_value::<Card>(value).unwrap_err();
        assert!(err.to_string().contains("Card(5) has 999 hp, above its max of 120"));
    }
}
