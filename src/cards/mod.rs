//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static catalog template of a Pokémon
//! - `Card`: A dealt instance with its own id and current HP
//! - `Ability`: An attack or effect usable by an active card
//! - `CardCatalog`: Definition lookup by catalog key

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, STARTER_DECK};
pub use definition::{
    Ability, AbilityCategory, AbilityId, AbilityList, Card, CardDefinition, CardId, ElementType, Rarity,
};
