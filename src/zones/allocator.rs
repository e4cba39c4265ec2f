//! Starter deck construction, shuffling and dealing.
//!
//! Used only when a game starts:
//!
//! ```
//! use pokecard_battle::cards::{CardCatalog, CardId};
//! use pokecard_battle::core::GameRng;
//! use pokecard_battle::zones::{build_starter_deck, deal_hand, shuffle};
//!
//! let catalog = CardCatalog::starter();
//! let keys = ["pikachu", "pikachu", "charizard", "eevee"];
//!
//! let deck = build_starter_deck(&catalog, &keys, CardId::new(1)).unwrap();
//! let deck = shuffle(deck, &mut GameRng::new(3));
//! let (hand, rest) = deal_hand(deck, 3);
//!
//! assert_eq!(hand.len(), 3);
//! assert_eq!(rest.len(), 1);
//! ```

use im::Vector;

use crate::cards::{Card, CardCatalog, CardId};
use crate::core::{ConfigError, GameRng};

/// Instantiate one fresh card per catalog key, in key order.
///
/// Card ids are assigned sequentially from `first_id`, so duplicate keys
/// still produce distinct cards.
pub fn build_starter_deck<S: AsRef<str>>(
    catalog: &CardCatalog,
    keys: &[S],
    first_id: CardId,
) -> Result<Vec<Card>, ConfigError> {
    keys.iter()
        .zip(first_id.raw()..)
        .map(|(key, raw_id)| {
            let key = key.as_ref();
            catalog
                .get(key)
                .map(|def| def.instantiate(CardId::new(raw_id)))
                .ok_or_else(|| ConfigError::UnknownCard(key.to_string()))
        })
        .collect()
}

/// Uniformly shuffle a deck.
#[must_use]
pub fn shuffle(mut deck: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
    rng.shuffle(&mut deck);
    deck
}

/// Split off the first `n` cards as the opening hand.
///
/// Returns `(hand, remaining_deck)`; the remaining deck keeps its order.
/// A deck shorter than `n` is dealt entirely into the hand.
#[must_use]
pub fn deal_hand(deck: Vec<Card>, n: usize) -> (Vector<Card>, Vector<Card>) {
    let mut hand: Vector<Card> = deck.into_iter().collect();
    let rest = hand.split_off(n.min(hand.len()));
    (hand, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cards: &[Card]) -> Vec<u32> {
        cards.iter().map(|c| c.id.raw()).collect()
    }

    #[test]
    fn test_build_is_order_stable() {
        let catalog = CardCatalog::starter();
        let keys = ["pikachu", "pikachu", "charizard"];

        let deck = build_starter_deck(&catalog, &keys, CardId::new(10)).unwrap();
        let again = build_starter_deck(&catalog, &keys, CardId::new(10)).unwrap();

        assert_eq!(deck, again);
        assert_eq!(ids(&deck), vec![10, 11, 12]);
        let names: Vec<_> = deck.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Pikachu", "Pikachu", "Charizard"]);
    }

    #[test]
    fn test_duplicates_are_distinct_instances() {
        let catalog = CardCatalog::starter();
        let deck = build_starter_deck(&catalog, &["pikachu", "pikachu"], CardId::new(1)).unwrap();

        assert_ne!(deck[0].id, deck[1].id);
        assert!(deck.iter().all(|c| c.hp() == c.max_hp));
    }

    #[test]
    fn test_build_unknown_key() {
        let catalog = CardCatalog::starter();
        let result = build_starter_deck(&catalog, &["pikachu", "missingno"], CardId::new(1));

        assert_eq!(result, Err(ConfigError::UnknownCard("missingno".to_string())));
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let catalog = CardCatalog::starter();
        let deck = build_starter_deck(&catalog, crate::cards::STARTER_DECK, CardId::new(1)).unwrap();

        let shuffled = shuffle(deck.clone(), &mut GameRng::new(5));

        let mut before = ids(&deck);
        let mut after = ids(&shuffled);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_deal_hand_splits_front() {
        let catalog = CardCatalog::starter();
        let deck = build_starter_deck(&catalog, &["abra", "eevee", "machop", "squirtle"], CardId::new(1)).unwrap();

        let (hand, rest) = deal_hand(deck, 3);

        let hand: Vec<_> = hand.iter().map(|c| c.id.raw()).collect();
        let rest: Vec<_> = rest.iter().map(|c| c.id.raw()).collect();
        assert_eq!(hand, vec![1, 2, 3]);
        assert_eq!(rest, vec![4]);
    }

    #[test]
    fn test_deal_hand_short_deck() {
        let catalog = CardCatalog::starter();
        let deck = build_starter_deck(&catalog, &["abra", "eevee"], CardId::new(1)).unwrap();

        let (hand, rest) = deal_hand(deck, 3);

        assert_eq!(hand.len(), 2);
        assert!(rest.is_empty());
    }
}
