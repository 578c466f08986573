use std::collections::{HashMap, HashSet};

use crate::{
    card::{Card, CardColor, Rank},
    constants::*,
};

/// Builds the 108 card deck in catalog order: for each suit color the number
/// cards, then skips, reverses and draw twos, followed by the wilds.
pub fn build_standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

    for color in SUIT_COLORS {
        // Number Cards
        for number in NUMBER_CARDS_PER_COLOR {
            cards.push(Card::from_catalog(color, Rank::Number(*number)));
        }

        // Skip Cards
        for _ in 0..SKIP_CARDS_PER_COLOR {
            cards.push(Card::from_catalog(color, Rank::Skip));
        }

        // Reverse Cards
        for _ in 0..REVERSE_CARDS_PER_COLOR {
            cards.push(Card::from_catalog(color, Rank::Reverse));
        }

        // Draw Two Cards
        for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
            cards.push(Card::from_catalog(color, Rank::DrawTwo));
        }
    }

    for _ in 0..WILD_CARDS_IN_DECK {
        cards.push(Card::from_catalog(CardColor::Wild, Rank::Wild));
    }

    for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
        cards.push(Card::from_catalog(CardColor::Wild, Rank::WildDrawFour));
    }

    cards
}

fn face_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> HashMap<(CardColor, Rank), usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry((card.color(), card.rank())).or_insert(0) += 1;
    }
    counts
}

/// Whether `cards` is exactly the standard multiset of faces, with no card
/// appearing twice.
pub fn is_standard_composition(cards: &[Card]) -> bool {
    if cards.len() != TOTAL_CARDS_IN_DECK as usize {
        return false;
    }

    let ids: HashSet<_> = cards.iter().map(Card::id).collect();
    if ids.len() != cards.len() {
        return false;
    }

    face_counts(cards) == face_counts(&build_standard_deck())
}
