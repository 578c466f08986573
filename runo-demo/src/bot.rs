use std::collections::HashMap;

use runo::{
    card::{Card, CardColor},
    constants::SUIT_COLORS,
    error::Result,
    player::PlayerId,
    turn::TurnAction,
    uno::Uno,
};
use strum::IntoEnumIterator;

/// Picks a move for `player_id`: keep wilds for last, name the color the
/// hand holds most of, draw when nothing fits.
pub fn next_action(uno: &Uno, player_id: &PlayerId) -> Result<TurnAction> {
    let hand = uno.hand(player_id)?;

    if uno.status().awaiting_color_choice {
        return Ok(TurnAction::ChooseColor(favourite_color(hand)));
    }

    let playable = uno.playable_cards(player_id)?;
    let pick = playable
        .iter()
        .copied()
        .find(|card_id| {
            hand.iter()
                .any(|card| card.id() == *card_id && !card.is_wild())
        })
        .or_else(|| playable.first().copied());

    Ok(match pick {
        Some(card_id) => TurnAction::Play(card_id),
        None => TurnAction::Draw,
    })
}

fn favourite_color(hand: &[Card]) -> CardColor {
    let mut counts: HashMap<CardColor, usize> = HashMap::new();
    for card in hand.iter().filter(|card| !card.is_wild()) {
        *counts.entry(card.color()).or_insert(0) += 1;
    }

    CardColor::iter()
        .filter(|color| SUIT_COLORS.contains(color))
        .max_by_key(|color| counts.get(color).copied().unwrap_or(0))
        .unwrap_or(CardColor::Red)
}
