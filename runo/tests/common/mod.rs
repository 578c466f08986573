#![allow(dead_code)]

use runo::{
    card::{Card, CardColor, CardId, Rank},
    constants::INITIAL_HAND_SIZE,
    deck::build_standard_deck,
    player::PlayerId,
    uno::Uno,
};

pub type Face = (CardColor, Rank);

pub fn create_players_info(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("p{i}"), format!("Player {}", i + 1)))
        .collect()
}

pub fn id(seat: usize) -> PlayerId {
    PlayerId::new(format!("p{seat}"))
}

pub fn seated(count: usize, seed: u64) -> Uno {
    let mut uno = Uno::with_seed(seed);
    for (id, name) in create_players_info(count) {
        uno.add_player(id, name).unwrap();
    }
    uno
}

fn take_face(pool: &mut Vec<Card>, (color, rank): Face) -> Card {
    let index = pool
        .iter()
        .position(|card| card.color() == color && card.rank() == rank)
        .unwrap_or_else(|| panic!("no {color:?} {rank:?} left in the deck"));
    pool.remove(index)
}

/// A standard deck ordered so that seat `s` is dealt `hands[s]` (padded with
/// other cards up to a full hand), `first` opens the discard pile and
/// `next_draws` are the next cards drawn afterwards.
pub fn prepared_deck(hands: &[Vec<Face>], first: Face, next_draws: &[Face]) -> Vec<Card> {
    let players = hands.len();
    let dealt = INITIAL_HAND_SIZE * players;

    let mut slots: Vec<Option<Face>> = vec![None; dealt];
    for (seat, hand) in hands.iter().enumerate() {
        assert!(hand.len() <= INITIAL_HAND_SIZE);
        for (round, face) in hand.iter().enumerate() {
            slots[round * players + seat] = Some(*face);
        }
    }
    slots.push(Some(first));
    slots.extend(next_draws.iter().copied().map(Some));

    let mut pool = build_standard_deck();
    let mut chosen: Vec<Option<Card>> = slots
        .iter()
        .map(|slot| slot.map(|face| take_face(&mut pool, face)))
        .collect();
    for slot in chosen.iter_mut().filter(|slot| slot.is_none()) {
        *slot = Some(pool.remove(0));
    }

    // Draws pop from the end.
    let mut order: Vec<Card> = chosen.into_iter().flatten().collect();
    order.extend(pool);
    order.reverse();
    order
}

/// Id of a card with the given face in the player's hand.
pub fn find(uno: &Uno, seat: usize, (color, rank): Face) -> CardId {
    uno.hand(&id(seat))
        .unwrap()
        .iter()
        .find(|card| card.color() == color && card.rank() == rank)
        .map(Card::id)
        .unwrap_or_else(|| panic!("seat {seat} holds no {color:?} {rank:?}"))
}

pub fn hand_size(uno: &Uno, seat: usize) -> usize {
    uno.hand(&id(seat)).unwrap().len()
}

pub fn current_seat(uno: &Uno) -> usize {
    uno.turn_state().current
}
