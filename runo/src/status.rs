use serde::Serialize;

use crate::card::{Card, CardColor};
use crate::player::PlayerId;
use crate::turn::{Direction, Phase};

/// What everyone at the table may see about a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub card_count: usize,
}

/// Read-only snapshot of a session. Hand contents are never part of it,
/// see [`crate::uno::Uno::hand`] for a single player's own cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub running: bool,
    pub phase: Phase,
    pub winner: Option<PlayerId>,
    pub active_card: Option<Card>,
    pub current_player: Option<PlayerId>,
    pub direction: Direction,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub awaiting_color_choice: bool,
    pub active_wild_color: Option<CardColor>,
    pub pending_draw_amount: u32,
    pub players: Vec<PlayerSummary>,
}
