use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::card::{CardColor, CardId};
use crate::player::PlayerId;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Finished { winner: PlayerId },
}

#[derive(Clone, Copy, Debug, Display, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Color resolution for the active card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorState {
    /// The active card's own color is the one to match.
    #[default]
    Natural,
    /// A wild was played and its owner has not picked a color yet.
    Pending,
    /// The color picked for the active wild.
    Chosen(CardColor),
}

impl ColorState {
    pub fn is_pending(self) -> bool {
        self == ColorState::Pending
    }

    pub fn chosen(self) -> Option<CardColor> {
        match self {
            ColorState::Chosen(color) => Some(color),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    pub current: usize,
    pub direction: Direction,
    /// Cards the current player has to draw before acting normally.
    pub pending_draw: u32,
    pub color: ColorState,
}

impl TurnState {
    /// Moves the turn `steps` seats in the current direction. Penalties and
    /// color choices carry over.
    pub(crate) fn advance(&mut self, steps: usize, player_count: usize) {
        debug_assert!(player_count > 0);
        let steps = steps % player_count;
        self.current = match self.direction {
            Direction::Forward => (self.current + steps) % player_count,
            Direction::Backward => (self.current + player_count - steps) % player_count,
        };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(CardId),
    Draw,
    ChooseColor(CardColor),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
    ColorChosen(CardColor),
    Drew(CardId),
    PenaltyDrawn(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnResult {
    pub outcome: TurnOutcome,
    pub won: bool,
}

impl TurnResult {
    pub(crate) fn continued(outcome: TurnOutcome) -> Self {
        Self {
            outcome,
            won: false,
        }
    }
}
