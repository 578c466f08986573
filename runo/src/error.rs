use thiserror::Error;

use crate::card::{CardColor, CardId, Rank};
use crate::player::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players, at least {required} are needed")]
    InsufficientPlayers { required: usize },
    #[error("The game is not running")]
    NotRunning,
    #[error("The game is already running")]
    AlreadyRunning,
    #[error("It is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("Player ids and names must not be blank")]
    BlankPlayer,
    #[error("Player {0} is already seated")]
    DuplicatePlayer(PlayerId),
    #[error("Card {0} is not in the player's hand")]
    CardNotFound(CardId),
    #[error("Card {0} cannot be played now")]
    IllegalPlay(CardId),
    #[error("A wild color has to be chosen first")]
    AwaitingColorChoice,
    #[error("No wild color choice is pending")]
    NotAwaitingColorChoice,
    #[error("{0} is not a color that can be chosen")]
    InvalidColorChoice(CardColor),
    #[error("Neither the draw pile nor the discard pile has cards left")]
    PileExhausted,
    #[error("{color} {rank} is not a valid card")]
    InvalidCard { color: CardColor, rank: Rank },
    #[error("The deck is not a standard 108 card deck")]
    NonStandardDeck,
    #[error("Unknown session {0}")]
    UnknownSession(String),
    #[error("Session {0} already exists")]
    SessionExists(String),
    #[error("Session {0} was poisoned by a panicking caller")]
    SessionPoisoned(String),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
