use core::fmt;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::error::{Result, UnoError};

static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(1);

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumCountMacro,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl CardColor {
    pub fn is_wild(self) -> bool {
        self == CardColor::Wild
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Ranks that add to the pending draw penalty and may be stacked on each other.
    pub fn is_draw_penalty(self) -> bool {
        matches!(self, Rank::DrawTwo | Rank::WildDrawFour)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
            Rank::Wild => write!(f, "Wild"),
            Rank::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

/// Identity token telling apart cards with the same color and rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u64);

impl CardId {
    fn next() -> Self {
        CardId(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A physical card. Two cards compare equal only if they are the same card,
/// use [`Card::same_face`] to compare color and rank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    color: CardColor,
    rank: Rank,
}

impl Card {
    pub fn new(color: CardColor, rank: Rank) -> Result<Self> {
        let valid = match rank {
            Rank::Number(number) => number <= 9 && !color.is_wild(),
            Rank::Wild | Rank::WildDrawFour => color.is_wild(),
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => !color.is_wild(),
        };
        if !valid {
            return Err(UnoError::InvalidCard { color, rank });
        }

        Ok(Self::from_catalog(color, rank))
    }

    /// Skips validation, for faces the deck catalog knows to be valid.
    pub(crate) fn from_catalog(color: CardColor, rank: Rank) -> Self {
        debug_assert_eq!(color.is_wild(), rank.is_wild());
        Self {
            id: CardId::next(),
            color,
            rank,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn color(&self) -> CardColor {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_wild(&self) -> bool {
        self.color.is_wild()
    }

    pub fn same_face(&self, other: &Card) -> bool {
        self.color == other.color && self.rank == other.rank
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            write!(f, "{}", self.rank)
        } else {
            write!(f, "{} {}", self.color, self.rank)
        }
    }
}
