use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::card::Card;
use crate::error::{Result, UnoError};

/// Face-down stack players draw from. The top is the end of the vector.
#[derive(Debug, Default)]
pub struct DrawPile(Vec<Card>);

impl DrawPile {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// Puts a card back and reshuffles the whole pile.
    pub fn return_and_shuffle<R: Rng + ?Sized>(&mut self, card: Card, rng: &mut R) {
        self.0.push(card);
        self.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

/// Face-up pile; its top card is the active card.
#[derive(Debug, Default)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cards a reclaim would hand back to the draw pile.
    pub fn reclaimable(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Removes every card except the top one, oldest first.
    fn take_all_but_top(&mut self) -> Vec<Card> {
        let keep_from = self.reclaimable();
        let top = self.0.split_off(keep_from);
        std::mem::replace(&mut self.0, top)
    }
}

/// Moves every discard except the active card into the draw pile and
/// reshuffles it. Leaves both piles untouched when there is nothing to
/// reclaim.
pub fn reclaim_discard<R: Rng + ?Sized>(
    draw_pile: &mut DrawPile,
    discard_pile: &mut DiscardPile,
    rng: &mut R,
) -> Result<usize> {
    if discard_pile.reclaimable() == 0 {
        return Err(UnoError::PileExhausted);
    }

    let reclaimed = discard_pile.take_all_but_top();
    let count = reclaimed.len();
    draw_pile.0.extend(reclaimed);
    draw_pile.shuffle(rng);

    debug!(
        reclaimed = count,
        draw_pile = draw_pile.len(),
        "reclaimed discard pile into draw pile"
    );

    Ok(count)
}
