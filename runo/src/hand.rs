use crate::card::{Card, CardId};

/// Cards held by one player, looked up by identity.
#[derive(Debug, Default)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Takes the card with the given id out of the hand, `None` if it is not held.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.0.iter().position(|card| card.id() == id)?;
        Some(self.0.swap_remove(index))
    }

    pub fn find_by_id(&self, id: CardId) -> Option<&Card> {
        self.0.iter().find(|card| card.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, Rank};

    #[test]
    fn remove_by_identity_not_by_face() {
        let mut hand = Hand::new();
        let first = Card::new(CardColor::Red, Rank::DrawTwo).unwrap();
        let second = Card::new(CardColor::Red, Rank::DrawTwo).unwrap();
        let second_id = second.id();
        hand.add(first);
        hand.add(second);

        let removed = hand.remove(second_id).unwrap();

        assert_eq!(removed.id(), second_id);
        assert_eq!(hand.len(), 1);
        assert!(!hand.contains(second_id));
    }

    #[test]
    fn remove_missing_card_returns_none() {
        let mut hand = Hand::new();
        hand.add(Card::new(CardColor::Blue, Rank::Skip).unwrap());
        let stranger = Card::new(CardColor::Blue, Rank::Skip).unwrap();

        assert!(hand.remove(stranger.id()).is_none());
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn find_by_id_works() {
        let mut hand = Hand::new();
        let wild = Card::new(CardColor::Wild, Rank::Wild).unwrap();
        let wild_id = wild.id();
        hand.add(wild);

        assert_eq!(hand.find_by_id(wild_id).map(Card::rank), Some(Rank::Wild));

        hand.clear();
        assert!(hand.find_by_id(wild_id).is_none());
        assert!(hand.is_empty());
    }
}
