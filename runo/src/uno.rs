use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::card::{Card, CardColor, CardId, Rank};
use crate::constants::{DRAW_TWO_PENALTY, INITIAL_HAND_SIZE, MIN_PLAYERS, WILD_DRAW_FOUR_PENALTY};
use crate::deck::{build_standard_deck, is_standard_composition};
use crate::error::{Result, UnoError};
use crate::hand::Hand;
use crate::pile::{reclaim_discard, DiscardPile, DrawPile};
use crate::player::{Player, PlayerId};
use crate::status::{GameStatus, PlayerSummary};
use crate::turn::{ColorState, Phase, TurnAction, TurnOutcome, TurnResult, TurnState};

/// One authoritative game session.
///
/// Every operation either succeeds or returns an error without touching the
/// session, so a host can simply report the error and let the caller retry.
#[derive(Debug)]
pub struct Uno {
    players: Vec<Player>,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    turn: TurnState,
    phase: Phase,
    rng: StdRng,
}

impl Default for Uno {
    fn default() -> Self {
        Self::new()
    }
}

impl Uno {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A session whose shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            players: Vec::new(),
            draw_pile: DrawPile::default(),
            discard_pile: DiscardPile::new(),
            turn: TurnState::default(),
            phase: Phase::NotStarted,
            rng,
        }
    }

    pub fn with_players<I, K, N>(players: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<PlayerId>,
        N: Into<String>,
    {
        let mut uno = Self::new();
        for (id, name) in players {
            uno.add_player(id, name)?;
        }
        Ok(uno)
    }

    /// Seats a player. The roster can only change while no game is running,
    /// and neither the id nor the name may be blank.
    pub fn add_player(&mut self, id: impl Into<PlayerId>, name: impl Into<String>) -> Result<()> {
        let id = id.into();
        let name = name.into();
        if self.is_running() {
            return Err(UnoError::AlreadyRunning);
        }
        if id.as_str().trim().is_empty() || name.trim().is_empty() {
            return Err(UnoError::BlankPlayer);
        }
        if self.players.iter().any(|player| player.id == id) {
            return Err(UnoError::DuplicatePlayer(id));
        }

        debug!(player = %id, "player seated");
        self.players.push(Player::new(id, name));
        Ok(())
    }

    /// Deals a fresh, shuffled deck and opens the game. Also restarts a
    /// finished game with the same roster.
    #[instrument(level = "debug", skip(self))]
    pub fn start(&mut self) -> Result<TurnResult> {
        self.check_can_start()?;

        let mut draw_pile = DrawPile::new(build_standard_deck());
        draw_pile.shuffle(&mut self.rng);
        self.deal_and_open(draw_pile)
    }

    /// Like [`Uno::start`], but deals `deck` in the given order instead of
    /// shuffling. The last card of `deck` is the top of the draw pile.
    pub fn start_with_deck(&mut self, deck: Vec<Card>) -> Result<TurnResult> {
        self.check_can_start()?;
        if !is_standard_composition(&deck) {
            return Err(UnoError::NonStandardDeck);
        }

        self.deal_and_open(DrawPile::new(deck))
    }

    fn check_can_start(&self) -> Result<()> {
        if self.is_running() {
            return Err(UnoError::AlreadyRunning);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(UnoError::InsufficientPlayers {
                required: MIN_PLAYERS,
            });
        }
        Ok(())
    }

    fn deal_and_open(&mut self, mut draw_pile: DrawPile) -> Result<TurnResult> {
        let mut hands: Vec<Hand> = self.players.iter().map(|_| Hand::new()).collect();
        for _ in 0..INITIAL_HAND_SIZE {
            for hand in &mut hands {
                hand.add(draw_pile.draw().ok_or(UnoError::PileExhausted)?);
            }
        }

        // The game may not open on a Wild Draw Four.
        let first_card = loop {
            let card = draw_pile.draw().ok_or(UnoError::PileExhausted)?;
            if card.rank() != Rank::WildDrawFour {
                break card;
            }
            if draw_pile
                .cards()
                .iter()
                .all(|remaining| remaining.rank() == Rank::WildDrawFour)
            {
                warn!("only Wild Draw Four cards left to open with");
                return Err(UnoError::PileExhausted);
            }
            warn!(card = %card, "opening card was a Wild Draw Four, reshuffling it");
            draw_pile.return_and_shuffle(card, &mut self.rng);
        };

        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.hand = hand;
        }
        self.draw_pile = draw_pile;
        self.discard_pile = DiscardPile::new();
        self.turn = TurnState::default();
        self.phase = Phase::Running;

        info!(
            players = self.players.len(),
            first_card = %first_card,
            "game started"
        );

        let rank = first_card.rank();
        self.discard_pile.push(first_card);
        // The opening card takes effect as if the first seat had played it.
        Ok(self.resolve_card_effect(0, rank))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn play_turn(&mut self, player_id: &PlayerId, action: TurnAction) -> Result<TurnResult> {
        match action {
            TurnAction::Play(card_id) => self.play_card(player_id, card_id),
            TurnAction::Draw => self.draw_card(player_id),
            TurnAction::ChooseColor(color) => self.choose_color(player_id, color),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn play_card(&mut self, player_id: &PlayerId, card_id: CardId) -> Result<TurnResult> {
        let seat = self.acting_seat(player_id)?;

        let card = self.players[seat]
            .hand
            .find_by_id(card_id)
            .ok_or(UnoError::CardNotFound(card_id))?;
        if !self.is_playable(card) {
            debug!(player = %player_id, card = %card, "illegal play rejected");
            return Err(UnoError::IllegalPlay(card_id));
        }

        let card = self.players[seat]
            .hand
            .remove(card_id)
            .ok_or(UnoError::CardNotFound(card_id))?;
        let rank = card.rank();
        debug!(player = %player_id, card = %card, "card played");

        self.discard_pile.push(card);
        self.turn.color = ColorState::Natural;
        Ok(self.resolve_card_effect(seat, rank))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn choose_color(&mut self, player_id: &PlayerId, color: CardColor) -> Result<TurnResult> {
        if !self.is_running() {
            return Err(UnoError::NotRunning);
        }
        let seat = self.seat_of(player_id)?;
        if !self.turn.color.is_pending() {
            return Err(UnoError::NotAwaitingColorChoice);
        }
        if seat != self.turn.current {
            return Err(UnoError::NotYourTurn(player_id.clone()));
        }
        if color.is_wild() {
            return Err(UnoError::InvalidColorChoice(color));
        }

        self.turn.color = ColorState::Chosen(color);
        debug!(player = %player_id, color = %color, "wild color chosen");

        let outcome = TurnOutcome::ColorChosen(color);
        if self.players[seat].hand.is_empty() {
            self.finish(seat);
            return Ok(TurnResult { outcome, won: true });
        }

        // A Wild Draw Four skips the next seat and leaves the penalty with the
        // one after. With two players that is the player who played it.
        let player_count = self.players.len();
        if self.active_rank() == Some(Rank::WildDrawFour) {
            self.turn.pending_draw += WILD_DRAW_FOUR_PENALTY;
            self.turn.advance(2, player_count);
        } else {
            self.turn.advance(1, player_count);
        }

        Ok(TurnResult::continued(outcome))
    }

    /// Pays the pending penalty if there is one, otherwise draws a single
    /// card. Either way the turn passes on.
    #[instrument(level = "debug", skip(self))]
    pub fn draw_card(&mut self, player_id: &PlayerId) -> Result<TurnResult> {
        let seat = self.acting_seat(player_id)?;

        let penalty = self.turn.pending_draw;
        let count = if penalty > 0 { penalty as usize } else { 1 };
        if self.draw_pile.len() + self.discard_pile.reclaimable() < count {
            warn!(
                player = %player_id,
                needed = count,
                draw_pile = self.draw_pile.len(),
                discard_pile = self.discard_pile.len(),
                "not enough cards left to draw"
            );
            return Err(UnoError::PileExhausted);
        }

        // Covered by the check above, so none of these draws can fail.
        let outcome = if penalty > 0 {
            for _ in 0..count {
                let card = self.draw_from_pile()?;
                self.players[seat].hand.add(card);
            }
            self.turn.pending_draw = 0;
            self.turn.color = ColorState::Natural;
            debug!(player = %player_id, count, "penalty drawn");
            TurnOutcome::PenaltyDrawn(penalty)
        } else {
            let card = self.draw_from_pile()?;
            let card_id = card.id();
            self.players[seat].hand.add(card);
            debug!(player = %player_id, "card drawn");
            TurnOutcome::Drew(card_id)
        };

        self.turn.advance(1, self.players.len());
        Ok(TurnResult::continued(outcome))
    }

    /// Whether `card` could be played onto the table as it stands.
    pub fn is_playable(&self, card: &Card) -> bool {
        let Some(active) = self.discard_pile.top() else {
            return false;
        };

        if self.turn.pending_draw > 0 {
            return card.rank().is_draw_penalty() && active.rank().is_draw_penalty();
        }
        if card.is_wild() {
            return true;
        }
        if let Some(color) = self.turn.color.chosen() {
            return card.color() == color;
        }
        card.color() == active.color() || card.rank() == active.rank()
    }

    /// Cards in the player's hand that are legal right now.
    pub fn playable_cards(&self, player_id: &PlayerId) -> Result<Vec<CardId>> {
        let seat = self.seat_of(player_id)?;
        Ok(self.players[seat]
            .hand
            .iter()
            .filter(|card| self.is_playable(card))
            .map(Card::id)
            .collect())
    }

    /// The player's own cards. Hosts must only hand this to that player.
    pub fn hand(&self, player_id: &PlayerId) -> Result<&[Card]> {
        let seat = self.seat_of(player_id)?;
        Ok(self.players[seat].hand().cards())
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            running: self.is_running(),
            phase: self.phase.clone(),
            winner: self.winner().cloned(),
            active_card: self.active_card().cloned(),
            current_player: self.current_player_id().cloned(),
            direction: self.turn.direction,
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            awaiting_color_choice: self.turn.color.is_pending(),
            active_wild_color: self.turn.color.chosen(),
            pending_draw_amount: self.turn.pending_draw,
            players: self
                .players
                .iter()
                .map(|player| PlayerSummary {
                    id: player.id.clone(),
                    name: player.name().to_string(),
                    card_count: player.cards_count(),
                })
                .collect(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn winner(&self) -> Option<&PlayerId> {
        match &self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.discard_pile.top()
    }

    pub fn current_player_id(&self) -> Option<&PlayerId> {
        if !self.is_running() {
            return None;
        }
        self.players.get(self.turn.current).map(|player| &player.id)
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|player| player.id.clone()).collect()
    }

    pub fn get_player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == player_id)
    }

    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards across both piles and every hand.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::cards_count).sum::<usize>()
    }

    fn seat_of(&self, player_id: &PlayerId) -> Result<usize> {
        self.players
            .iter()
            .position(|player| &player.id == player_id)
            .ok_or_else(|| UnoError::UnknownPlayer(player_id.clone()))
    }

    /// Seat of `player_id` if they may play or draw right now.
    fn acting_seat(&self, player_id: &PlayerId) -> Result<usize> {
        if !self.is_running() {
            return Err(UnoError::NotRunning);
        }
        let seat = self.seat_of(player_id)?;
        if self.turn.color.is_pending() {
            return Err(UnoError::AwaitingColorChoice);
        }
        if seat != self.turn.current {
            return Err(UnoError::NotYourTurn(player_id.clone()));
        }
        Ok(seat)
    }

    fn active_rank(&self) -> Option<Rank> {
        self.discard_pile.top().map(Card::rank)
    }

    fn draw_from_pile(&mut self) -> Result<Card> {
        if self.draw_pile.is_empty() {
            reclaim_discard(&mut self.draw_pile, &mut self.discard_pile, &mut self.rng)?;
        }
        self.draw_pile.draw().ok_or(UnoError::PileExhausted)
    }

    /// Applies the effect of a card `seat` just put on the discard pile.
    fn resolve_card_effect(&mut self, seat: usize, rank: Rank) -> TurnResult {
        debug_assert!(!self.discard_pile.is_empty(), "resolved a card that was never discarded");
        let player_count = self.players.len();

        let (outcome, steps) = match rank {
            Rank::Number(_) => {
                debug_assert_eq!(
                    self.turn.pending_draw, 0,
                    "number card played over an unpaid penalty"
                );
                (TurnOutcome::Neutral, 1)
            }
            Rank::Skip => (TurnOutcome::Skip, 2),
            Rank::Reverse if player_count > 2 => {
                self.turn.direction = self.turn.direction.reversed();
                (TurnOutcome::Reverse, 1)
            }
            // With two players a reverse acts like a skip of the only opponent.
            Rank::Reverse => (TurnOutcome::Reverse, 0),
            Rank::DrawTwo => {
                self.turn.pending_draw += DRAW_TWO_PENALTY;
                (TurnOutcome::DrawTwo, 1)
            }
            Rank::Wild => {
                self.turn.color = ColorState::Pending;
                return TurnResult::continued(TurnOutcome::Wild);
            }
            Rank::WildDrawFour => {
                self.turn.color = ColorState::Pending;
                return TurnResult::continued(TurnOutcome::WildDrawFour);
            }
        };

        if self.players[seat].hand.is_empty() {
            self.finish(seat);
            return TurnResult { outcome, won: true };
        }

        self.turn.advance(steps, player_count);
        TurnResult::continued(outcome)
    }

    fn finish(&mut self, seat: usize) {
        let winner = self.players[seat].id.clone();
        info!(winner = %winner, "game finished");
        self.phase = Phase::Finished { winner };
    }
}
