//! Blackjack engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{CardManager, DeckKind};
use crate::hand::{DealerHand, Hand};
use crate::options::BlackjackOptions;
use crate::result::{HandOutcome, RoundResult};
use crate::wallet::Wallet;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use insurance::InsuranceOutcome;
pub use state::{Action, GameState};

/// What a successful blackjack call did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outcome {
    /// State after the call.
    pub state: GameState,
    /// Card dealt to the player by this call, if any.
    pub card: Option<Card>,
    /// Settlement, when the call finished the round.
    pub result: Option<RoundResult>,
    /// Human-readable message.
    pub message: &'static str,
}

/// Cumulative blackjack statistics. Survive [`Blackjack::reset_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlackjackStats {
    /// Rounds settled.
    pub rounds: usize,
    /// Hands settled (several per round after a split).
    pub hands: usize,
    /// Hands won, naturals included.
    pub wins: usize,
    /// Hands lost, surrenders included.
    pub losses: usize,
    /// Hands pushed.
    pub pushes: usize,
    /// Naturals paid.
    pub blackjacks: usize,
    /// Largest single-round profit.
    pub biggest_win: usize,
    /// Net over every settled round.
    pub net: isize,
}

impl BlackjackStats {
    fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        for hand in &result.hands {
            self.hands += 1;
            match hand.outcome {
                HandOutcome::Win => self.wins += 1,
                HandOutcome::Blackjack => {
                    self.wins += 1;
                    self.blackjacks += 1;
                }
                HandOutcome::Lose | HandOutcome::Surrendered => self.losses += 1,
                HandOutcome::Push => self.pushes += 1,
            }
        }
        self.net += result.net;
        if let Ok(profit) = usize::try_from(result.net) {
            self.biggest_win = self.biggest_win.max(profit);
        }
    }
}

/// Everything a UI needs to render the table.
///
/// The dealer's hole card is left out until it is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlackjackSnapshot {
    /// Round state.
    pub state: GameState,
    /// Player hands, each with its own bet.
    pub hands: Vec<Hand>,
    /// Index of the hand taking actions.
    pub active_hand: usize,
    /// Dealer cards visible to the player.
    pub dealer_cards: Vec<Card>,
    /// Value of the visible dealer cards.
    pub dealer_value: u8,
    /// Whether a dealer card is still face down.
    pub hole_hidden: bool,
    /// Insurance stake, if taken.
    pub insurance_bet: Option<usize>,
    /// Actions legal right now.
    pub actions: Vec<Action>,
    /// Session statistics.
    pub stats: BlackjackStats,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

/// A single-player blackjack table.
///
/// Every operation that may move resources takes the player's [`Wallet`].
///
/// # Example
///
/// ```
/// use parlor::{Blackjack, BlackjackOptions, GameState, Player};
///
/// let mut table = Blackjack::new(BlackjackOptions::default(), 7);
/// let mut player = Player::new("ace");
/// let outcome = table.start_game(&mut player, 50).unwrap();
/// assert_ne!(outcome.state, GameState::Waiting);
/// ```
#[derive(Debug, Clone)]
pub struct Blackjack {
    options: BlackjackOptions,
    cards: CardManager,
    state: GameState,
    hands: Vec<Hand>,
    active: usize,
    dealer: DealerHand,
    insurance_bet: Option<usize>,
    insurance_payout: usize,
    surrender_refund: usize,
    last_result: Option<RoundResult>,
    stats: BlackjackStats,
}

impl Blackjack {
    /// Creates a table with a freshly shuffled deck.
    #[must_use]
    pub fn new(options: BlackjackOptions, seed: u64) -> Self {
        let mut cards = CardManager::new(seed);
        cards.initialize_deck(DeckKind::Standard);

        Self {
            options,
            cards,
            state: GameState::Waiting,
            hands: Vec::new(),
            active: 0,
            dealer: DealerHand::new(),
            insurance_bet: None,
            insurance_payout: 0,
            surrender_refund: 0,
            last_result: None,
            stats: BlackjackStats::default(),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &BlackjackOptions {
        &self.options
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand taking actions.
    #[must_use]
    pub const fn active_hand(&self) -> usize {
        self.active
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the insurance stake, if one was placed this round.
    #[must_use]
    pub const fn insurance_bet(&self) -> Option<usize> {
        self.insurance_bet
    }

    /// Returns the most recent settlement.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns session statistics.
    #[must_use]
    pub const fn stats(&self) -> &BlackjackStats {
        &self.stats
    }

    /// Returns the card manager.
    #[must_use]
    pub const fn cards(&self) -> &CardManager {
        &self.cards
    }

    /// Returns the card manager for arranging the deck.
    pub const fn cards_mut(&mut self) -> &mut CardManager {
        &mut self.cards
    }

    /// Returns a snapshot of the table.
    pub fn snapshot<W: Wallet + ?Sized>(&self, wallet: &W) -> BlackjackSnapshot {
        BlackjackSnapshot {
            state: self.state,
            hands: self.hands.clone(),
            active_hand: self.active,
            dealer_cards: self.dealer.visible_cards().to_vec(),
            dealer_value: self.dealer.visible_value(),
            hole_hidden: !self.dealer.is_empty() && !self.dealer.is_hole_revealed(),
            insurance_bet: self.insurance_bet,
            actions: self.available_actions(wallet),
            stats: self.stats,
            cards_remaining: self.cards.remaining(),
        }
    }

    /// Abandons any round in progress and brings in a fresh deck.
    ///
    /// Stakes already debited are not refunded. Statistics are kept.
    pub fn reset_game(&mut self) {
        self.clear_round();
        self.last_result = None;
        self.state = GameState::Waiting;
        self.cards.reinitialize();
        tracing::debug!("blackjack table reset");
    }

    fn clear_round(&mut self) {
        self.hands.clear();
        self.active = 0;
        self.dealer.take_cards();
        self.insurance_bet = None;
        self.insurance_payout = 0;
        self.surrender_refund = 0;
    }

    /// Moves every card on the table to the discard pile.
    fn collect_cards(&mut self) {
        let hands = core::mem::take(&mut self.hands);
        self.cards.discard(hands.into_iter().flat_map(Hand::into_cards));
        let dealer = self.dealer.take_cards();
        self.cards.discard(dealer);
    }

    /// Cards obtainable without bringing in a fresh deck.
    fn cards_available(&self) -> usize {
        self.cards.remaining() + self.cards.discard_pile().len()
    }

    /// Draws one card, folding the discard pile back in if the deck is empty.
    fn draw(&mut self, face_up: bool) -> Option<Card> {
        if self.cards.remaining() == 0 {
            self.cards.reshuffle_discard_into_deck();
        }
        self.cards.deal_one(face_up)
    }

    fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.active)
    }

    /// Moves to the next active hand, or plays the dealer and settles when
    /// every hand is done.
    fn advance<W: Wallet + ?Sized>(&mut self, wallet: &mut W) -> Option<RoundResult> {
        if let Some(next) = self
            .hands
            .iter()
            .enumerate()
            .skip(self.active)
            .find(|(_, h)| h.is_active())
            .map(|(i, _)| i)
        {
            self.active = next;
            return None;
        }

        self.state = GameState::DealerTurn;
        self.play_dealer_hand();
        Some(self.settle(wallet))
    }

    fn outcome(
        &self,
        card: Option<Card>,
        result: Option<RoundResult>,
        message: &'static str,
    ) -> Outcome {
        let message = result.as_ref().map_or(message, |r| r.message);
        Outcome {
            state: self.state,
            card,
            result,
            message,
        }
    }
}
