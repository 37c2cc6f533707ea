use crate::card::Card;
use crate::error::BetError;
use crate::hand::{Hand, HandStatus};
use crate::result::RoundResult;
use crate::wallet::Wallet;

use super::{Blackjack, GameState, Outcome};

/// Cards dealt to open a round.
const OPENING_CARDS: usize = 4;

impl Blackjack {
    /// Places the main bet and deals a new round.
    ///
    /// The player gets two cards and the dealer an up card plus a hidden
    /// hole card. If the dealer shows an Ace and insurance is offered, the
    /// round waits in [`GameState::InsuranceOffered`]. Otherwise a natural
    /// on either side settles the round at once.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the bet is outside the
    /// table limits, or the wallet cannot cover it.
    pub fn start_game<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
        bet: usize,
    ) -> Result<Outcome, BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::RoundInProgress);
        }

        if bet < self.options.min_bet || bet > self.options.max_bet {
            return Err(BetError::OutOfRange {
                min: self.options.min_bet,
                max: self.options.max_bet,
            });
        }

        if !wallet.can_afford(bet) {
            tracing::debug!(bet, "blackjack bet refused");
            return Err(BetError::InsufficientFunds { needed: bet });
        }

        if !wallet.spend_resources(bet, "blackjack_bet") {
            return Err(BetError::Rejected);
        }

        self.collect_cards();
        self.clear_round();
        self.last_result = None;

        if self
            .cards
            .needs_reshuffle(self.options.reshuffle_threshold.max(OPENING_CARDS))
        {
            self.cards.reinitialize();
            tracing::debug!("fresh deck brought in");
        }

        let dealt = self.cards.deal(OPENING_CARDS, true);
        let Ok([first, up, second, hole]) = <[Card; OPENING_CARDS]>::try_from(dealt) else {
            wallet.add_resources(bet, "blackjack_refund");
            return Err(BetError::NotEnoughCards);
        };

        let mut hand = Hand::new(bet);
        hand.add_card(first);
        hand.add_card(second);
        self.hands.push(hand);
        self.dealer.add_card(up);
        self.dealer.add_card(hole.with_face_up(false));

        tracing::info!(
            bet,
            player = self.hands[0].value(),
            dealer_up = %up,
            "blackjack round started"
        );

        if up.is_ace() && self.options.insurance {
            self.state = GameState::InsuranceOffered;
            return Ok(self.outcome(None, None, "Dealer shows an Ace. Insurance?"));
        }

        let result = self.resolve_naturals(wallet);
        Ok(self.outcome(None, result, "Hit or stand?"))
    }

    /// Settles the round if either side holds a natural, otherwise opens
    /// play on the first hand.
    pub(super) fn resolve_naturals<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
    ) -> Option<RoundResult> {
        let player_natural = self
            .hands
            .first()
            .is_some_and(|h| h.status() == HandStatus::Blackjack);

        if player_natural || self.dealer.is_blackjack() {
            self.dealer.reveal_hole();
            self.state = GameState::DealerTurn;
            return Some(self.settle(wallet));
        }

        self.state = GameState::Playing;
        self.active = 0;
        None
    }
}
