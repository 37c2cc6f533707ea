use alloc::vec::Vec;

use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};
use crate::wallet::Wallet;

use super::dealer::round_amount;
use super::{Action, Blackjack, GameState, Outcome};

impl Blackjack {
    fn ensure_playing(&self) -> Result<&Hand, ActionError> {
        if self.state != GameState::Playing {
            return Err(ActionError::InvalidState);
        }
        self.current_hand()
            .filter(|h| h.is_active())
            .ok_or(ActionError::InvalidState)
    }

    fn double_allowed(&self, hand: &Hand) -> bool {
        hand.len() == 2
            && (!hand.is_from_split() || self.options.double_after_split)
            && self.options.double.allows(hand.value())
    }

    fn split_allowed(&self, hand: &Hand) -> Result<(), ActionError> {
        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }
        if self.hands.len() >= self.options.max_hands {
            return Err(ActionError::MaxSplitsReached);
        }
        Ok(())
    }

    fn surrender_allowed(&self, hand: &Hand) -> bool {
        self.options.surrender && self.hands.len() == 1 && hand.len() == 2 && !hand.is_from_split()
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust finishes the hand; reaching 21 stands automatically. When the
    /// last hand finishes, the dealer plays and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in play or no cards are left.
    pub fn hit<W: Wallet + ?Sized>(&mut self, wallet: &mut W) -> Result<Outcome, ActionError> {
        self.ensure_playing()?;
        let card = self.draw(true).ok_or(ActionError::NoCards)?;

        let hand = &mut self.hands[self.active];
        hand.add_card(card);

        let message = match hand.status() {
            HandStatus::Bust => self.options.talk.bust.pick(self.cards.rng()),
            _ if hand.value() == 21 => {
                hand.set_status(HandStatus::Stand);
                "Twenty-one."
            }
            _ => "Hit or stand?",
        };

        let result = if self.hands[self.active].is_active() {
            None
        } else {
            self.advance(wallet)
        };
        Ok(self.outcome(Some(card), result, message))
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in play.
    pub fn stand<W: Wallet + ?Sized>(&mut self, wallet: &mut W) -> Result<Outcome, ActionError> {
        self.ensure_playing()?;
        self.hands[self.active].set_status(HandStatus::Stand);

        let result = self.advance(wallet);
        Ok(self.outcome(None, result, "Next hand."))
    }

    /// Player action: Double down (double the hand's bet, receive exactly one
    /// card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in play, the hand is not eligible,
    /// the wallet cannot cover a second bet, or no cards are left.
    pub fn double_down<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
    ) -> Result<Outcome, ActionError> {
        let hand = self.ensure_playing()?;
        if !self.double_allowed(hand) {
            return Err(ActionError::CannotDouble);
        }

        let bet = hand.bet();
        if !wallet.can_afford(bet) {
            return Err(ActionError::InsufficientFunds { needed: bet });
        }
        if self.cards_available() == 0 {
            return Err(ActionError::NoCards);
        }
        if !wallet.spend_resources(bet, "blackjack_double") {
            return Err(ActionError::Rejected);
        }

        let card = self.draw(true).ok_or(ActionError::NoCards)?;
        let hand = &mut self.hands[self.active];
        hand.double_bet();
        hand.add_card(card);
        if hand.is_active() {
            hand.set_status(HandStatus::Stand);
        }
        let message = if hand.status() == HandStatus::Bust {
            self.options.talk.bust.pick(self.cards.rng())
        } else {
            "Doubled down."
        };
        tracing::debug!(hand = self.active, bet = bet * 2, "doubled down");

        let result = self.advance(wallet);
        Ok(self.outcome(Some(card), result, message))
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The new hand carries a bet equal to the split hand's and is inserted
    /// right after it. Each hand receives one fresh card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in play, the hand is not a pair,
    /// the hand limit is reached, the wallet cannot cover the extra bet, or
    /// fewer than two cards are left.
    pub fn split<W: Wallet + ?Sized>(&mut self, wallet: &mut W) -> Result<Outcome, ActionError> {
        let hand = self.ensure_playing()?;
        self.split_allowed(hand)?;

        let bet = hand.bet();
        if !wallet.can_afford(bet) {
            return Err(ActionError::InsufficientFunds { needed: bet });
        }
        if self.cards_available() < 2 {
            return Err(ActionError::NoCards);
        }
        if !wallet.spend_resources(bet, "blackjack_split") {
            return Err(ActionError::Rejected);
        }

        let Some(split_card) = self.hands[self.active].take_split_card() else {
            return Err(ActionError::CannotSplit);
        };
        let mut new_hand = Hand::from_split(split_card, bet);

        let first = self.draw(true).ok_or(ActionError::NoCards)?;
        let second = self.draw(true).ok_or(ActionError::NoCards)?;
        self.hands[self.active].add_card(first);
        new_hand.add_card(second);
        self.hands.insert(self.active + 1, new_hand);

        for hand in &mut self.hands[self.active..=self.active + 1] {
            if hand.is_active() && hand.value() == 21 {
                hand.set_status(HandStatus::Stand);
            }
        }
        tracing::debug!(hands = self.hands.len(), bet, "hand split");

        let result = if self.hands[self.active].is_active() {
            None
        } else {
            self.advance(wallet)
        };
        Ok(self.outcome(None, result, "Split. Playing the first hand."))
    }

    /// Player action: Surrender (forfeit half the bet).
    ///
    /// Only the first, unsplit two-card hand may surrender. Half the bet is
    /// refunded immediately, rounded per the table options.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in play or surrender is not
    /// allowed on this hand.
    pub fn surrender<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
    ) -> Result<Outcome, ActionError> {
        let hand = self.ensure_playing()?;
        if !self.surrender_allowed(hand) {
            return Err(ActionError::CannotSurrender);
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let refund = round_amount((hand.bet() as f64) * 0.5, self.options.rounding_surrender);

        self.hands[self.active].set_status(HandStatus::Surrendered);
        wallet.add_resources(refund, "blackjack_surrender");
        self.surrender_refund += refund;

        let result = self.advance(wallet);
        Ok(self.outcome(None, result, "Surrendered. Half your bet comes back."))
    }

    /// Returns the actions legal right now, given what `wallet` can afford.
    pub fn available_actions<W: Wallet + ?Sized>(&self, wallet: &W) -> Vec<Action> {
        let mut actions = Vec::new();

        match self.state {
            GameState::InsuranceOffered => {
                if wallet.can_afford(self.insurance_stake()) {
                    actions.push(Action::TakeInsurance);
                }
                actions.push(Action::DeclineInsurance);
            }
            GameState::Playing => {
                let Some(hand) = self.current_hand().filter(|h| h.is_active()) else {
                    return actions;
                };
                actions.push(Action::Hit);
                actions.push(Action::Stand);
                let funded = wallet.can_afford(hand.bet());
                if funded && self.double_allowed(hand) {
                    actions.push(Action::DoubleDown);
                }
                if funded && self.split_allowed(hand).is_ok() {
                    actions.push(Action::Split);
                }
                if self.surrender_allowed(hand) {
                    actions.push(Action::Surrender);
                }
            }
            GameState::Waiting | GameState::DealerTurn | GameState::Finished => {}
        }

        actions
    }
}
