use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandStatus;
use crate::options::RoundingMode;
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::wallet::Wallet;

use super::{Blackjack, GameState};

#[cfg(feature = "std")]
pub(super) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(super) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Blackjack {
    /// Checks if any hand is still in contention (stood or natural).
    fn any_live_hands(&self) -> bool {
        self.hands
            .iter()
            .any(|h| matches!(h.status(), HandStatus::Stand | HandStatus::Blackjack))
    }

    /// Dealer plays their hand according to the table rules.
    ///
    /// The dealer reveals the hole card and draws until reaching 17 or
    /// higher. Soft 17 is hit only when `stand_on_soft_17` is off. If no
    /// player hand is still live the dealer does not draw.
    ///
    /// Returns the cards drawn.
    pub(super) fn play_dealer_hand(&mut self) -> Vec<Card> {
        self.dealer.reveal_hole();

        let mut drawn = Vec::new();
        if !self.any_live_hands() {
            return drawn;
        }

        loop {
            let value = self.dealer.value();
            if value > 17 {
                break;
            }
            if value == 17 && (!self.dealer.is_soft() || self.options.stand_on_soft_17) {
                break;
            }

            let Some(card) = self.draw(true) else {
                tracing::warn!(value, "deck exhausted, dealer stands");
                break;
            };
            self.dealer.add_card(card);
            drawn.push(card);
        }

        tracing::debug!(value = self.dealer.value(), drawn = drawn.len(), "dealer played");
        drawn
    }

    /// Settles every hand against the dealer, credits the wallet, awards
    /// experience and finishes the round.
    pub(super) fn settle<W: Wallet + ?Sized>(&mut self, wallet: &mut W) -> RoundResult {
        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();
        let dealer_blackjack = self.dealer.is_blackjack();

        let mut hands = Vec::with_capacity(self.hands.len());
        let mut total_payout = 0;
        let mut total_bet = 0;
        let mut experience = 0;

        for (hand_index, hand) in self.hands.iter().enumerate() {
            let bet = hand.bet();
            total_bet += bet;
            let player_value = hand.value();

            let (outcome, payout) = match hand.status() {
                // Refunded when surrendering.
                HandStatus::Surrendered => (HandOutcome::Surrendered, 0),
                HandStatus::Bust => (HandOutcome::Lose, 0),
                HandStatus::Blackjack => {
                    if dealer_blackjack {
                        (HandOutcome::Push, bet)
                    } else {
                        #[expect(
                            clippy::cast_precision_loss,
                            reason = "f64 has sufficient precision for monetary values"
                        )]
                        let winnings = (bet as f64) * self.options.blackjack_pays;
                        let rounded = round_amount(winnings, self.options.rounding_blackjack);
                        (HandOutcome::Blackjack, bet + rounded)
                    }
                }
                HandStatus::Stand | HandStatus::Active => {
                    if dealer_blackjack {
                        (HandOutcome::Lose, 0)
                    } else if dealer_bust || player_value > dealer_value {
                        (HandOutcome::Win, bet * 2)
                    } else if player_value < dealer_value {
                        (HandOutcome::Lose, 0)
                    } else {
                        (HandOutcome::Push, bet)
                    }
                }
            };

            experience += match outcome {
                HandOutcome::Blackjack => self.options.natural_xp,
                HandOutcome::Win => self.options.win_xp,
                _ => 0,
            };
            total_payout += payout;

            hands.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        if total_payout > 0 {
            wallet.add_resources(total_payout, "blackjack_win");
        }
        if experience > 0 {
            wallet.add_experience(experience, "blackjack_win");
        }

        let insurance_bet = self.insurance_bet.unwrap_or(0);
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = (total_payout + self.surrender_refund + self.insurance_payout) as isize
            - (total_bet + insurance_bet) as isize;

        let talk = self.options.talk;
        let first_bust = self
            .hands
            .first()
            .is_some_and(|h| h.status() == HandStatus::Bust);
        let message = match hands.first().map(|h| h.outcome) {
            Some(HandOutcome::Blackjack) => talk.blackjack.pick(self.cards.rng()),
            Some(HandOutcome::Win) => talk.win.pick(self.cards.rng()),
            Some(HandOutcome::Push) => talk.push.pick(self.cards.rng()),
            Some(HandOutcome::Lose) if first_bust => talk.bust.pick(self.cards.rng()),
            _ => talk.loss.pick(self.cards.rng()),
        };

        let result = RoundResult {
            hands,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
            insurance_bet,
            insurance_payout: self.insurance_payout,
            surrender_refund: self.surrender_refund,
            total_payout,
            net,
            experience,
            message,
        };

        tracing::info!(
            dealer_value,
            total_payout,
            net,
            hands = result.hands.len(),
            "blackjack round settled"
        );

        self.stats.record(&result);
        self.last_result = Some(result.clone());
        self.state = GameState::Finished;
        result
    }
}
