use crate::error::InsuranceError;
use crate::wallet::Wallet;

use super::{Blackjack, GameState, Outcome};

/// What an insurance decision did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InsuranceOutcome {
    /// Insurance stake placed (0 when declined).
    pub stake: usize,
    /// Whether the dealer's hole card made blackjack.
    pub dealer_blackjack: bool,
    /// Amount paid on the insurance bet (3× stake on a dealer blackjack).
    pub payout: usize,
    /// The round after the decision.
    pub outcome: Outcome,
}

impl Blackjack {
    /// Returns whether insurance is currently being offered.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.state == GameState::InsuranceOffered
    }

    /// Returns the insurance stake for this round: half the first hand's
    /// bet, rounded down.
    #[must_use]
    pub fn insurance_stake(&self) -> usize {
        self.hands.first().map_or(0, |h| h.bet() / 2)
    }

    /// Takes insurance and resolves it against the hole card.
    ///
    /// If the dealer has blackjack the stake is returned with 2:1 winnings
    /// (3× stake) and the round is settled; otherwise the stake is lost and
    /// play continues, unless the player holds a natural.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered, the table does not
    /// offer it, or the wallet cannot cover the stake.
    pub fn take_insurance<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
    ) -> Result<InsuranceOutcome, InsuranceError> {
        if self.state != GameState::InsuranceOffered {
            return Err(InsuranceError::InvalidState);
        }
        if !self.options.insurance {
            return Err(InsuranceError::NotOffered);
        }

        let stake = self.insurance_stake();
        if !wallet.can_afford(stake) {
            return Err(InsuranceError::InsufficientFunds { needed: stake });
        }
        if !wallet.spend_resources(stake, "blackjack_insurance") {
            return Err(InsuranceError::Rejected);
        }

        self.insurance_bet = Some(stake);
        tracing::debug!(stake, "insurance taken");
        Ok(self.finish_insurance(wallet, stake))
    }

    /// Declines insurance and checks the hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered.
    pub fn decline_insurance<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
    ) -> Result<InsuranceOutcome, InsuranceError> {
        if self.state != GameState::InsuranceOffered {
            return Err(InsuranceError::InvalidState);
        }

        Ok(self.finish_insurance(wallet, 0))
    }

    fn finish_insurance<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
        stake: usize,
    ) -> InsuranceOutcome {
        let dealer_blackjack = self.dealer.is_blackjack();

        let payout = if dealer_blackjack { stake * 3 } else { 0 };
        if payout > 0 {
            wallet.add_resources(payout, "blackjack_insurance_win");
        }
        self.insurance_payout = payout;

        let result = self.resolve_naturals(wallet);
        let message = if dealer_blackjack {
            "Dealer has blackjack."
        } else {
            "Nobody home. Play on."
        };

        InsuranceOutcome {
            stake,
            dealer_blackjack,
            payout,
            outcome: self.outcome(None, result, message),
        }
    }
}
