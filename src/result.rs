//! Blackjack round results.

extern crate alloc;

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts, dealer has higher value, or dealer
    /// blackjack).
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
    /// Player surrendered.
    Surrendered,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet riding on this hand.
    pub bet: usize,
    /// Amount credited back for this hand (stake included).
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundResult {
    /// Results for each hand (several after a split).
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Insurance stake (0 if none was taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 unless the dealer had blackjack).
    pub insurance_payout: usize,
    /// Resources refunded by surrender.
    pub surrender_refund: usize,
    /// Total credited at settlement across all hands.
    pub total_payout: usize,
    /// Net result over every stake of the round.
    pub net: isize,
    /// Experience awarded.
    pub experience: usize,
    /// Table chatter for the round.
    pub message: &'static str,
}

impl RoundResult {
    /// Returns the outcome of the first hand.
    #[must_use]
    pub fn primary_outcome(&self) -> Option<HandOutcome> {
        self.hands.first().map(|h| h.outcome)
    }
}
