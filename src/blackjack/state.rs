//! Blackjack state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameState {
    /// No round has been played since construction or reset.
    #[default]
    Waiting,
    /// The dealer shows an Ace and the insurance decision is pending.
    InsuranceOffered,
    /// Waiting for player actions.
    Playing,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The round has been settled.
    Finished,
}

impl GameState {
    /// Returns whether a new round may be started.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Waiting | Self::Finished)
    }
}

/// A player action that is legal in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, take one card and stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet.
    Surrender,
    /// Place the insurance side bet.
    TakeInsurance,
    /// Decline insurance.
    DeclineInsurance,
}
