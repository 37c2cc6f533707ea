//! Error types for engine operations.
//!
//! Every error is returned before any engine state is mutated or any wallet
//! is debited; its `Display` text is suitable for showing to the player.

use thiserror::Error;

/// Errors that can occur when opening a round (placing the main bet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is outside the table limits.
    #[error("bet must be between {min} and {max}")]
    OutOfRange {
        /// Minimum bet.
        min: usize,
        /// Maximum bet.
        max: usize,
    },
    /// The wallet cannot cover the bet.
    #[error("insufficient bankroll, {needed} needed")]
    InsufficientFunds {
        /// Amount that was needed.
        needed: usize,
    },
    /// The wallet refused the debit.
    #[error("failed to place bet")]
    Rejected,
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// Not enough cards to deal the opening hand.
    #[error("not enough cards to deal")]
    NotEnoughCards,
}

/// Errors that can occur during blackjack player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("can only double down on the first two cards")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("can only split pairs")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("maximum number of split hands reached")]
    MaxSplitsReached,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action, {needed} needed")]
    InsufficientFunds {
        /// Amount that was needed.
        needed: usize,
    },
    /// The wallet refused the debit.
    #[error("failed to place additional bet")]
    Rejected,
    /// No cards left in the deck or discard pile.
    #[error("no cards left to deal")]
    NoCards,
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Invalid game state for insurance.
    #[error("insurance not available")]
    InvalidState,
    /// Insurance is not offered at this table.
    #[error("insurance is not offered at this table")]
    NotOffered,
    /// Insufficient funds for insurance.
    #[error("insufficient funds for insurance, {needed} needed")]
    InsufficientFunds {
        /// Amount that was needed.
        needed: usize,
    },
    /// The wallet refused the debit.
    #[error("failed to place insurance bet")]
    Rejected,
}

/// Errors that can occur in the high-low game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HighLowError {
    /// No active game.
    #[error("no active game")]
    InvalidState,
    /// Cash out requested before any correct guess.
    #[error("no winnings to cash out")]
    NothingToCashOut,
    /// No cards left in the deck or discard pile.
    #[error("no cards left to deal")]
    NoCards,
}

/// Errors that can occur in the draw (war) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WarError {
    /// The game needs exactly two players.
    #[error("draw game requires exactly 2 players, got {0}")]
    PlayerCount(usize),
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
}
