//! Casino minigame engines with optional `no_std` support.
//!
//! Four engines share one card model and deck manager:
//!
//! - [`Blackjack`]: split, double, insurance and surrender against a dealer.
//! - [`HighLow`]: call the next card, build a streak, cash out.
//! - [`War`]: two-player simultaneous draw with war on ties.
//! - [`Slot`]: five reels, paylines, scatters and a progressive jackpot.
//!
//! Engines never own money. Every operation that moves resources takes a
//! [`Wallet`]; [`Player`] is an in-memory implementation with levels,
//! titles and achievements.
//!
//! # Example
//!
//! ```
//! use parlor::{Blackjack, BlackjackOptions, GameState, Player};
//!
//! let mut table = Blackjack::new(BlackjackOptions::default(), 42);
//! let mut player = Player::new("Dee");
//!
//! let mut outcome = table.start_game(&mut player, 25).unwrap();
//! if outcome.state == GameState::InsuranceOffered {
//!     outcome = table.decline_insurance(&mut player).unwrap().outcome;
//! }
//! while outcome.state == GameState::Playing {
//!     outcome = table.stand(&mut player).unwrap();
//! }
//! assert_eq!(table.state(), GameState::Finished);
//! assert!(table.last_result().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod highlow;
pub mod options;
pub mod player;
pub mod result;
pub mod slot;
pub mod talk;
pub mod wallet;
pub mod war;

// Re-export main types
pub use blackjack::{
    Action, Blackjack, BlackjackSnapshot, BlackjackStats, GameState, InsuranceOutcome, Outcome,
};
pub use card::{
    ACE_HIGH, Card, DECK_SIZE, SPECIAL_CARDS, SpecialCard, SpecialEffect, Suit, ValueScheme,
};
pub use deck::{CardManager, DeckKind, DeckStats, standard_deck};
pub use error::{ActionError, BetError, HighLowError, InsuranceError, WarError};
pub use hand::{DealerHand, Hand, HandStatus};
pub use highlow::{
    CashOut, Comparison, HighLow, HighLowAction, HighLowSnapshot, HighLowStart, HighLowState,
    HighLowStats, Prediction, PredictionOutcome, ProbabilityHint,
};
pub use options::{
    BlackjackOptions, DoubleOption, HighLowOptions, RoundingMode, SlotOptions, WarOptions,
};
pub use player::{Achievement, GameOutcome, LevelUp, Player, PlayerStats, TITLES, Title};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use slot::{
    Grid, LineWin, PAYLINES, PaytableEntry, SYMBOLS, Slot, SlotSnapshot, SlotState, SlotStats,
    SpinOutcome, Symbol, SymbolInfo, WinTier,
};
pub use wallet::Wallet;
pub use war::{
    RoundOutcome, Rewards, SeatView, War, WarEvent, WarEventKind, WarPlayer, WarSnapshot,
    WarState, WarSummary,
};
