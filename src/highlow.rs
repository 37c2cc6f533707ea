//! High-low: guess whether the next card beats the current one, build a
//! streak, and cash out before the cards turn.

use alloc::vec::Vec;

use crate::card::{Card, ValueScheme};
use crate::deck::{CardManager, DeckKind, DeckStats};
use crate::error::{BetError, HighLowError};
use crate::options::HighLowOptions;
use crate::wallet::Wallet;

const BPS: u128 = 10_000;

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HighLowState {
    /// No game since construction or reset.
    #[default]
    Waiting,
    /// A reference card is showing and a prediction is expected.
    Playing,
    /// The game ended on a wrong guess or a cash out.
    Finished,
}

/// The player's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prediction {
    /// The next card will be higher.
    Higher,
    /// The next card will be lower.
    Lower,
}

/// How the next card actually compared to the reference card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Comparison {
    /// Strictly higher.
    Higher,
    /// Strictly lower.
    Lower,
    /// Same value. Always a losing guess.
    Same,
}

impl Comparison {
    const fn of(next: u8, current: u8) -> Self {
        if next > current {
            Self::Higher
        } else if next < current {
            Self::Lower
        } else {
            Self::Same
        }
    }

    const fn matches(self, prediction: Prediction) -> bool {
        matches!(
            (self, prediction),
            (Self::Higher, Prediction::Higher) | (Self::Lower, Prediction::Lower)
        )
    }
}

/// An action legal right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HighLowAction {
    /// Predict higher.
    PredictHigher,
    /// Predict lower.
    PredictLower,
    /// Take the winnings and leave.
    CashOut,
}

/// Result of opening a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HighLowStart {
    /// The first reference card.
    pub card: Card,
    /// Human-readable message.
    pub message: &'static str,
}

/// Result of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PredictionOutcome {
    /// Whether the guess was right.
    pub correct: bool,
    /// What was predicted.
    pub prediction: Prediction,
    /// What actually happened.
    pub actual: Comparison,
    /// The reference card the guess was made against.
    pub previous_card: Card,
    /// The card that was dealt.
    pub card: Card,
    /// Streak after the guess.
    pub streak: usize,
    /// Resources credited for this guess.
    pub winnings: usize,
    /// Multiplier applied, in basis points.
    pub multiplier_bps: u64,
    /// Streak winnings plus bet forfeited on a wrong guess.
    pub lost_amount: usize,
    /// State after the guess.
    pub state: HighLowState,
    /// Human-readable message.
    pub message: &'static str,
}

/// Result of cashing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CashOut {
    /// Streak at cash out.
    pub streak: usize,
    /// Best streak this session.
    pub max_streak: usize,
    /// Winnings already credited during the streak.
    pub total_winnings: usize,
    /// Bet returned by the cash out.
    pub original_bet: usize,
    /// Winnings plus returned bet.
    pub total_payout: usize,
    /// Experience awarded.
    pub experience: usize,
    /// Human-readable message.
    pub message: &'static str,
}

/// Odds for the next card.
///
/// Computed from a full 52-card population minus the reference card, not
/// from what is actually left in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProbabilityHint {
    /// Chance the next card is higher, as a rounded percentage.
    pub higher_percent: usize,
    /// Chance the next card is lower, as a rounded percentage.
    pub lower_percent: usize,
    /// Cards of a higher value.
    pub higher_cards: usize,
    /// Cards of a lower value.
    pub lower_cards: usize,
    /// Cards considered.
    pub total_cards: usize,
    /// The better call.
    pub recommendation: Prediction,
    /// Spread between the two percentages.
    pub confidence: usize,
}

impl ProbabilityHint {
    /// Computes the hint for a reference card of `value` (1 to 13).
    #[must_use]
    pub const fn for_value(value: u8) -> Self {
        let value = value as usize;
        let higher_cards = 4 * 13usize.saturating_sub(value);
        let lower_cards = 4 * value.saturating_sub(1);
        let total_cards = higher_cards + lower_cards + 3;

        let higher_percent = percent(higher_cards, total_cards);
        let lower_percent = percent(lower_cards, total_cards);

        Self {
            higher_percent,
            lower_percent,
            higher_cards,
            lower_cards,
            total_cards,
            recommendation: if higher_percent > lower_percent {
                Prediction::Higher
            } else {
                Prediction::Lower
            },
            confidence: higher_percent.abs_diff(lower_percent),
        }
    }
}

const fn percent(part: usize, total: usize) -> usize {
    (part * 100 + total / 2) / total
}

/// Cumulative high-low statistics. Survive [`HighLow::reset_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HighLowStats {
    /// Games started.
    pub games: usize,
    /// Predictions made.
    pub predictions: usize,
    /// Correct predictions.
    pub correct: usize,
    /// Wrong predictions.
    pub wrong: usize,
    /// Longest streak.
    pub best_streak: usize,
    /// Winnings credited across all games.
    pub total_earnings: usize,
}

impl HighLowStats {
    /// Share of correct predictions, as a rounded percentage.
    #[must_use]
    pub const fn accuracy(&self) -> usize {
        if self.predictions == 0 {
            0
        } else {
            percent(self.correct, self.predictions)
        }
    }
}

/// Everything a UI needs to render the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HighLowSnapshot {
    /// Engine state.
    pub state: HighLowState,
    /// Bet riding on the game.
    pub bet: usize,
    /// Reference card.
    pub current_card: Option<Card>,
    /// The card that ended the game on a wrong guess.
    pub next_card: Option<Card>,
    /// Earlier reference cards, oldest first.
    pub history: Vec<Card>,
    /// Current streak.
    pub streak: usize,
    /// Best streak this session.
    pub max_streak: usize,
    /// Winnings credited during this game.
    pub total_winnings: usize,
    /// Winnings for the next correct guess (0 unless playing).
    pub potential_winnings: usize,
    /// Odds for the next card (only while playing).
    pub hint: Option<ProbabilityHint>,
    /// Actions legal right now.
    pub actions: Vec<HighLowAction>,
    /// Session statistics.
    pub stats: HighLowStats,
    /// Deck bookkeeping.
    pub deck: DeckStats,
}

/// The high-low engine.
///
/// # Example
///
/// ```
/// use parlor::{HighLow, HighLowOptions, HighLowState, Player, Prediction};
///
/// let mut game = HighLow::new(HighLowOptions::default(), 3);
/// let mut player = Player::new("sam");
/// game.start_game(&mut player, 10).unwrap();
/// let guess = game.predict(&mut player, Prediction::Higher).unwrap();
/// if !guess.correct {
///     assert_eq!(game.state(), HighLowState::Finished);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HighLow {
    options: HighLowOptions,
    cards: CardManager,
    state: HighLowState,
    bet: usize,
    current: Option<Card>,
    next: Option<Card>,
    history: Vec<Card>,
    streak: usize,
    max_streak: usize,
    total_winnings: usize,
    stats: HighLowStats,
}

impl HighLow {
    /// Creates an engine with a freshly shuffled deck.
    #[must_use]
    pub fn new(options: HighLowOptions, seed: u64) -> Self {
        let mut cards = CardManager::new(seed);
        cards.initialize_deck(DeckKind::Standard);

        Self {
            options,
            cards,
            state: HighLowState::Waiting,
            bet: 0,
            current: None,
            next: None,
            history: Vec::new(),
            streak: 0,
            max_streak: 0,
            total_winnings: 0,
            stats: HighLowStats::default(),
        }
    }

    /// Numeric value used for comparisons: Ace 1, J/Q/K 11/12/13.
    #[must_use]
    pub fn card_value(card: &Card) -> u8 {
        card.value(ValueScheme::AceLow)
    }

    /// Places the bet and deals the first reference card.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is in progress, the bet is outside the
    /// table limits, or the wallet cannot cover it.
    pub fn start_game<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
        bet: usize,
    ) -> Result<HighLowStart, BetError> {
        if self.state == HighLowState::Playing {
            return Err(BetError::RoundInProgress);
        }
        if bet < self.options.min_bet || bet > self.options.max_bet {
            return Err(BetError::OutOfRange {
                min: self.options.min_bet,
                max: self.options.max_bet,
            });
        }
        if !wallet.can_afford(bet) {
            tracing::debug!(bet, "high-low bet refused");
            return Err(BetError::InsufficientFunds { needed: bet });
        }
        if !wallet.spend_resources(bet, "highlow_bet") {
            return Err(BetError::Rejected);
        }

        self.cards.discard(self.current.take().into_iter().chain(self.next.take()));
        if self
            .cards
            .needs_reshuffle(self.options.reshuffle_threshold.max(1))
        {
            self.cards.reinitialize();
            tracing::debug!("fresh deck brought in");
        }

        let Some(card) = self.cards.deal_one(true) else {
            wallet.add_resources(bet, "highlow_refund");
            return Err(BetError::NotEnoughCards);
        };

        self.state = HighLowState::Playing;
        self.bet = bet;
        self.current = Some(card);
        self.history.clear();
        self.streak = 0;
        self.total_winnings = 0;
        self.stats.games += 1;

        tracing::info!(bet, %card, "high-low game started");
        Ok(HighLowStart {
            card,
            message: "Higher or lower?",
        })
    }

    fn multiplier_bps(&self, streak: usize) -> u64 {
        let steps = streak.saturating_sub(1) as u64;
        self.options.base_multiplier_bps * (10_000 + steps * self.options.streak_bonus_bps) / 10_000
    }

    fn payout(&self, streak: usize) -> usize {
        let steps = streak.saturating_sub(1) as u128;
        let factor = BPS + steps * u128::from(self.options.streak_bonus_bps);
        let paid =
            self.bet as u128 * u128::from(self.options.base_multiplier_bps) * factor / (BPS * BPS);
        usize::try_from(paid).unwrap_or(usize::MAX)
    }

    /// Winnings the next correct guess would pay.
    #[must_use]
    pub fn potential_winnings(&self) -> usize {
        if self.state == HighLowState::Playing {
            self.payout(self.streak + 1)
        } else {
            0
        }
    }

    /// Deals the next card and scores the prediction.
    ///
    /// A correct guess extends the streak and credits
    /// `floor(bet * base * (1 + (streak - 1) * bonus))`; the dealt card
    /// becomes the new reference. A wrong guess, ties included, ends the
    /// game and forfeits the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress or no cards are left.
    pub fn predict<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
        prediction: Prediction,
    ) -> Result<PredictionOutcome, HighLowError> {
        if self.state != HighLowState::Playing {
            return Err(HighLowError::InvalidState);
        }
        let Some(previous) = self.current else {
            return Err(HighLowError::InvalidState);
        };

        if self.cards.remaining() == 0 {
            self.cards.reshuffle_discard_into_deck();
        }
        let card = self.cards.deal_one(true).ok_or(HighLowError::NoCards)?;

        let actual = Comparison::of(Self::card_value(&card), Self::card_value(&previous));
        let correct = actual.matches(prediction);
        self.stats.predictions += 1;

        if correct {
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            self.stats.correct += 1;
            self.stats.best_streak = self.stats.best_streak.max(self.streak);

            let winnings = self.payout(self.streak);
            self.total_winnings += winnings;
            self.stats.total_earnings += winnings;
            if winnings > 0 {
                wallet.add_resources(winnings, "highlow_win");
            }
            wallet.add_experience(5 + self.streak, "highlow_correct");

            self.history.push(previous);
            self.cards.discard([previous]);
            self.current = Some(card);

            let talk = self.options.talk;
            let message = if self.streak > 1 {
                talk.streak.pick(self.cards.rng())
            } else {
                talk.correct.pick(self.cards.rng())
            };

            tracing::debug!(%previous, %card, streak = self.streak, winnings, "correct guess");
            return Ok(PredictionOutcome {
                correct,
                prediction,
                actual,
                previous_card: previous,
                card,
                streak: self.streak,
                winnings,
                multiplier_bps: self.multiplier_bps(self.streak),
                lost_amount: 0,
                state: self.state,
                message,
            });
        }

        self.stats.wrong += 1;
        self.next = Some(card);
        self.state = HighLowState::Finished;
        let lost_amount = self.total_winnings + self.bet;
        let message = self.options.talk.wrong.pick(self.cards.rng());

        tracing::info!(
            %previous,
            %card,
            ?actual,
            streak = self.streak,
            lost_amount,
            "high-low game lost"
        );
        Ok(PredictionOutcome {
            correct,
            prediction,
            actual,
            previous_card: previous,
            card,
            streak: self.streak,
            winnings: 0,
            multiplier_bps: 0,
            lost_amount,
            state: self.state,
            message,
        })
    }

    /// Ends the game, returning the original bet. Winnings were already
    /// credited guess by guess.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress or no guess has been won
    /// yet.
    pub fn cash_out<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
    ) -> Result<CashOut, HighLowError> {
        if self.state != HighLowState::Playing {
            return Err(HighLowError::InvalidState);
        }
        if self.streak == 0 {
            return Err(HighLowError::NothingToCashOut);
        }

        wallet.add_resources(self.bet, "highlow_cashout");
        let experience = 10 + self.streak * 2;
        wallet.add_experience(experience, "highlow_cashout");
        self.state = HighLowState::Finished;

        let total_payout = self.total_winnings + self.bet;
        tracing::info!(streak = self.streak, total_payout, "high-low cash out");

        Ok(CashOut {
            streak: self.streak,
            max_streak: self.max_streak,
            total_winnings: self.total_winnings,
            original_bet: self.bet,
            total_payout,
            experience,
            message: self.options.talk.cashout.pick(self.cards.rng()),
        })
    }

    /// Odds for the next card, while a game is in progress.
    #[must_use]
    pub fn probability_hint(&self) -> Option<ProbabilityHint> {
        if self.state != HighLowState::Playing {
            return None;
        }
        self.current
            .map(|card| ProbabilityHint::for_value(Self::card_value(&card)))
    }

    /// Returns the actions legal right now.
    #[must_use]
    pub fn available_actions(&self) -> Vec<HighLowAction> {
        if self.state != HighLowState::Playing {
            return Vec::new();
        }
        let mut actions = alloc::vec![HighLowAction::PredictHigher, HighLowAction::PredictLower];
        if self.streak > 0 {
            actions.push(HighLowAction::CashOut);
        }
        actions
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> HighLowState {
        self.state
    }

    /// Returns the current reference card.
    #[must_use]
    pub const fn current_card(&self) -> Option<Card> {
        self.current
    }

    /// Returns the current streak.
    #[must_use]
    pub const fn streak(&self) -> usize {
        self.streak
    }

    /// Returns earlier reference cards of this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// Returns session statistics.
    #[must_use]
    pub const fn stats(&self) -> &HighLowStats {
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

    /// Returns a snapshot of the game.
    #[must_use]
    pub fn snapshot(&self) -> HighLowSnapshot {
        HighLowSnapshot {
            state: self.state,
            bet: self.bet,
            current_card: self.current,
            next_card: self.next,
            history: self.history.clone(),
            streak: self.streak,
            max_streak: self.max_streak,
            total_winnings: self.total_winnings,
            potential_winnings: self.potential_winnings(),
            hint: self.probability_hint(),
            actions: self.available_actions(),
            stats: self.stats,
            deck: self.cards.stats(),
        }
    }

    /// Abandons any game in progress and brings in a fresh deck. Statistics
    /// are kept.
    pub fn reset_game(&mut self) {
        self.state = HighLowState::Waiting;
        self.bet = 0;
        self.current = None;
        self.next = None;
        self.history.clear();
        self.streak = 0;
        self.total_winnings = 0;
        self.cards.reinitialize();
        tracing::debug!("high-low game reset");
    }
}

