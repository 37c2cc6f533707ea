//! Engine configuration options.

use crate::slot::{PAYLINES, Payline, SYMBOLS, SymbolInfo};
use crate::talk::{BLACKJACK_TALK, BlackjackTalk, HIGH_LOW_TALK, HighLowTalk, SLOT_TALK, SlotTalk};

/// Conditions under which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any hand.
    #[default]
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether a hand with `value` may double.
    #[must_use]
    pub fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => (9..=11).contains(&value),
            Self::None => false,
        }
    }
}

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for the blackjack engine.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use parlor::BlackjackOptions;
///
/// let options = BlackjackOptions::default()
///     .with_bet_limits(25, 1000)
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlackjackOptions {
    /// Minimum bet.
    pub min_bet: usize,
    /// Maximum bet.
    pub max_bet: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Whether double down is allowed after split.
    pub double_after_split: bool,
    /// Maximum number of hands a player may hold through splitting.
    pub max_hands: usize,
    /// Whether surrender is allowed.
    pub surrender: bool,
    /// Whether insurance is offered.
    pub insurance: bool,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Rounding mode for surrender refunds.
    pub rounding_surrender: RoundingMode,
    /// A fresh deck is brought in when fewer cards than this remain at the
    /// start of a round.
    pub reshuffle_threshold: usize,
    /// Experience per winning hand.
    pub win_xp: usize,
    /// Experience for a natural blackjack.
    pub natural_xp: usize,
    /// Table chatter.
    pub talk: BlackjackTalk,
}

impl Default for BlackjackOptions {
    fn default() -> Self {
        Self {
            min_bet: 10,
            max_bet: 500,
            blackjack_pays: 1.5,
            stand_on_soft_17: true,
            double: DoubleOption::Any,
            double_after_split: true,
            max_hands: 3,
            surrender: true,
            insurance: true,
            rounding_blackjack: RoundingMode::Down,
            rounding_surrender: RoundingMode::Down,
            reshuffle_threshold: 20,
            win_xp: 15,
            natural_xp: 25,
            talk: BLACKJACK_TALK,
        }
    }
}

impl BlackjackOptions {
    /// Sets the table limits.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_bet_limits(5, 50);
    /// assert_eq!((options.min_bet, options.max_bet), (5, 50));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: usize, max_bet: usize) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets whether double down is allowed after split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets the maximum number of hands reachable by splitting.
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets whether surrender is allowed.
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Sets whether insurance is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_insurance(false);
    /// assert_eq!(options.insurance, false);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the rounding mode for surrender refunds.
    #[must_use]
    pub const fn with_rounding_surrender(mut self, mode: RoundingMode) -> Self {
        self.rounding_surrender = mode;
        self
    }

    /// Sets the low-card threshold that triggers a fresh deck.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Replaces the table chatter.
    #[must_use]
    pub const fn with_talk(mut self, talk: BlackjackTalk) -> Self {
        self.talk = talk;
        self
    }
}

/// Configuration options for the high-low engine.
///
/// Multipliers are in basis points (10 000 = 1.0x).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighLowOptions {
    /// Minimum bet.
    pub min_bet: usize,
    /// Maximum bet.
    pub max_bet: usize,
    /// Payout multiplier for the first correct guess.
    pub base_multiplier_bps: u64,
    /// Extra multiplier per streak step beyond the first.
    pub streak_bonus_bps: u64,
    /// A fresh deck is brought in when fewer cards than this remain at the
    /// start of a game.
    pub reshuffle_threshold: usize,
    /// Table chatter.
    pub talk: HighLowTalk,
}

impl Default for HighLowOptions {
    fn default() -> Self {
        Self {
            min_bet: 5,
            max_bet: 200,
            base_multiplier_bps: 18_000,
            streak_bonus_bps: 2_000,
            reshuffle_threshold: 10,
            talk: HIGH_LOW_TALK,
        }
    }
}

impl HighLowOptions {
    /// Sets the table limits.
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: usize, max_bet: usize) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets the base multiplier, in basis points.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::HighLowOptions;
    ///
    /// let options = HighLowOptions::default().with_base_multiplier_bps(20_000);
    /// assert_eq!(options.base_multiplier_bps, 20_000);
    /// ```
    #[must_use]
    pub const fn with_base_multiplier_bps(mut self, bps: u64) -> Self {
        self.base_multiplier_bps = bps;
        self
    }

    /// Sets the per-step streak bonus, in basis points.
    #[must_use]
    pub const fn with_streak_bonus_bps(mut self, bps: u64) -> Self {
        self.streak_bonus_bps = bps;
        self
    }

    /// Sets the low-card threshold that triggers a fresh deck.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Replaces the table chatter.
    #[must_use]
    pub const fn with_talk(mut self, talk: HighLowTalk) -> Self {
        self.talk = talk;
        self
    }
}

/// Configuration options for the draw (war) engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarOptions {
    /// Cards each player lays face down during a war.
    pub war_face_down: usize,
    /// Rounds after which the game is decided by card count.
    pub max_rounds: usize,
}

impl Default for WarOptions {
    fn default() -> Self {
        Self {
            war_face_down: 3,
            max_rounds: 1000,
        }
    }
}

impl WarOptions {
    /// Sets the number of face-down war cards.
    #[must_use]
    pub const fn with_war_face_down(mut self, count: usize) -> Self {
        self.war_face_down = count;
        self
    }

    /// Sets the round cap.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::WarOptions;
    ///
    /// let options = WarOptions::default().with_max_rounds(50);
    /// assert_eq!(options.max_rounds, 50);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }
}

/// Configuration options for the slot engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOptions {
    /// Minimum bet.
    pub min_bet: usize,
    /// Maximum bet.
    pub max_bet: usize,
    /// Jackpot pool value after it is won (and at start).
    pub jackpot_base: usize,
    /// Share of each bet added to the pool on non-jackpot spins, in basis
    /// points.
    pub jackpot_contribution_bps: usize,
    /// Winnings at or above `bet * big_win_multiple` count as a big win.
    pub big_win_multiple: usize,
    /// Symbol table with weights and values.
    pub symbols: &'static [SymbolInfo],
    /// Paylines evaluated on every spin.
    pub paylines: &'static [Payline],
    /// Table chatter.
    pub talk: SlotTalk,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bet: 100,
            jackpot_base: 50_000,
            jackpot_contribution_bps: 1_000,
            big_win_multiple: 10,
            symbols: &SYMBOLS,
            paylines: &PAYLINES,
            talk: SLOT_TALK,
        }
    }
}

impl SlotOptions {
    /// Sets the table limits.
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: usize, max_bet: usize) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets the jackpot base value.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::SlotOptions;
    ///
    /// let options = SlotOptions::default().with_jackpot_base(1_000);
    /// assert_eq!(options.jackpot_base, 1_000);
    /// ```
    #[must_use]
    pub const fn with_jackpot_base(mut self, base: usize) -> Self {
        self.jackpot_base = base;
        self
    }

    /// Sets the jackpot contribution, in basis points of the bet.
    #[must_use]
    pub const fn with_jackpot_contribution_bps(mut self, bps: usize) -> Self {
        self.jackpot_contribution_bps = bps;
        self
    }

    /// Replaces the symbol table.
    #[must_use]
    pub const fn with_symbols(mut self, symbols: &'static [SymbolInfo]) -> Self {
        self.symbols = symbols;
        self
    }

    /// Replaces the payline set.
    #[must_use]
    pub const fn with_paylines(mut self, paylines: &'static [Payline]) -> Self {
        self.paylines = paylines;
        self
    }

    /// Replaces the table chatter.
    #[must_use]
    pub const fn with_talk(mut self, talk: SlotTalk) -> Self {
        self.talk = talk;
        self
    }
}
