//! Five-reel slot machine with paylines, scatter pays and a progressive
//! jackpot.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::BetError;
use crate::options::SlotOptions;
use crate::wallet::Wallet;

mod paylines;
mod symbols;

pub use paylines::{
    Grid, LineWin, MIN_MATCH, PAYLINES, Payline, Position, REELS, ROWS, count_multiplier,
    count_symbol, evaluate_line, line_run,
};
pub use symbols::{SYMBOLS, Symbol, SymbolInfo};

/// Scatters needed for the scatter bonus.
pub const SCATTER_TRIGGER: usize = 3;
/// Jackpot symbols needed for the progressive jackpot.
pub const JACKPOT_TRIGGER: usize = 5;

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SlotState {
    /// No spin since construction or reset.
    #[default]
    Waiting,
    /// The last spin has been paid.
    Finished,
}

/// How a spin is classified, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WinTier {
    /// Nothing paid.
    NoWin,
    /// Something paid.
    Win,
    /// Paid at least the big-win multiple of the bet.
    BigWin,
    /// Hit the progressive jackpot.
    Jackpot,
}

/// Result of a spin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpinOutcome {
    /// The reels.
    pub grid: Grid,
    /// Paying lines.
    pub lines: Vec<LineWin>,
    /// Scatters on the grid.
    pub scatter_count: usize,
    /// Scatter bonus paid.
    pub scatter_bonus: usize,
    /// Jackpot paid, if hit.
    pub jackpot: Option<usize>,
    /// Everything paid.
    pub total_winnings: usize,
    /// Winnings minus bet.
    pub net: isize,
    /// Classification.
    pub tier: WinTier,
    /// Experience awarded.
    pub experience: usize,
    /// Human-readable message.
    pub message: &'static str,
}

/// One row of the paytable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaytableEntry {
    /// The symbol.
    pub symbol: Symbol,
    /// Short description.
    pub description: &'static str,
    /// Pay for three of a kind.
    pub three: usize,
    /// Pay for four of a kind.
    pub four: usize,
    /// Pay for five of a kind.
    pub five: usize,
}

/// Cumulative slot statistics. Survive [`Slot::reset_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotStats {
    /// Spins played.
    pub spins: usize,
    /// Total wagered.
    pub total_wagered: usize,
    /// Total paid.
    pub total_winnings: usize,
    /// Largest single-spin payout.
    pub biggest_win: usize,
    /// Jackpots hit.
    pub jackpot_hits: usize,
    /// Scatter bonuses triggered.
    pub bonus_rounds: usize,
}

/// Everything a UI needs to render the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotSnapshot {
    /// Engine state.
    pub state: SlotState,
    /// Bet of the last spin.
    pub bet: usize,
    /// Reels of the last spin.
    pub grid: Option<Grid>,
    /// Paying lines of the last spin.
    pub lines: Vec<LineWin>,
    /// Paid on the last spin.
    pub total_winnings: usize,
    /// Current jackpot pool.
    pub jackpot: usize,
    /// Session statistics.
    pub stats: SlotStats,
    /// Paytable at the last bet.
    pub paytable: Vec<PaytableEntry>,
}

/// The slot engine.
///
/// # Example
///
/// ```
/// use parlor::{Player, Slot, SlotOptions};
///
/// let mut slot = Slot::new(SlotOptions::default(), 5);
/// let mut player = Player::new("lucky");
/// let spin = slot.spin(&mut player, 10).unwrap();
/// assert_eq!(spin.grid.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Slot {
    options: SlotOptions,
    rng: ChaCha8Rng,
    state: SlotState,
    bet: usize,
    grid: Option<Grid>,
    lines: Vec<LineWin>,
    total_winnings: usize,
    jackpot: usize,
    stats: SlotStats,
}

impl Slot {
    /// Creates a machine with the jackpot pool at its base value.
    #[must_use]
    pub fn new(options: SlotOptions, seed: u64) -> Self {
        let jackpot = options.jackpot_base;
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: SlotState::Waiting,
            bet: 0,
            grid: None,
            lines: Vec::new(),
            total_winnings: 0,
            jackpot,
            stats: SlotStats::default(),
        }
    }

    /// Places the bet, spins the reels and pays out.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is outside the machine limits or the
    /// wallet cannot cover it.
    pub fn spin<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
        bet: usize,
    ) -> Result<SpinOutcome, BetError> {
        self.place_bet(wallet, bet)?;
        let grid = self.generate_grid();
        Ok(self.pay(wallet, bet, grid))
    }

    /// Places the bet and pays out a predetermined grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is outside the machine limits or the
    /// wallet cannot cover it.
    pub fn spin_grid<W: Wallet + ?Sized>(
        &mut self,
        wallet: &mut W,
        bet: usize,
        grid: Grid,
    ) -> Result<SpinOutcome, BetError> {
        self.place_bet(wallet, bet)?;
        Ok(self.pay(wallet, bet, grid))
    }

    fn place_bet<W: Wallet + ?Sized>(&self, wallet: &mut W, bet: usize) -> Result<(), BetError> {
        if bet < self.options.min_bet || bet > self.options.max_bet {
            return Err(BetError::OutOfRange {
                min: self.options.min_bet,
                max: self.options.max_bet,
            });
        }
        if !wallet.can_afford(bet) {
            tracing::debug!(bet, "slot bet refused");
            return Err(BetError::InsufficientFunds { needed: bet });
        }
        if !wallet.spend_resources(bet, "slots_bet") {
            return Err(BetError::Rejected);
        }
        Ok(())
    }

    /// Picks a symbol with probability proportional to its weight.
    fn pick_symbol(&mut self) -> Symbol {
        let table = self.options.symbols;
        let total: u32 = table.iter().map(|s| s.weight).sum();
        if total == 0 {
            return table.first().map_or(Symbol::Cash, |s| s.symbol);
        }

        let mut roll = self.rng.random_range(0..total);
        for info in table {
            if roll < info.weight {
                return info.symbol;
            }
            roll -= info.weight;
        }
        table.last().map_or(Symbol::Cash, |s| s.symbol)
    }

    fn generate_grid(&mut self) -> Grid {
        let mut grid = [[Symbol::Cash; ROWS]; REELS];
        for reel in &mut grid {
            for cell in reel.iter_mut() {
                *cell = self.pick_symbol();
            }
        }
        grid
    }

    fn pay<W: Wallet + ?Sized>(&mut self, wallet: &mut W, bet: usize, grid: Grid) -> SpinOutcome {
        let lines: Vec<LineWin> = self
            .options
            .paylines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| evaluate_line(&grid, i, line, self.options.symbols, bet))
            .collect();
        let mut total: usize = lines.iter().map(|l| l.payout).sum();

        let scatter_count = count_symbol(&grid, Symbol::Scatter);
        let scatter_bonus = if scatter_count >= SCATTER_TRIGGER {
            self.stats.bonus_rounds += 1;
            bet * scatter_count * 2
        } else {
            0
        };
        total += scatter_bonus;

        let jackpot = if count_symbol(&grid, Symbol::Jackpot) >= JACKPOT_TRIGGER {
            let won = self.jackpot;
            self.jackpot = self.options.jackpot_base;
            self.stats.jackpot_hits += 1;
            tracing::info!(won, "progressive jackpot hit");
            Some(won)
        } else {
            self.jackpot += bet * self.options.jackpot_contribution_bps / 10_000;
            None
        };
        total += jackpot.unwrap_or(0);

        let mut experience = 0;
        if total > 0 {
            wallet.add_resources(total, "slots_win");
            experience = total / 10 + 5;
            wallet.add_experience(experience, "slots_win");
        }

        let tier = if jackpot.is_some() {
            WinTier::Jackpot
        } else if total >= bet * self.options.big_win_multiple {
            WinTier::BigWin
        } else if total > 0 {
            WinTier::Win
        } else {
            WinTier::NoWin
        };

        let talk = self.options.talk;
        let message = match tier {
            WinTier::Jackpot => talk.jackpot.pick(&mut self.rng),
            WinTier::BigWin => talk.big_win.pick(&mut self.rng),
            WinTier::Win => talk.win.pick(&mut self.rng),
            WinTier::NoWin => talk.spin.pick(&mut self.rng),
        };

        self.stats.spins += 1;
        self.stats.total_wagered += bet;
        self.stats.total_winnings += total;
        self.stats.biggest_win = self.stats.biggest_win.max(total);

        self.state = SlotState::Finished;
        self.bet = bet;
        self.grid = Some(grid);
        self.lines.clone_from(&lines);
        self.total_winnings = total;

        tracing::info!(bet, won = total, lines = lines.len(), ?tier, "spin complete");

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total as isize - bet as isize;

        SpinOutcome {
            grid,
            lines,
            scatter_count,
            scatter_bonus,
            jackpot,
            total_winnings: total,
            net,
            tier,
            experience,
            message,
        }
    }

    /// Returns line pays for every paying symbol at `bet`.
    #[must_use]
    pub fn paytable(&self, bet: usize) -> Vec<PaytableEntry> {
        self.options
            .symbols
            .iter()
            .filter(|s| s.value > 0)
            .map(|s| PaytableEntry {
                symbol: s.symbol,
                description: s.description,
                three: s.value * count_multiplier(3) * bet,
                four: s.value * count_multiplier(4) * bet,
                five: s.value * count_multiplier(5) * bet,
            })
            .collect()
    }

    /// Returns the table entry for `symbol`.
    #[must_use]
    pub fn symbol_info(&self, symbol: Symbol) -> Option<&SymbolInfo> {
        symbol.info(self.options.symbols)
    }

    /// Returns the current jackpot pool.
    #[must_use]
    pub const fn jackpot(&self) -> usize {
        self.jackpot
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> SlotState {
        self.state
    }

    /// Returns session statistics.
    #[must_use]
    pub const fn stats(&self) -> &SlotStats {
        &self.stats
    }

    /// Returns a snapshot of the machine.
    #[must_use]
    pub fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            state: self.state,
            bet: self.bet,
            grid: self.grid,
            lines: self.lines.clone(),
            total_winnings: self.total_winnings,
            jackpot: self.jackpot,
            stats: self.stats,
            paytable: self.paytable(self.bet),
        }
    }

    /// Clears the last spin. The jackpot pool and statistics are kept.
    pub fn reset_game(&mut self) {
        self.state = SlotState::Waiting;
        self.bet = 0;
        self.grid = None;
        self.lines.clear();
        self.total_winnings = 0;
        tracing::debug!("slot machine reset");
    }
}
