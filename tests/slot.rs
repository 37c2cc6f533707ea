use parlor::slot::{Grid, line_run};
use parlor::{BetError, Player, Slot, SlotOptions, SlotState, Symbol, Wallet, WinTier};

use Symbol::{Car, Cash, Crown, Diamond, Gold, Jackpot, Kingpin, Scatter, Wild};

/// A bare balance with no level bonuses.
struct Purse(usize);

impl Wallet for Purse {
    fn can_afford(&self, amount: usize) -> bool {
        self.0 >= amount
    }

    fn spend_resources(&mut self, amount: usize, _reason: &str) -> bool {
        if self.0 < amount {
            return false;
        }
        self.0 -= amount;
        true
    }

    fn add_resources(&mut self, amount: usize, _reason: &str) {
        self.0 += amount;
    }

    fn add_experience(&mut self, _points: usize, _reason: &str) {}
}

/// No payline runs past the second reel.
const LOSING: Grid = [
    [Cash, Gold, Car],
    [Diamond, Crown, Kingpin],
    [Cash, Gold, Car],
    [Diamond, Crown, Kingpin],
    [Cash, Gold, Car],
];

#[test]
fn five_crowns_on_top_row() {
    let grid: Grid = [
        [Crown, Cash, Car],
        [Crown, Gold, Cash],
        [Crown, Cash, Car],
        [Crown, Gold, Cash],
        [Crown, Cash, Car],
    ];
    let mut slot = Slot::new(SlotOptions::default(), 1);
    let mut player = Player::new("lucky");

    let spin = slot.spin_grid(&mut player, 10, grid).unwrap();
    assert_eq!(spin.lines.len(), 1);
    let line = spin.lines[0];
    assert_eq!(line.line, 0);
    assert_eq!(line.symbol, Crown);
    assert_eq!(line.count, 5);
    assert_eq!(line.payout, 10 * 10 * 10);
    assert_eq!(spin.total_winnings, 1000);
    assert_eq!(spin.net, 990);
    assert_eq!(spin.tier, WinTier::BigWin);
    assert_eq!(spin.experience, 105);
    // 105 experience also reaches level 2.
    assert_eq!(player.resources(), 1990 + 200);
    assert_eq!(slot.jackpot(), 50_001);
}

#[test]
fn losing_spin_feeds_the_jackpot() {
    let mut slot = Slot::new(SlotOptions::default(), 1);
    let mut player = Player::new("lucky");

    let spin = slot.spin_grid(&mut player, 100, LOSING).unwrap();
    assert!(spin.lines.is_empty());
    assert_eq!(spin.total_winnings, 0);
    assert_eq!(spin.tier, WinTier::NoWin);
    assert_eq!(spin.net, -100);
    assert_eq!(slot.jackpot(), 50_010);
    assert_eq!(player.resources(), 900);
}

#[test]
fn five_jackpot_symbols_pay_the_pool() {
    let mut grid = LOSING;
    grid[2] = [Jackpot, Jackpot, Cash];
    grid[3] = [Jackpot, Jackpot, Gold];
    grid[4] = [Jackpot, Cash, Gold];

    let mut slot = Slot::new(SlotOptions::default(), 1);
    let mut player = Player::new("lucky");
    slot.spin_grid(&mut player, 50, LOSING).unwrap();
    assert_eq!(slot.jackpot(), 50_005);

    let spin = slot.spin_grid(&mut player, 10, grid).unwrap();
    assert_eq!(spin.jackpot, Some(50_005));
    assert_eq!(spin.total_winnings, 50_005);
    assert_eq!(spin.tier, WinTier::Jackpot);
    assert_eq!(slot.jackpot(), 50_000);
    assert_eq!(slot.stats().jackpot_hits, 1);
}

#[test]
fn four_jackpot_symbols_do_not_pay() {
    let mut grid = LOSING;
    grid[2] = [Jackpot, Jackpot, Cash];
    grid[3] = [Jackpot, Jackpot, Gold];

    let mut slot = Slot::new(SlotOptions::default(), 1);
    let mut player = Player::new("lucky");
    let spin = slot.spin_grid(&mut player, 10, grid).unwrap();
    assert_eq!(spin.jackpot, None);
    assert_eq!(slot.jackpot(), 50_001);
}

#[test]
fn scatters_pay_anywhere() {
    let mut grid = LOSING;
    grid[1][2] = Scatter;
    grid[3][0] = Scatter;
    grid[4][1] = Scatter;

    let mut slot = Slot::new(SlotOptions::default(), 1);
    let mut player = Player::new("lucky");
    let spin = slot.spin_grid(&mut player, 5, grid).unwrap();
    assert!(spin.lines.is_empty());
    assert_eq!(spin.scatter_count, 3);
    assert_eq!(spin.scatter_bonus, 30);
    assert_eq!(spin.total_winnings, 30);
    assert_eq!(spin.tier, WinTier::Win);
    assert_eq!(slot.stats().bonus_rounds, 1);
}

#[test]
fn wilds_extend_runs() {
    assert_eq!(line_run(&[Wild, Wild, Crown, Crown, Cash]), (Crown, 4));
    assert_eq!(line_run(&[Cash, Wild, Cash, Gold, Cash]), (Cash, 3));
    assert_eq!(line_run(&[Gold, Cash, Wild, Wild, Wild]), (Gold, 1));
    assert_eq!(line_run(&[Wild; 5]), (Wild, 5));
}

#[test]
fn wild_line_pays_as_the_matched_symbol() {
    let mut grid = LOSING;
    grid[0][1] = Wild;
    grid[1][1] = Gold;
    grid[2][1] = Gold;

    let mut slot = Slot::new(SlotOptions::default(), 1);
    let mut player = Player::new("lucky");
    let spin = slot.spin_grid(&mut player, 2, grid).unwrap();
    let middle = spin.lines.iter().find(|l| l.line == 1).unwrap();
    assert_eq!(middle.symbol, Gold);
    assert_eq!(middle.count, 3);
    assert_eq!(middle.payout, 3 * 2);
}

#[test]
fn bet_limits() {
    let mut slot = Slot::new(SlotOptions::default(), 1);
    let mut player = Player::with_resources("broke", 3);

    assert_eq!(
        slot.spin(&mut player, 0).unwrap_err(),
        BetError::OutOfRange { min: 1, max: 100 }
    );
    assert_eq!(
        slot.spin(&mut player, 101).unwrap_err(),
        BetError::OutOfRange { min: 1, max: 100 }
    );
    assert_eq!(
        slot.spin(&mut player, 5).unwrap_err(),
        BetError::InsufficientFunds { needed: 5 }
    );
    assert_eq!(slot.state(), SlotState::Waiting);
    assert_eq!(slot.stats().spins, 0);
}

#[test]
fn random_spins_settle_exactly() {
    let mut slot = Slot::new(SlotOptions::default(), 77);
    let mut purse = Purse(100_000);

    for _ in 0..200 {
        let before = purse.0;
        let spin = slot.spin(&mut purse, 10).unwrap();
        assert_eq!(purse.0 + 10, before + spin.total_winnings);

        let lines: usize = spin.lines.iter().map(|l| l.payout).sum();
        assert_eq!(
            lines + spin.scatter_bonus + spin.jackpot.unwrap_or(0),
            spin.total_winnings
        );
    }
    assert_eq!(slot.stats().spins, 200);
    assert_eq!(slot.stats().total_wagered, 2000);
}

#[test]
fn paytable_scales_with_bet() {
    let slot = Slot::new(SlotOptions::default(), 1);
    let table = slot.paytable(2);

    assert_eq!(table.len(), 7);
    let crown = table.iter().find(|e| e.symbol == Crown).unwrap();
    assert_eq!((crown.three, crown.four, crown.five), (20, 60, 200));
    assert!(table.iter().all(|e| e.symbol != Wild));
}

#[test]
fn reset_keeps_jackpot_and_stats() {
    let fresh = Slot::new(SlotOptions::default(), 3).snapshot();

    let mut slot = Slot::new(SlotOptions::default(), 3);
    let mut player = Player::new("lucky");
    slot.spin_grid(&mut player, 100, LOSING).unwrap();
    slot.reset_game();

    let mut snapshot = slot.snapshot();
    assert_eq!(snapshot.state, SlotState::Waiting);
    assert_eq!(snapshot.jackpot, 50_010);
    assert_eq!(snapshot.stats.spins, 1);
    snapshot.jackpot = fresh.jackpot;
    snapshot.stats = fresh.stats;
    assert_eq!(snapshot, fresh);
}
