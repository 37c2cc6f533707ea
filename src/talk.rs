//! Table chatter: immutable message banks the engines pick from.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Line used when a bank is empty.
pub const FALLBACK_LINE: &str = "Keep grinding!";

/// A bank of interchangeable lines for one kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lines(pub &'static [&'static str]);

impl Lines {
    /// Picks a line uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.0.choose(rng).copied().unwrap_or(FALLBACK_LINE)
    }
}

/// Blackjack chatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackjackTalk {
    /// Player natural.
    pub blackjack: Lines,
    /// Player bust.
    pub bust: Lines,
    /// Player win.
    pub win: Lines,
    /// Player loss.
    pub loss: Lines,
    /// Push.
    pub push: Lines,
}

/// Default blackjack chatter.
pub const BLACKJACK_TALK: BlackjackTalk = BlackjackTalk {
    blackjack: Lines(&[
        "Blackjack! Twenty-one off the deal.",
        "Natural twenty-one. The table is yours.",
        "Ace and a face. That's how it's done.",
    ]),
    bust: Lines(&[
        "Busted. The cards humble everybody sometimes.",
        "Over twenty-one. Shake it off.",
        "Bust. Bounce back on the next hand.",
    ]),
    win: Lines(&[
        "You beat the house.",
        "Winner. That's how you handle the table.",
        "A clean win. Keep that energy.",
    ]),
    loss: Lines(&[
        "House takes this one.",
        "Dealer got you this round.",
        "That's an L. Come back harder.",
    ]),
    push: Lines(&[
        "Push. Nobody wins, nobody loses.",
        "Tied with the house. Your bet comes back.",
    ]),
};

/// High-low chatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighLowTalk {
    /// First correct guess.
    pub correct: Lines,
    /// Wrong guess.
    pub wrong: Lines,
    /// Correct guess extending a streak.
    pub streak: Lines,
    /// Cash out.
    pub cashout: Lines,
}

/// Default high-low chatter.
pub const HIGH_LOW_TALK: HighLowTalk = HighLowTalk {
    correct: Lines(&[
        "Correct! You read that card.",
        "Called it.",
        "Right on the money.",
    ]),
    wrong: Lines(&[
        "The cards got you this time.",
        "Wrong call. Learn and adapt.",
        "That one surprised you.",
    ]),
    streak: Lines(&[
        "Streak building!",
        "Hot streak. The cards feel it.",
        "On fire!",
    ]),
    cashout: Lines(&[
        "Smart cash out. Bag secured.",
        "Good timing.",
        "Profits taken.",
    ]),
};

/// Slot chatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTalk {
    /// Spin without a win.
    pub spin: Lines,
    /// Ordinary win.
    pub win: Lines,
    /// Big win.
    pub big_win: Lines,
    /// Progressive jackpot.
    pub jackpot: Lines,
}

/// Default slot chatter.
pub const SLOT_TALK: SlotTalk = SlotTalk {
    spin: Lines(&[
        "Let's see what the reels bring.",
        "Reels spinning. Next one's yours.",
    ]),
    win: Lines(&[
        "Winner! The reels respect you.",
        "That's a hit.",
    ]),
    big_win: Lines(&[
        "BIG WIN! Serious cash.",
        "Massive hit!",
    ]),
    jackpot: Lines(&[
        "JACKPOT! The ultimate prize!",
        "Progressive jackpot! Slot royalty!",
    ]),
};
