//! Card types and value schemes.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Themed special cards outside the four standard suits.
    Special,
}

impl Suit {
    /// The four standard suits, in deck-building order.
    pub const STANDARD: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
            Self::Special => "",
        }
    }
}

/// Effect carried by a themed special card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialEffect {
    /// Matches anything.
    Wild,
    /// Boosts the holder's empire rewards.
    EmpireBoost,
    /// Bridges two ranks.
    Bridge,
}

impl SpecialEffect {
    /// Returns the textual effect tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wild => "wild",
            Self::EmpireBoost => "empire_boost",
            Self::Bridge => "bridge",
        }
    }
}

/// Static description of a themed special card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialCard {
    /// Display name, used in place of a rank.
    pub name: &'static str,
    /// Comparison value.
    pub value: u8,
    /// Effect tag.
    pub effect: SpecialEffect,
}

/// Special cards appended to a themed deck. A special card's `rank` is its
/// 1-based index into this table.
pub const SPECIAL_CARDS: [SpecialCard; 3] = [
    SpecialCard {
        name: "Diamond",
        value: 15,
        effect: SpecialEffect::Wild,
    },
    SpecialCard {
        name: "Kingpin",
        value: 16,
        effect: SpecialEffect::EmpireBoost,
    },
    SpecialCard {
        name: "Bridge",
        value: 15,
        effect: SpecialEffect::Bridge,
    },
];

/// How ranks map to numeric values for a particular game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueScheme {
    /// Face value, J/Q/K = 11/12/13, Ace = the given high value (14 by default).
    AceHigh(u8),
    /// Face value, J/Q/K = 11/12/13, Ace = 1.
    AceLow,
    /// Face value, J/Q/K = 10, Ace = 11. Soft/hard adjustment happens at the
    /// hand level.
    Blackjack,
}

/// Default high value of an Ace.
pub const ACE_HIGH: u8 = 14;

/// A playing card.
///
/// A card's identity is its suit and rank; whether it currently lies face up
/// does not take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    /// For [`Suit::Special`] cards this indexes [`SPECIAL_CARDS`] (1-based).
    pub rank: u8,
    /// Whether the card is face up.
    pub face_up: bool,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Returns the special-card description, if this is a themed card.
    #[must_use]
    pub fn special(&self) -> Option<&'static SpecialCard> {
        if self.suit != Suit::Special || self.rank == 0 {
            return None;
        }
        SPECIAL_CARDS.get(usize::from(self.rank) - 1)
    }

    /// Returns whether this is a themed special card.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(self.suit, Suit::Special)
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        !self.is_special() && self.rank == 1
    }

    /// Numeric value of the card under the given scheme.
    #[must_use]
    pub fn value(&self, scheme: ValueScheme) -> u8 {
        if let Some(special) = self.special() {
            return special.value;
        }
        match (scheme, self.rank) {
            (ValueScheme::AceHigh(high), 1) => high,
            (ValueScheme::AceLow, 1) => 1,
            (ValueScheme::Blackjack, 1) => 11,
            (ValueScheme::Blackjack, 11..=13) => 10,
            (_, rank) => rank,
        }
    }

    /// Returns the card with its face orientation set.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    const fn rank_label(rank: u8) -> &'static str {
        match rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(special) = self.special() {
            return f.write_str(special.name);
        }
        write!(f, "{}{}", Self::rank_label(self.rank), self.suit.symbol())
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;
