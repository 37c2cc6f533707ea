//! Reel symbols and the default symbol table.

use core::fmt;

/// A reel symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Cash money.
    Cash,
    /// Gold chain.
    Gold,
    /// Luxury ride.
    Car,
    /// Diamond.
    Diamond,
    /// Empire crown.
    Crown,
    /// The kingpin.
    Kingpin,
    /// The heiress.
    Heiress,
    /// Matches any symbol on a payline.
    Wild,
    /// Pays anywhere on the grid.
    Scatter,
    /// Five anywhere win the progressive jackpot.
    Jackpot,
}

/// Table entry describing a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolInfo {
    /// The symbol.
    pub symbol: Symbol,
    /// Glyph shown on the reels.
    pub glyph: &'static str,
    /// Line value per unit bet for three of a kind.
    pub value: usize,
    /// Relative selection weight.
    pub weight: u32,
    /// Short description.
    pub description: &'static str,
}

/// Default symbol table, most common first.
pub const SYMBOLS: [SymbolInfo; 10] = [
    SymbolInfo {
        symbol: Symbol::Cash,
        glyph: "💵",
        value: 2,
        weight: 25,
        description: "Cash Money",
    },
    SymbolInfo {
        symbol: Symbol::Gold,
        glyph: "🥇",
        value: 3,
        weight: 20,
        description: "Gold Chain",
    },
    SymbolInfo {
        symbol: Symbol::Car,
        glyph: "🚗",
        value: 4,
        weight: 15,
        description: "Luxury Ride",
    },
    SymbolInfo {
        symbol: Symbol::Diamond,
        glyph: "💎",
        value: 8,
        weight: 12,
        description: "Diamond",
    },
    SymbolInfo {
        symbol: Symbol::Crown,
        glyph: "👑",
        value: 10,
        weight: 10,
        description: "Empire Crown",
    },
    SymbolInfo {
        symbol: Symbol::Kingpin,
        glyph: "🤴",
        value: 20,
        weight: 8,
        description: "Kingpin",
    },
    SymbolInfo {
        symbol: Symbol::Heiress,
        glyph: "💃",
        value: 25,
        weight: 6,
        description: "Heiress",
    },
    SymbolInfo {
        symbol: Symbol::Wild,
        glyph: "🌟",
        value: 0,
        weight: 3,
        description: "Wild Card",
    },
    SymbolInfo {
        symbol: Symbol::Scatter,
        glyph: "🎰",
        value: 0,
        weight: 2,
        description: "Scatter Bonus",
    },
    SymbolInfo {
        symbol: Symbol::Jackpot,
        glyph: "💰",
        value: 0,
        weight: 1,
        description: "Jackpot Symbol",
    },
];

impl Symbol {
    /// Looks the symbol up in `table`.
    #[must_use]
    pub fn info(self, table: &[SymbolInfo]) -> Option<&SymbolInfo> {
        table.iter().find(|s| s.symbol == self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.info(&SYMBOLS).map_or("?", |s| s.glyph);
        f.write_str(glyph)
    }
}
