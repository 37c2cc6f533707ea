//! Deck lifecycle: building, shuffling, dealing, discarding and reshuffling.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{ACE_HIGH, Card, DECK_SIZE, SPECIAL_CARDS, Suit, ValueScheme};

/// Which deck to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeckKind {
    /// The 52-card standard deck.
    #[default]
    Standard,
    /// The deck used by the draw (war) game. Currently identical to
    /// [`DeckKind::Standard`].
    Draw,
    /// Standard deck plus the themed [`SPECIAL_CARDS`].
    Themed,
}

impl DeckKind {
    /// Number of cards a fresh deck of this kind holds.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Standard | Self::Draw => DECK_SIZE,
            Self::Themed => DECK_SIZE + SPECIAL_CARDS.len(),
        }
    }
}

/// Passes applied when a fresh deck is initialized.
const INITIAL_SHUFFLES: usize = 3;
/// Passes applied when the discard pile is folded back into the deck.
const RESHUFFLE_PASSES: usize = 2;

/// Snapshot of deck bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeckStats {
    /// Cards left in the live deck.
    pub cards_in_deck: usize,
    /// Cards in the discard pile.
    pub cards_in_discard: usize,
    /// Shuffle passes performed over the manager's lifetime.
    pub total_shuffles: u64,
    /// The next card to be dealt, if any.
    pub top_card: Option<Card>,
}

/// Builds a 52-card standard deck in suit-major, Ace-to-King order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

fn build_deck(kind: DeckKind) -> Vec<Card> {
    let mut cards = standard_deck();
    if kind == DeckKind::Themed {
        for rank in 1..=SPECIAL_CARDS.len() {
            cards.push(Card::new(Suit::Special, rank as u8));
        }
    }
    cards
}

/// Owns one shuffled deck, its discard pile, and the engine's random source.
///
/// Cards are dealt from the end of the internal vector (the "top").
#[derive(Debug, Clone)]
pub struct CardManager {
    deck: Vec<Card>,
    discard: Vec<Card>,
    kind: DeckKind,
    shuffle_count: u64,
    ace_high: u8,
    rng: ChaCha8Rng,
}

impl CardManager {
    /// Creates a manager with an empty deck and the given seed.
    ///
    /// Call [`CardManager::initialize_deck`] before dealing.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Vec::new(),
            discard: Vec::new(),
            kind: DeckKind::Standard,
            shuffle_count: 0,
            ace_high: ACE_HIGH,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sets the value an Ace takes in high comparisons.
    #[must_use]
    pub const fn with_ace_high(mut self, value: u8) -> Self {
        self.ace_high = value;
        self
    }

    /// Builds a fresh deck of the given kind, shuffles it three times and
    /// clears the discard pile.
    pub fn initialize_deck(&mut self, kind: DeckKind) {
        self.deck = build_deck(kind);
        self.kind = kind;
        self.discard.clear();
        self.shuffle(INITIAL_SHUFFLES);
        tracing::debug!(?kind, cards = self.deck.len(), "deck initialized");
    }

    /// Re-initializes the deck with the kind it was last built with.
    pub fn reinitialize(&mut self) {
        self.initialize_deck(self.kind);
    }

    /// Shuffles the live deck in place, `times` independent Fisher-Yates passes.
    pub fn shuffle(&mut self, times: usize) {
        for _ in 0..times {
            self.deck.shuffle(&mut self.rng);
            self.shuffle_count += 1;
        }
        tracing::trace!(times, total = self.shuffle_count, "deck shuffled");
    }

    /// Deals `count` cards from the top of the deck.
    ///
    /// If fewer than `count` cards remain, nothing is dealt and the result is
    /// empty; callers must check.
    pub fn deal(&mut self, count: usize, face_up: bool) -> Vec<Card> {
        if count > self.deck.len() {
            tracing::warn!(
                requested = count,
                available = self.deck.len(),
                "not enough cards in deck"
            );
            return Vec::new();
        }

        let split = self.deck.len() - count;
        let mut dealt = self.deck.split_off(split);
        dealt.reverse();
        for card in &mut dealt {
            card.face_up = face_up;
        }
        dealt
    }

    /// Deals a single card, or `None` if the deck is empty.
    pub fn deal_one(&mut self, face_up: bool) -> Option<Card> {
        self.deck.pop().map(|card| card.with_face_up(face_up))
    }

    /// Adds cards to the discard pile.
    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discard.extend(cards);
    }

    /// Moves the discard pile back into the deck (face down) and shuffles twice.
    ///
    /// An empty discard pile is a no-op.
    pub fn reshuffle_discard_into_deck(&mut self) {
        if self.discard.is_empty() {
            tracing::warn!("no cards in discard pile to reshuffle");
            return;
        }

        let returned = self.discard.len();
        self.deck
            .extend(self.discard.drain(..).map(|card| card.with_face_up(false)));
        self.shuffle(RESHUFFLE_PASSES);
        tracing::debug!(returned, cards = self.deck.len(), "discard pile reshuffled");
    }

    /// Compares two cards by value. With `ace_low`, Aces count as 1;
    /// otherwise they take the configured high value.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card, ace_low: bool) -> Ordering {
        let scheme = if ace_low {
            ValueScheme::AceLow
        } else {
            ValueScheme::AceHigh(self.ace_high)
        };
        a.value(scheme).cmp(&b.value(scheme))
    }

    /// Returns whether two cards share a rank.
    #[must_use]
    pub fn cards_match(a: &Card, b: &Card) -> bool {
        a.rank == b.rank && a.is_special() == b.is_special()
    }

    /// Returns whether two cards share a suit.
    #[must_use]
    pub fn same_suit(a: &Card, b: &Card) -> bool {
        a.suit == b.suit
    }

    /// Flips a card over.
    pub const fn flip(card: &mut Card) {
        card.face_up = !card.face_up;
    }

    /// Returns whether fewer than `threshold` cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.deck.len() < threshold
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the kind of deck last initialized.
    #[must_use]
    pub const fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Returns the number of shuffle passes performed.
    #[must_use]
    pub const fn shuffle_count(&self) -> u64 {
        self.shuffle_count
    }

    /// Returns deck bookkeeping.
    #[must_use]
    pub fn stats(&self) -> DeckStats {
        DeckStats {
            cards_in_deck: self.deck.len(),
            cards_in_discard: self.discard.len(),
            total_shuffles: self.shuffle_count,
            top_card: self.deck.last().copied(),
        }
    }

    /// Replaces the live deck so that `draws` come off the top in order.
    ///
    /// The discard pile is cleared. Intended for replays and tests.
    pub fn stack(&mut self, draws: &[Card]) {
        self.deck = draws.iter().rev().map(|c| c.with_face_up(false)).collect();
        self.discard.clear();
    }

    /// Empties the deck and discard pile. The shuffle counter keeps counting.
    pub fn reset(&mut self) {
        self.deck.clear();
        self.discard.clear();
    }

    /// Shuffles an arbitrary pile with this manager's random source.
    pub fn shuffle_pile(&mut self, pile: &mut [Card]) {
        pile.shuffle(&mut self.rng);
    }

    pub(crate) const fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}
