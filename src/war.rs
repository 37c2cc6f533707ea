//! The two-player draw game: each round both players flip their top card and
//! the higher card takes both. Ties go to war.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::deck::{CardManager, DeckKind};
use crate::error::WarError;
use crate::options::WarOptions;
use crate::wallet::Wallet;

/// Number of players at the table.
pub const PLAYERS: usize = 2;

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WarState {
    /// Waiting for two players.
    #[default]
    Setup,
    /// Piles dealt, game not started.
    Ready,
    /// Rounds are being played.
    Playing,
    /// Play suspended.
    Paused,
    /// A winner has been decided.
    Finished,
}

/// What a logged event was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WarEventKind {
    /// Piles dealt.
    Setup,
    /// Game started.
    GameStart,
    /// A round was won.
    RoundWin,
    /// A war ended in another tie.
    WarChain,
    /// A player's discard pile became their draw pile.
    Reshuffle,
    /// The game ended.
    GameEnd,
}

/// An entry in the game log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WarEvent {
    /// Round the event happened in.
    pub round: usize,
    /// Event kind.
    pub kind: WarEventKind,
    /// Human-readable description.
    pub description: String,
}

/// One player's piles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WarPlayer {
    name: String,
    draw: Vec<Card>,
    discard: Vec<Card>,
}

impl WarPlayer {
    fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            draw: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the draw pile, top card last.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw
    }

    /// Returns the discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Cards held across both piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.discard.len()
    }
}

/// Rewards credited to a wallet at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rewards {
    /// Experience awarded.
    pub experience: usize,
    /// Resources credited.
    pub resources: usize,
}

/// End-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WarSummary {
    /// Winning seat (0 or 1).
    pub winner: usize,
    /// Winner's name.
    pub winner_name: String,
    /// Loser's name.
    pub loser_name: String,
    /// Rounds played.
    pub rounds: usize,
    /// Whether the round cap decided the game.
    pub capped: bool,
    /// What the winner received.
    pub winner_rewards: Rewards,
    /// What the loser received.
    pub loser_rewards: Rewards,
}

/// Result of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundOutcome {
    /// Round number.
    pub round: usize,
    /// The cards that opened the round, by seat.
    pub cards: [Card; PLAYERS],
    /// Seat that took the pot.
    pub winner: usize,
    /// Cards in the pot.
    pub cards_won: usize,
    /// Wars fought this round (0 when the first cards differed).
    pub wars: usize,
    /// Whether a player ran out of cards mid-war.
    pub exhausted: bool,
    /// Set when this round ended the game.
    pub summary: Option<WarSummary>,
}

/// Per-seat counts for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeatView {
    /// Player name.
    pub name: String,
    /// Cards in the draw pile.
    pub cards_in_draw: usize,
    /// Cards in the discard pile.
    pub cards_in_discard: usize,
    /// Cards held.
    pub total_cards: usize,
}

/// Everything a UI needs to render the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WarSnapshot {
    /// Engine state.
    pub state: WarState,
    /// Current round.
    pub round: usize,
    /// Seats, in order.
    pub players: Vec<SeatView>,
    /// Winning seat once finished.
    pub winner: Option<usize>,
    /// Events logged so far.
    pub events: usize,
}

/// The draw (war) engine.
///
/// # Example
///
/// ```
/// use parlor::{Player, War, WarOptions, WarState};
///
/// let mut game = War::new(WarOptions::default(), 11);
/// game.setup(&["Ana", "Bo"]).unwrap();
/// game.start().unwrap();
/// let mut ana = Player::new("Ana");
/// let mut bo = Player::new("Bo");
/// let summary = game.play_to_completion([&mut ana, &mut bo]).unwrap();
/// assert_eq!(game.state(), WarState::Finished);
/// assert!(summary.rounds >= 1);
/// ```
#[derive(Debug, Clone)]
pub struct War {
    options: WarOptions,
    cards: CardManager,
    state: WarState,
    players: Vec<WarPlayer>,
    round: usize,
    winner: Option<usize>,
    summary: Option<WarSummary>,
    events: Vec<WarEvent>,
}

impl War {
    /// Creates an engine waiting for players.
    #[must_use]
    pub fn new(options: WarOptions, seed: u64) -> Self {
        Self {
            options,
            cards: CardManager::new(seed),
            state: WarState::Setup,
            players: Vec::new(),
            round: 0,
            winner: None,
            summary: None,
            events: Vec::new(),
        }
    }

    /// Seats two players and deals each half of a fresh deck.
    ///
    /// # Errors
    ///
    /// Returns [`WarError::PlayerCount`] unless exactly two names are given.
    pub fn setup(&mut self, names: &[&str]) -> Result<(), WarError> {
        if names.len() != PLAYERS {
            tracing::error!(players = names.len(), "draw game requires exactly 2 players");
            return Err(WarError::PlayerCount(names.len()));
        }

        self.clear();
        self.cards.initialize_deck(DeckKind::Draw);
        let half = self.cards.remaining() / PLAYERS;
        for name in names {
            let mut player = WarPlayer::new(name);
            player.draw = self.cards.deal(half, false);
            player.draw.reverse();
            self.players.push(player);
        }

        self.state = WarState::Ready;
        self.log(WarEventKind::Setup, "Game setup complete".into());
        tracing::info!(p1 = names[0], p2 = names[1], cards = half, "draw game set up");
        Ok(())
    }

    /// Replaces both players' piles; each slice lists cards in the order
    /// they will be drawn. Discard piles are emptied.
    ///
    /// # Errors
    ///
    /// Returns an error if the players have not been set up.
    pub fn arrange_piles(&mut self, first: &[Card], second: &[Card]) -> Result<(), WarError> {
        if self.players.len() != PLAYERS {
            return Err(WarError::InvalidState);
        }
        for (player, pile) in self.players.iter_mut().zip([first, second]) {
            player.draw = pile.iter().rev().copied().collect();
            player.discard.clear();
        }
        Ok(())
    }

    /// Starts play.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is ready.
    pub fn start(&mut self) -> Result<(), WarError> {
        if self.state != WarState::Ready {
            return Err(WarError::InvalidState);
        }
        self.state = WarState::Playing;
        self.round = 1;
        self.log(WarEventKind::GameStart, "Game started".into());
        Ok(())
    }

    /// Suspends play.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is being played.
    pub fn pause(&mut self) -> Result<(), WarError> {
        if self.state != WarState::Playing {
            return Err(WarError::InvalidState);
        }
        self.state = WarState::Paused;
        Ok(())
    }

    /// Resumes a paused game.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is paused.
    pub fn resume(&mut self) -> Result<(), WarError> {
        if self.state != WarState::Paused {
            return Err(WarError::InvalidState);
        }
        self.state = WarState::Playing;
        Ok(())
    }

    /// Plays one round, going to war on ties until one side wins the pot.
    ///
    /// When the round ends the game, rewards are credited to the wallets,
    /// given in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is being played.
    pub fn play_round<W: Wallet + ?Sized>(
        &mut self,
        wallets: [&mut W; PLAYERS],
    ) -> Result<RoundOutcome, WarError> {
        if self.state != WarState::Playing || self.players.len() != PLAYERS {
            return Err(WarError::InvalidState);
        }
        if self.players.iter().any(|p| p.total() == 0) {
            return Err(WarError::InvalidState);
        }

        let (Some(first), Some(second)) = (self.draw(0), self.draw(1)) else {
            return Err(WarError::InvalidState);
        };

        let mut pot = alloc::vec![first, second];
        let mut faced = [first, second];
        let mut wars = 0;
        let mut exhausted = false;

        let winner = loop {
            match self.cards.compare(&faced[0], &faced[1], false) {
                Ordering::Greater => break 0,
                Ordering::Less => break 1,
                Ordering::Equal => {}
            }

            wars += 1;
            if wars > 1 {
                self.log(WarEventKind::WarChain, "Multiple wars in one round".into());
            }
            tracing::debug!(round = self.round, wars, card = %faced[0], "war");

            if let Some(seat) = self.lay_down(&mut pot) {
                exhausted = true;
                break seat;
            }

            let (a, b) = (self.draw(0), self.draw(1));
            pot.extend(a.into_iter().chain(b));
            match (a, b) {
                (Some(a), Some(b)) => faced = [a.with_face_up(true), b.with_face_up(true)],
                (a, _) => {
                    exhausted = true;
                    break usize::from(a.is_none());
                }
            }
        };

        let cards_won = pot.len();
        self.players[winner].discard.extend(pot);
        let description = format!("{} won round {}", self.players[winner].name, self.round);
        self.log(WarEventKind::RoundWin, description);

        let summary = self.check_game_over(wallets);
        let outcome = RoundOutcome {
            round: self.round,
            cards: [first, second],
            winner,
            cards_won,
            wars,
            exhausted,
            summary,
        };
        if self.state == WarState::Playing {
            self.round += 1;
        }
        Ok(outcome)
    }

    /// Plays rounds until the game ends.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is being played.
    pub fn play_to_completion<W: Wallet + ?Sized>(
        &mut self,
        wallets: [&mut W; PLAYERS],
    ) -> Result<WarSummary, WarError> {
        let [first, second] = wallets;
        loop {
            let outcome = self.play_round([&mut *first, &mut *second])?;
            if let Some(summary) = outcome.summary {
                return Ok(summary);
            }
        }
    }

    /// Lays each player's face-down war cards into the pot. Returns the seat
    /// that wins by default if a player runs dry.
    fn lay_down(&mut self, pot: &mut Vec<Card>) -> Option<usize> {
        for _ in 0..self.options.war_face_down {
            let (a, b) = (self.draw(0), self.draw(1));
            pot.extend(a.into_iter().chain(b));
            if a.is_none() || b.is_none() {
                return Some(usize::from(a.is_none()));
            }
        }
        None
    }

    /// Draws a player's top card, turning the discard pile over first if the
    /// draw pile is empty.
    fn draw(&mut self, seat: usize) -> Option<Card> {
        if self.players[seat].draw.is_empty() {
            if self.players[seat].discard.is_empty() {
                return None;
            }
            let mut pile = core::mem::take(&mut self.players[seat].discard);
            self.cards.shuffle_pile(&mut pile);
            self.players[seat].draw = pile;
            let description = format!("{} reshuffled cards", self.players[seat].name);
            self.log(WarEventKind::Reshuffle, description);
        }
        self.players[seat].draw.pop().map(|c| c.with_face_up(true))
    }

    fn check_game_over<W: Wallet + ?Sized>(
        &mut self,
        wallets: [&mut W; PLAYERS],
    ) -> Option<WarSummary> {
        let all_cards = self.players.iter().map(WarPlayer::total).sum::<usize>();
        let (first, second) = (self.players[0].total(), self.players[1].total());

        let (winner, capped) = if first == all_cards || second == 0 {
            (0, false)
        } else if second == all_cards || first == 0 {
            (1, false)
        } else if self.round >= self.options.max_rounds {
            (usize::from(first <= second), true)
        } else {
            return None;
        };

        Some(self.end_game(winner, capped, wallets))
    }

    fn end_game<W: Wallet + ?Sized>(
        &mut self,
        winner: usize,
        capped: bool,
        wallets: [&mut W; PLAYERS],
    ) -> WarSummary {
        self.state = WarState::Finished;
        self.winner = Some(winner);
        let loser = 1 - winner;
        let rounds = self.round;

        let winner_rewards = Rewards {
            experience: 100 + rounds.min(200),
            resources: 500 + rounds * 2,
        };
        let loser_rewards = Rewards {
            experience: 25 + rounds.min(50),
            resources: 0,
        };

        let [first, second] = wallets;
        let (winning, losing) = if winner == 0 {
            (first, second)
        } else {
            (second, first)
        };
        winning.add_experience(winner_rewards.experience, "draw_game");
        winning.add_resources(winner_rewards.resources, "game_win");
        losing.add_experience(loser_rewards.experience, "draw_game");

        let summary = WarSummary {
            winner,
            winner_name: self.players[winner].name.clone(),
            loser_name: self.players[loser].name.clone(),
            rounds,
            capped,
            winner_rewards,
            loser_rewards,
        };

        let description = format!("{} won the game", summary.winner_name);
        self.log(WarEventKind::GameEnd, description);
        tracing::info!(winner = %summary.winner_name, rounds, capped, "draw game over");

        self.summary = Some(summary.clone());
        summary
    }

    fn log(&mut self, kind: WarEventKind, description: String) {
        self.events.push(WarEvent {
            round: self.round,
            kind,
            description,
        });
    }

    fn clear(&mut self) {
        self.players.clear();
        self.round = 0;
        self.winner = None;
        self.summary = None;
        self.events.clear();
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> WarState {
        self.state
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[WarPlayer] {
        &self.players
    }

    /// Returns the winning seat once the game has ended.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns the end-of-game summary.
    #[must_use]
    pub const fn summary(&self) -> Option<&WarSummary> {
        self.summary.as_ref()
    }

    /// Returns the event log.
    #[must_use]
    pub fn events(&self) -> &[WarEvent] {
        &self.events
    }

    /// Returns the card manager that deals the piles.
    #[must_use]
    pub const fn cards(&self) -> &CardManager {
        &self.cards
    }

    /// Returns a snapshot of the game.
    #[must_use]
    pub fn snapshot(&self) -> WarSnapshot {
        WarSnapshot {
            state: self.state,
            round: self.round,
            players: self
                .players
                .iter()
                .map(|p| SeatView {
                    name: p.name.clone(),
                    cards_in_draw: p.draw.len(),
                    cards_in_discard: p.discard.len(),
                    total_cards: p.total(),
                })
                .collect(),
            winner: self.winner,
            events: self.events.len(),
        }
    }

    /// Clears the table back to [`WarState::Setup`].
    pub fn reset_game(&mut self) {
        self.clear();
        self.cards.reset();
        self.state = WarState::Setup;
        tracing::debug!("draw game reset");
    }
}
