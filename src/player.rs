//! In-memory player account with resources, experience, levels, titles and
//! achievements.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::wallet::Wallet;

/// Starting resources for a new player.
pub const STARTING_RESOURCES: usize = 1000;

/// Resources granted per level gained.
const LEVEL_UP_RESOURCES: usize = 200;
/// Reputation granted per level gained.
const LEVEL_UP_REPUTATION: usize = 10;
/// Experience granted by each achievement.
const ACHIEVEMENT_XP: usize = 100;
/// Resources granted by each achievement.
const ACHIEVEMENT_RESOURCES: usize = 200;

/// A title unlocked by reaching a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Title {
    /// Title name.
    pub name: &'static str,
    /// Level that unlocks it.
    pub level: usize,
    /// Short description.
    pub description: &'static str,
}

/// Titles in unlock order.
pub const TITLES: [Title; 6] = [
    Title {
        name: "Rising Star",
        level: 2,
        description: "Reached level 2",
    },
    Title {
        name: "Empire Builder",
        level: 5,
        description: "Reached level 5",
    },
    Title {
        name: "High Roller",
        level: 10,
        description: "Reached level 10",
    },
    Title {
        name: "Card Master",
        level: 15,
        description: "Mastered the cards",
    },
    Title {
        name: "Diamond Elite",
        level: 20,
        description: "Elite empire status",
    },
    Title {
        name: "Royalty",
        level: 25,
        description: "True royalty achieved",
    },
];

/// Achievements a player can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Achievement {
    /// Win a first game.
    FirstWin,
    /// Play 100 games.
    Veteran,
    /// Win 5 games in a row.
    HotStreak,
    /// Earn 10 000 resources in total.
    HighRoller,
}

impl Achievement {
    /// Every achievement, in check order.
    pub const ALL: [Self; 4] = [Self::FirstWin, Self::Veteran, Self::HotStreak, Self::HighRoller];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstWin => "First Victory",
            Self::Veteran => "Veteran Player",
            Self::HotStreak => "Hot Streak",
            Self::HighRoller => "High Roller",
        }
    }

    fn unlocked_by(self, stats: &PlayerStats) -> bool {
        match self {
            Self::FirstWin => stats.games_won >= 1,
            Self::Veteran => stats.games_played >= 100,
            Self::HotStreak => stats.win_streak >= 5,
            Self::HighRoller => stats.total_earnings >= 10_000,
        }
    }
}

/// Outcome of a finished game, as recorded on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player won.
    Won,
    /// The player lost.
    Lost,
    /// Neither side won.
    Draw,
}

/// Accumulated play statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerStats {
    /// Games finished.
    pub games_played: usize,
    /// Games won.
    pub games_won: usize,
    /// Total resources ever credited.
    pub total_earnings: usize,
    /// Current run of wins.
    pub win_streak: usize,
    /// Longest run of wins.
    pub best_win_streak: usize,
}

/// Result of a level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level before the change.
    pub old_level: usize,
    /// Level after the change.
    pub new_level: usize,
    /// Resources granted.
    pub resource_bonus: usize,
    /// Reputation granted.
    pub reputation_bonus: usize,
}

/// Computes the level reached with `experience` points:
/// `floor(sqrt(xp / 100)) + 1`.
#[must_use]
pub const fn level_for(experience: usize) -> usize {
    (experience / 100).isqrt() + 1
}

/// A player account held in memory for one session.
///
/// Engines only move resources and experience through [`Wallet`]. Game
/// records and the achievements they unlock are kept by
/// [`Player::record_game`], which the caller invokes once a blackjack round
/// settles, a high-low game is cashed out or lost, a draw game ends, or a
/// spin resolves.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    level: usize,
    experience: usize,
    resources: usize,
    reputation: usize,
    titles: Vec<Title>,
    achievements: Vec<Achievement>,
    stats: PlayerStats,
    last_level_up: Option<LevelUp>,
}

impl Player {
    /// Creates a level-1 player with [`STARTING_RESOURCES`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_resources(name, STARTING_RESOURCES)
    }

    /// Creates a level-1 player with the given resources.
    #[must_use]
    pub fn with_resources(name: impl Into<String>, resources: usize) -> Self {
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            resources,
            reputation: 0,
            titles: Vec::new(),
            achievements: Vec::new(),
            stats: PlayerStats::default(),
            last_level_up: None,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current level.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns total experience.
    #[must_use]
    pub const fn experience(&self) -> usize {
        self.experience
    }

    /// Returns the current resources.
    #[must_use]
    pub const fn resources(&self) -> usize {
        self.resources
    }

    /// Returns the current reputation.
    #[must_use]
    pub const fn reputation(&self) -> usize {
        self.reputation
    }

    /// Returns unlocked titles, oldest first.
    #[must_use]
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Returns the most recent title, or "Newcomer".
    #[must_use]
    pub fn current_title(&self) -> &'static str {
        self.titles.last().map_or("Newcomer", |t| t.name)
    }

    /// Returns unlocked achievements.
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Returns play statistics.
    #[must_use]
    pub const fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Returns the most recent level change, if any.
    #[must_use]
    pub const fn last_level_up(&self) -> Option<LevelUp> {
        self.last_level_up
    }

    /// Returns the most recent level change and clears it, so each level-up
    /// is reported once.
    pub const fn take_level_up(&mut self) -> Option<LevelUp> {
        self.last_level_up.take()
    }

    /// Win rate as a rounded percentage.
    #[must_use]
    pub const fn win_rate(&self) -> usize {
        if self.stats.games_played == 0 {
            return 0;
        }
        (self.stats.games_won * 100 + self.stats.games_played / 2) / self.stats.games_played
    }

    /// Adds reputation.
    pub fn add_reputation(&mut self, amount: usize, source: &str) {
        self.reputation += amount;
        tracing::debug!(player = %self.name, amount, source, "reputation gained");
    }

    /// Records a finished game, updating streaks and unlocking achievements.
    pub fn record_game(&mut self, outcome: GameOutcome) {
        self.stats.games_played += 1;
        match outcome {
            GameOutcome::Won => {
                self.stats.games_won += 1;
                self.stats.win_streak += 1;
                self.stats.best_win_streak = self.stats.best_win_streak.max(self.stats.win_streak);
            }
            GameOutcome::Lost => self.stats.win_streak = 0,
            GameOutcome::Draw => {}
        }
        self.check_achievements();
    }

    fn check_achievements(&mut self) {
        for achievement in Achievement::ALL {
            if !self.achievements.contains(&achievement) && achievement.unlocked_by(&self.stats) {
                self.achievements.push(achievement);
                tracing::info!(
                    player = %self.name,
                    achievement = achievement.name(),
                    "achievement unlocked"
                );
                self.add_experience(ACHIEVEMENT_XP, "achievement");
                self.add_resources(ACHIEVEMENT_RESOURCES, "achievement");
            }
        }
    }

    fn level_up(&mut self, new_level: usize) {
        let old_level = self.level;
        let gained = new_level - old_level;
        let resource_bonus = gained * LEVEL_UP_RESOURCES;
        let reputation_bonus = gained * LEVEL_UP_REPUTATION;

        self.level = new_level;
        self.resources += resource_bonus;
        self.reputation += reputation_bonus;

        for title in TITLES {
            if self.level >= title.level && !self.titles.iter().any(|t| t.name == title.name) {
                self.titles.push(title);
            }
        }

        self.last_level_up = Some(LevelUp {
            old_level,
            new_level,
            resource_bonus,
            reputation_bonus,
        });
        tracing::info!(player = %self.name, old_level, new_level, "level up");
    }
}

impl Wallet for Player {
    fn can_afford(&self, amount: usize) -> bool {
        self.resources >= amount
    }

    fn spend_resources(&mut self, amount: usize, reason: &str) -> bool {
        if self.resources < amount {
            tracing::debug!(
                player = %self.name,
                amount,
                have = self.resources,
                reason,
                "spend refused"
            );
            return false;
        }
        self.resources -= amount;
        tracing::debug!(
            player = %self.name,
            amount,
            remaining = self.resources,
            reason,
            "resources spent"
        );
        true
    }

    fn add_resources(&mut self, amount: usize, reason: &str) {
        self.resources += amount;
        self.stats.total_earnings += amount;
        tracing::debug!(
            player = %self.name,
            amount,
            total = self.resources,
            reason,
            "resources gained"
        );
    }

    fn add_experience(&mut self, points: usize, reason: &str) {
        self.experience += points;
        tracing::debug!(
            player = %self.name,
            points,
            total = self.experience,
            reason,
            "experience gained"
        );
        let new_level = level_for(self.experience);
        if new_level > self.level {
            self.level_up(new_level);
        }
    }
}
