//! The wallet/progression interface every engine debits and credits.

/// A player's bankroll and experience, as seen by the game engines.
///
/// Engines never hold on to a wallet between calls; it is passed to every
/// operation that may move resources or award experience.
pub trait Wallet {
    /// Returns whether `amount` can be spent right now.
    fn can_afford(&self, amount: usize) -> bool;

    /// Spends `amount`, tagged with `reason`.
    ///
    /// Returns `false` and leaves the balance untouched when funds are
    /// insufficient.
    fn spend_resources(&mut self, amount: usize, reason: &str) -> bool;

    /// Credits `amount`, tagged with `reason`.
    fn add_resources(&mut self, amount: usize, reason: &str);

    /// Awards experience points, tagged with `reason`.
    fn add_experience(&mut self, points: usize, reason: &str);
}

impl<W: Wallet + ?Sized> Wallet for &mut W {
    fn can_afford(&self, amount: usize) -> bool {
        (**self).can_afford(amount)
    }

    fn spend_resources(&mut self, amount: usize, reason: &str) -> bool {
        (**self).spend_resources(amount, reason)
    }

    fn add_resources(&mut self, amount: usize, reason: &str) {
        (**self).add_resources(amount, reason);
    }

    fn add_experience(&mut self, points: usize, reason: &str) {
        (**self).add_experience(points, reason);
    }
}
