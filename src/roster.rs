//! The in-memory player list. The roster is the only owner of the players;
//! everything else sees them through shared borrows.

use tracing::debug;

use crate::models::{Player, PlayerOrder};

/// Ordered, mutable list of players. Order is insertion order until the
/// first sort, then whatever the most recent sort produced.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Wrap an existing list, keeping its order.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Append a player at the end, keeping the current order of the rest.
    pub fn insert(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Every player in the current order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Lazily yield the players whose score is strictly greater than
    /// `threshold`, in roster order.
    pub fn above(&self, threshold: i64) -> impl Iterator<Item = &Player> + '_ {
        self.players
            .iter()
            .filter(move |player| player.score > threshold)
    }

    /// Reorder the roster in place. The sort is stable, so ties keep their
    /// relative position.
    pub fn sort(&mut self, order: PlayerOrder) {
        self.players.sort_by(order.comparator());
        debug!(?order, players = self.players.len(), "roster sorted");
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}
