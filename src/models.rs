//! Domain models passed between the loader, the roster, and the console view.
//! These stay light-weight data holders; ordering rules live next to them so
//! every layer sorts players the same way.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named entry on the scoreboard. Players carry no identity beyond their
/// position in the roster, so duplicates are allowed.
pub struct Player {
    /// Display name. Comparisons are case-sensitive and ordinal.
    pub name: String,
    /// Score of any sign.
    pub score: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for Player {
    /// Write the `<name> with a score of <score>` line used by the listings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with a score of {}", self.name, self.score)
    }
}

/// The three orders the sort submenu offers. Discriminants match the digits
/// shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayerOrder {
    ByScore = 1,
    ByName = 2,
    ByNameReverse = 3,
}

impl PlayerOrder {
    pub const ALL: [PlayerOrder; 3] = [
        PlayerOrder::ByScore,
        PlayerOrder::ByName,
        PlayerOrder::ByNameReverse,
    ];

    /// Menu label for the order.
    pub fn label(self) -> &'static str {
        match self {
            PlayerOrder::ByScore => "Order by score",
            PlayerOrder::ByName => "Order by name",
            PlayerOrder::ByNameReverse => "Order by name (reverse)",
        }
    }

    /// Comparator selected by this order. Feed it to a stable sort.
    pub fn comparator(self) -> fn(&Player, &Player) -> Ordering {
        match self {
            PlayerOrder::ByScore => compare_by_score,
            PlayerOrder::ByName => compare_by_name,
            PlayerOrder::ByNameReverse => compare_by_name_reverse,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown player order `{0}`")]
pub struct UnknownOrder(pub String);

impl FromStr for PlayerOrder {
    type Err = UnknownOrder;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        PlayerOrder::ALL
            .into_iter()
            .find(|order| trimmed.parse::<u8>().ok() == Some(*order as u8))
            .ok_or_else(|| UnknownOrder(trimmed.to_string()))
    }
}

/// Ascending by score.
pub fn compare_by_score(a: &Player, b: &Player) -> Ordering {
    a.score.cmp(&b.score)
}

/// Ascending by name, comparing code points.
pub fn compare_by_name(a: &Player, b: &Player) -> Ordering {
    a.name.cmp(&b.name)
}

/// Descending by name.
pub fn compare_by_name_reverse(a: &Player, b: &Player) -> Ordering {
    compare_by_name(a, b).reverse()
}
