//! Player identification and roster records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, stable and unique within a match.
//!
//! ## Player
//!
//! One seat in the match roster: display attributes the engine treats as
//! opaque, a running score (count of owned boxes), and a flag marking
//! computer-controlled seats.

use serde::{Deserialize, Serialize};

/// Fewest seats a match can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a match can start with.
pub const MAX_PLAYERS: usize = 4;

/// Player identifier.
///
/// Seat indices are 0-based: the first seat in turn order is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` seats.
    ///
    /// ```
    /// use boxlink::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// AI strength tier. Scales the move-selection search budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// One seat in the match roster.
///
/// `name`, `avatar`, and `color` are opaque to the engine; the presentation
/// layer interprets them. `score` counts boxes owned and is maintained by the
/// engine, never by callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar: String,
    pub color: String,
    pub score: u32,
    pub is_ai: bool,
    /// Strength tier for computer seats. `None` for humans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Player {
    /// A human seat.
    #[must_use]
    pub fn human(
        id: PlayerId,
        name: impl Into<String>,
        avatar: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
            color: color.into(),
            score: 0,
            is_ai: false,
            difficulty: None,
        }
    }

    /// A computer-controlled seat.
    #[must_use]
    pub fn bot(
        id: PlayerId,
        name: impl Into<String>,
        avatar: impl Into<String>,
        color: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
            color: color.into(),
            score: 0,
            is_ai: true,
            difficulty: Some(difficulty),
        }
    }
}
