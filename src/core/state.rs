//! Match state: the aggregate the presentation layer renders and the rules
//! module advances.
//!
//! ## GameState
//!
//! The full state of one match:
//! - grid size and the ownership of every line and box
//! - the roster in turn order, with running scores
//! - the active seat, the game-over flag, and the final outcome
//! - an append-only log of human-readable move descriptions
//!
//! Uses `im` persistent collections so cloning a state is O(1); the rules
//! module returns fresh states rather than mutating in place, and AI playouts
//! snapshot freely.
//!
//! Serialized form is lossless: a round-trip decode reconstructs an equal
//! state. Lines and boxes come out as maps keyed by their `h-r-c` / `v-r-c` /
//! `b-r-c` text ids.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::grid::{BoxId, LineId};
use super::player::{Player, PlayerId};

/// One drawable segment. Ownership is a one-way transition: unowned, then
/// owned by the player who drew it, never changed afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub owner: Option<PlayerId>,
}

/// One unit cell. Owned by whichever player drew its fourth side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCell {
    pub owner: Option<PlayerId>,
}

/// Final result of a match, set exactly once when the last line is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// One player holds the strictly highest score.
    Winner(PlayerId),
    /// Two or more players share the highest score; no single winner.
    Tie(Vec<PlayerId>),
}

impl GameOutcome {
    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameOutcome::Winner(p) => *p == player,
            GameOutcome::Tie(_) => false,
        }
    }
}

/// Full state of one match.
///
/// Fields are private; the rules module is the only writer. Readers use the
/// accessors, which never expose a way to mutate ownership out of order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    size: usize,
    lines: ImHashMap<LineId, Line>,
    boxes: ImHashMap<BoxId, BoxCell>,
    /// Turn order is roster order.
    players: Vec<Player>,
    active_player_index: usize,
    is_game_over: bool,
    outcome: Option<GameOutcome>,
    history: Vector<String>,
}

impl GameState {
    /// Build a fresh state: every line and box unowned, seat 0 active,
    /// scores zeroed (a roster reused from a finished match starts clean).
    ///
    /// Parameter validation lives in [`crate::engine::initialize`]; this
    /// constructor assumes it already happened.
    pub(crate) fn new(size: usize, mut players: Vec<Player>) -> Self {
        for player in &mut players {
            player.score = 0;
        }

        let lines = LineId::all(size).map(|id| (id, Line::default())).collect();
        let boxes = BoxId::all(size).map(|id| (id, BoxCell::default())).collect();

        Self {
            size,
            lines,
            boxes,
            players,
            active_player_index: 0,
            is_game_over: false,
            outcome: None,
            history: Vector::new(),
        }
    }

    // === Board ===

    /// Grid dimension: boxes per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Owner of a line, or `None` if undrawn or out of bounds.
    #[must_use]
    pub fn line_owner(&self, id: LineId) -> Option<PlayerId> {
        self.lines.get(&id).and_then(|line| line.owner)
    }

    /// Owner of a box, or `None` if unclaimed or out of bounds.
    #[must_use]
    pub fn box_owner(&self, id: BoxId) -> Option<PlayerId> {
        self.boxes.get(&id).and_then(|b| b.owner)
    }

    /// Every line on the board with its ownership.
    #[must_use]
    pub fn lines(&self) -> &ImHashMap<LineId, Line> {
        &self.lines
    }

    /// Every box on the board with its ownership.
    #[must_use]
    pub fn boxes(&self) -> &ImHashMap<BoxId, BoxCell> {
        &self.boxes
    }

    /// How many of a box's four bounding lines are drawn.
    #[must_use]
    pub fn sides_drawn(&self, id: BoxId) -> u8 {
        id.bounding_lines()
            .iter()
            .filter(|line| self.line_owner(**line).is_some())
            .count() as u8
    }

    /// Undrawn lines, in the stable enumeration order of [`LineId::all`].
    pub fn undrawn_lines(&self) -> impl Iterator<Item = LineId> + '_ {
        LineId::all(self.size).filter(move |id| self.line_owner(*id).is_none())
    }

    /// True once every line on the board is drawn.
    #[must_use]
    pub fn all_lines_drawn(&self) -> bool {
        self.lines.values().all(|line| line.owner.is_some())
    }

    /// Count of owned boxes. Always equals the sum of player scores.
    #[must_use]
    pub fn owned_box_count(&self) -> usize {
        self.boxes.values().filter(|b| b.owner.is_some()).count()
    }

    // === Roster ===

    /// The roster in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a seat by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Index of the seat whose move is awaited.
    #[must_use]
    pub fn active_player_index(&self) -> usize {
        self.active_player_index
    }

    /// The seat whose move is awaited.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_player_index]
    }

    /// Sum of all scores.
    #[must_use]
    pub fn score_total(&self) -> u32 {
        self.players.iter().map(|p| p.score).sum()
    }

    // === Progress ===

    /// True once the last line is drawn. Monotonic.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Final outcome; `None` while the match is live.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Append-only log of move descriptions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<String> {
        &self.history
    }

    // === Mutation (rules module only) ===

    pub(crate) fn draw_line(&mut self, id: LineId, owner: PlayerId) {
        debug_assert!(self.line_owner(id).is_none(), "line {id} already drawn");
        self.lines.insert(id, Line { owner: Some(owner) });
    }

    /// Assign a box and bump its owner's score.
    pub(crate) fn claim_box(&mut self, id: BoxId, owner: PlayerId) {
        debug_assert!(self.box_owner(id).is_none(), "box {id} already claimed");
        self.boxes.insert(id, BoxCell { owner: Some(owner) });
        if let Some(player) = self.players.iter_mut().find(|p| p.id == owner) {
            player.score += 1;
        }
    }

    pub(crate) fn advance_turn(&mut self) {
        debug_assert!(!self.is_game_over, "turn advanced after game over");
        self.active_player_index = (self.active_player_index + 1) % self.players.len();
    }

    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        debug_assert!(!self.is_game_over, "match finished twice");
        self.is_game_over = true;
        self.outcome = Some(outcome);
    }

    pub(crate) fn push_history(&mut self, entry: String) {
        self.history.push_back(entry);
    }

    // === Snapshots ===

    /// Encode the full state for transmission or resume.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a state produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
