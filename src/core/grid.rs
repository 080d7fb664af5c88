//! Grid geometry: line and box coordinates.
//!
//! A board of `size` boxes per side has `size + 1` rows and columns of dots.
//! Lines sit between adjacent dots:
//! - horizontal line `(r, c)`: valid for `0 <= r <= size`, `0 <= c < size`
//! - vertical line `(r, c)`: valid for `0 <= r < size`, `0 <= c <= size`
//!
//! A box `(r, c)` (`0 <= r < size`, `0 <= c < size`) is bounded by exactly
//! four lines: top `h(r, c)`, bottom `h(r+1, c)`, left `v(r, c)`, right
//! `v(r, c+1)`. Interior lines border two boxes, edge lines border one.
//!
//! Ids have a stable text form - `h-{r}-{c}`, `v-{r}-{c}`, `b-{r}-{c}` - which
//! is also their serialized representation, so line and box maps keyed by id
//! come out of JSON as plain string-keyed objects for the presentation layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Grid sizes offered by match setup. The engine itself accepts any size >= 1.
pub const SUPPORTED_SIZES: [usize; 4] = [3, 5, 7, 10];

/// Orientation of a line segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Identifier of one drawable line segment.
///
/// ```
/// use boxlink::core::LineId;
///
/// let line = LineId::horizontal(0, 1);
/// assert_eq!(line.to_string(), "h-0-1");
/// assert_eq!("h-0-1".parse::<LineId>().unwrap(), line);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId {
    pub orientation: Orientation,
    pub row: u16,
    pub col: u16,
}

impl LineId {
    /// Horizontal line at dot-row `row`, spanning box-column `col`.
    #[must_use]
    pub const fn horizontal(row: u16, col: u16) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    /// Vertical line at box-row `row`, along dot-column `col`.
    #[must_use]
    pub const fn vertical(row: u16, col: u16) -> Self {
        Self {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }

    /// Check this id against the bounds of a `size`-by-`size` board.
    #[must_use]
    pub fn in_bounds(self, size: usize) -> bool {
        let (row, col) = (self.row as usize, self.col as usize);
        match self.orientation {
            Orientation::Horizontal => row <= size && col < size,
            Orientation::Vertical => row < size && col <= size,
        }
    }

    /// The boxes this line borders: two for interior lines, one on the edge.
    #[must_use]
    pub fn adjacent_boxes(self, size: usize) -> SmallVec<[BoxId; 2]> {
        let mut boxes = SmallVec::new();
        let (row, col) = (self.row, self.col);

        match self.orientation {
            Orientation::Horizontal => {
                // Box above, box below.
                if row > 0 {
                    boxes.push(BoxId::new(row - 1, col));
                }
                if (row as usize) < size {
                    boxes.push(BoxId::new(row, col));
                }
            }
            Orientation::Vertical => {
                // Box to the left, box to the right.
                if col > 0 {
                    boxes.push(BoxId::new(row, col - 1));
                }
                if (col as usize) < size {
                    boxes.push(BoxId::new(row, col));
                }
            }
        }

        boxes
    }

    /// Enumerate every line of a `size`-by-`size` board in a stable order:
    /// horizontals row-major, then verticals row-major.
    pub fn all(size: usize) -> impl Iterator<Item = LineId> {
        let horizontals = (0..=size as u16)
            .flat_map(move |r| (0..size as u16).map(move |c| LineId::horizontal(r, c)));
        let verticals = (0..size as u16)
            .flat_map(move |r| (0..=size as u16).map(move |c| LineId::vertical(r, c)));
        horizontals.chain(verticals)
    }

    /// Total line count for a board: `2 * size * (size + 1)`.
    #[must_use]
    pub const fn count(size: usize) -> usize {
        2 * size * (size + 1)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{}-{}-{}", tag, self.row, self.col)
    }
}

/// Error parsing a line or box id from its text form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed id {0:?}")]
pub struct ParseIdError(pub String);

fn split_id(s: &str) -> Option<(char, u16, u16)> {
    let mut parts = s.split('-');
    let tag = parts.next()?;
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() || tag.len() != 1 {
        return None;
    }
    Some((tag.chars().next()?, row, col))
}

impl FromStr for LineId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_id(s) {
            Some(('h', row, col)) => Ok(LineId::horizontal(row, col)),
            Some(('v', row, col)) => Ok(LineId::vertical(row, col)),
            _ => Err(ParseIdError(s.to_string())),
        }
    }
}

impl TryFrom<String> for LineId {
    type Error = ParseIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> String {
        id.to_string()
    }
}

/// Identifier of one unit cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoxId {
    pub row: u16,
    pub col: u16,
}

impl BoxId {
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Check this id against the bounds of a `size`-by-`size` board.
    #[must_use]
    pub fn in_bounds(self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }

    /// The four lines bounding this box: top, bottom, left, right.
    #[must_use]
    pub const fn bounding_lines(self) -> [LineId; 4] {
        [
            LineId::horizontal(self.row, self.col),
            LineId::horizontal(self.row + 1, self.col),
            LineId::vertical(self.row, self.col),
            LineId::vertical(self.row, self.col + 1),
        ]
    }

    /// Enumerate every box of a `size`-by-`size` board, row-major.
    pub fn all(size: usize) -> impl Iterator<Item = BoxId> {
        (0..size as u16).flat_map(move |r| (0..size as u16).map(move |c| BoxId::new(r, c)))
    }

    /// Total box count for a board: `size * size`.
    #[must_use]
    pub const fn count(size: usize) -> usize {
        size * size
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b-{}-{}", self.row, self.col)
    }
}

impl FromStr for BoxId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_id(s) {
            Some(('b', row, col)) => Ok(BoxId::new(row, col)),
            _ => Err(ParseIdError(s.to_string())),
        }
    }
}

impl TryFrom<String> for BoxId {
    type Error = ParseIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BoxId> for String {
    fn from(id: BoxId) -> String {
        id.to_string()
    }
}
