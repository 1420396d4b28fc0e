//! Ship entity: identity, live placement and sunk flag.

use core::fmt;

use crate::config::SUNK_MARKER;

/// Heading of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[cfg_attr(feature = "std", serde(rename = "N"))]
    North,
    #[cfg_attr(feature = "std", serde(rename = "E"))]
    East,
    #[cfg_attr(feature = "std", serde(rename = "S"))]
    South,
    #[cfg_attr(feature = "std", serde(rename = "W"))]
    West,
}

impl Orientation {
    /// Clockwise order used for rotation.
    pub const CYCLE: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// One step backward in the cycle (N -> W).
    pub fn rotate_left(self) -> Self {
        Self::CYCLE[(self.index() + 3) % 4]
    }

    /// One step forward in the cycle (N -> E).
    pub fn rotate_right(self) -> Self {
        Self::CYCLE[(self.index() + 1) % 4]
    }

    /// Unit offset `(dx, dy)` of a move in this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    /// Parse the single-letter wire code.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Orientation::North),
            'E' => Some(Orientation::East),
            'S' => Some(Orientation::South),
            'W' => Some(Orientation::West),
            _ => None,
        }
    }

    /// Single-letter wire code.
    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Load-time coordinates of a ship. Stays fixed while the ship moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub i32, pub i32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Position and heading of a ship; also serves as the rollback snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Cell one step ahead in the current heading.
    pub fn ahead(&self) -> (i32, i32) {
        let (dx, dy) = self.orientation.offset();
        (self.x + dx, self.y + dy)
    }
}

/// A ship in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    placement: Placement,
    sunk: bool,
}

impl Ship {
    /// Create an afloat ship; its identity is taken from `(x, y)`.
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            id: ShipId(x, y),
            placement: Placement::new(x, y, orientation),
            sunk: false,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Current `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        (self.placement.x, self.placement.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.placement.orientation
    }

    /// Copy of the live placement, used as a rollback snapshot.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Flag the ship as sunk. There is no way back.
    pub fn sink(&mut self) {
        self.sunk = true;
    }

    pub fn rotate_left(&mut self) {
        self.placement.orientation = self.placement.orientation.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.placement.orientation = self.placement.orientation.rotate_right();
    }

    /// Move to `(x, y)`. Callers check bounds first.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.placement.x = x;
        self.placement.y = y;
    }

    /// Replace position and heading wholesale with a snapshot.
    pub fn restore(&mut self, snapshot: Placement) {
        self.placement = snapshot;
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.placement.x, self.placement.y, self.placement.orientation
        )?;
        if self.sunk {
            write!(f, " {}", SUNK_MARKER)?;
        }
        Ok(())
    }
}
