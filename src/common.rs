//! Common types for the fleet simulator: operation and load errors, outcomes.

use alloc::string::String;

use crate::ship::{Orientation, ShipId};

/// Result of an operation that was applied to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ship was flagged as sunk.
    Sunk(ShipId),
    /// Step batch was committed; carries the ship's new placement and
    /// the number of moves dropped for leaving the board.
    Moved {
        ship: ShipId,
        x: i32,
        y: i32,
        orientation: Orientation,
        dropped: usize,
    },
}

/// Recoverable errors raised while applying a single operation.
///
/// None of these abort a batch: the driver reports them and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// No ship was loaded at this identity.
    UnknownShip(ShipId),
    /// Target ship was sunk by an earlier operation.
    AlreadySunk(ShipId),
    /// Leading coordinate token is missing or unparsable.
    MalformedOperation(String),
    /// Instruction suffix does not match `M([LRM]M?)*`.
    MalformedInstruction(String),
    /// Final cell of the batch is held by another afloat ship; the batch
    /// was rolled back.
    Collision { ship: ShipId, x: i32, y: i32 },
}

impl core::fmt::Display for OperationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OperationError::UnknownShip(id) => write!(f, "No ship with this ID {}", id),
            OperationError::AlreadySunk(id) => write!(f, "Ship {} is already sunk", id),
            OperationError::MalformedOperation(op) => {
                write!(f, "Invalid coordinate format: '{}'", op)
            }
            OperationError::MalformedInstruction(ins) => {
                write!(f, "Invalid instruction format: '{}'", ins)
            }
            OperationError::Collision { ship, x, y } => write!(
                f,
                "Two ships cannot be on the same cell: ({},{}), ship {} rolled back",
                x, y, ship
            ),
        }
    }
}

/// Fatal errors raised while loading the initial scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Input has no first line.
    MissingBoardSize,
    /// First line is not a positive integer.
    InvalidBoardSize(String),
    /// Input has no second line.
    MissingShipList,
    /// Second line holds no `(x, y, O)` tuple.
    MalformedShipList(String),
    /// A ship starts outside the board.
    ShipOutOfBounds { x: i32, y: i32 },
    /// Two ships start on the same cell.
    DuplicatePosition { x: i32, y: i32 },
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LoadError::MissingBoardSize => write!(f, "Input is empty, expected a board size"),
            LoadError::InvalidBoardSize(s) => write!(f, "Invalid board size: '{}'", s),
            LoadError::MissingShipList => write!(f, "Input has no ship list line"),
            LoadError::MalformedShipList(s) => write!(f, "No valid ship data found in '{}'", s),
            LoadError::ShipOutOfBounds { x, y } => {
                write!(f, "Ship position out of board bounds: ({}, {})", x, y)
            }
            LoadError::DuplicatePosition { x, y } => {
                write!(f, "Duplicate ship position detected: ({}, {})", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OperationError {}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {}
