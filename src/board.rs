//! Board state: the ship registry and the bounds/occupancy predicates.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt;

use crate::common::LoadError;
use crate::ship::{Ship, ShipId};

/// True iff `(x, y)` lies on a `size`×`size` board.
pub fn within_bounds(x: i32, y: i32, size: i32) -> bool {
    (0..size).contains(&x) && (0..size).contains(&y)
}

/// True iff an afloat ship other than `excluding` currently sits on `(x, y)`.
pub fn occupied(ships: &[Ship], x: i32, y: i32, excluding: ShipId) -> bool {
    ships
        .iter()
        .any(|s| s.id() != excluding && !s.is_sunk() && s.position() == (x, y))
}

/// Reject initial layouts with a ship off the board or two ships on one cell.
pub fn validate_layout(size: i32, ships: &[Ship]) -> Result<(), LoadError> {
    let mut seen = BTreeSet::new();
    for ship in ships {
        let (x, y) = ship.position();
        if !within_bounds(x, y, size) {
            return Err(LoadError::ShipOutOfBounds { x, y });
        }
        if !seen.insert((x, y)) {
            return Err(LoadError::DuplicatePosition { x, y });
        }
    }
    Ok(())
}

/// Ship registry keyed by load-time identity, kept in load order.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    ships: Vec<Ship>,
    index: BTreeMap<ShipId, usize>,
}

impl Board {
    /// Build a registry from a validated layout.
    pub fn new(size: i32, ships: Vec<Ship>) -> Result<Self, LoadError> {
        if size <= 0 {
            return Err(LoadError::InvalidBoardSize(alloc::format!("{}", size)));
        }
        validate_layout(size, &ships)?;
        let index = ships
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id(), i))
            .collect();
        Ok(Board { size, ships, index })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// All ships in load order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.index.get(&id).map(|&i| &self.ships[i])
    }

    /// Exclusive access to one registry entry.
    pub fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        let i = *self.index.get(&id)?;
        self.ships.get_mut(i)
    }

    pub fn within_bounds(&self, x: i32, y: i32) -> bool {
        within_bounds(x, y, self.size)
    }

    pub fn occupied(&self, x: i32, y: i32, excluding: ShipId) -> bool {
        occupied(&self.ships, x, y, excluding)
    }

    /// Number of ships not yet sunk.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("ships", &self.ships)
            .finish()
    }
}
