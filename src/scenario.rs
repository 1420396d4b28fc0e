//! Scenario records and random scenario generation.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::LoadError;
use crate::config::MAX_RANDOM_STEPS;
use crate::engine::OperationEngine;
use crate::instruction::{encode, Step};
use crate::ship::{Orientation, Ship};

/// Everything a run needs: board size, initial layout, operation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub size: i32,
    pub ships: Vec<Ship>,
    pub operations: Vec<String>,
}

impl Scenario {
    /// Validate the layout and build an engine over it.
    ///
    /// `parse_scenario` already rejects bad layouts at load time; this check
    /// stays for scenarios assembled in code, which never pass the loader.
    pub fn engine(&self) -> Result<OperationEngine, LoadError> {
        let board = Board::new(self.size, self.ships.clone())?;
        Ok(OperationEngine::new(board))
    }
}

fn random_orientation<R: Rng>(rng: &mut R) -> Orientation {
    Orientation::CYCLE[rng.random_range(0..4)]
}

fn random_step<R: Rng>(rng: &mut R) -> Step {
    match rng.random_range(0..4) {
        0 => Step::RotateLeft,
        1 => Step::RotateRight,
        _ => Step::Move,
    }
}

/// Generate a valid layout of up to `ships` ships on a `size`×`size` board
/// and `operations` operation lines.
///
/// Most lines are step batches or sinks against loaded ships; a few target
/// unknown cells or carry malformed suffixes so the failure paths run too.
pub fn random_scenario<R: Rng>(
    rng: &mut R,
    size: i32,
    ships: usize,
    operations: usize,
) -> Scenario {
    let size = size.max(1);
    let cells = (size as usize) * (size as usize);
    let count = ships.min(cells);

    let mut taken = BTreeSet::new();
    let mut fleet = Vec::with_capacity(count);
    while fleet.len() < count {
        let (x, y) = (rng.random_range(0..size), rng.random_range(0..size));
        if taken.insert((x, y)) {
            fleet.push(Ship::new(x, y, random_orientation(rng)));
        }
    }

    let mut ops = Vec::with_capacity(operations);
    for _ in 0..operations {
        let line = match (fleet.is_empty(), rng.random_range(0..10)) {
            (_, 0) => format!("({}, {})MM", size, rng.random_range(0..size)),
            (false, 1) => {
                let target = fleet[rng.random_range(0..fleet.len())].id();
                format!("({}, {})MX", target.0, target.1)
            }
            (false, 2) => {
                let target = fleet[rng.random_range(0..fleet.len())].id();
                format!("({}, {})", target.0, target.1)
            }
            (false, _) => {
                let target = fleet[rng.random_range(0..fleet.len())].id();
                let len = rng.random_range(1..=MAX_RANDOM_STEPS);
                let steps: Vec<Step> = (0..len).map(|_| random_step(rng)).collect();
                format!("({}, {}){}", target.0, target.1, encode(&steps))
            }
            (true, _) => format!("({}, {})", size, size),
        };
        ops.push(line);
    }

    Scenario {
        size,
        ships: fleet,
        operations: ops,
    }
}
