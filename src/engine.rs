//! Operation engine and batch driver.
//!
//! Every operation gets exclusive access to a single registry entry, and
//! that access ends before the next operation starts. Collision checks read
//! the whole registry, so operations are applied strictly in order.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, info, warn};

use crate::board::{within_bounds, Board};
use crate::common::{OperationError, Outcome};
use crate::instruction::Step;
use crate::operation::{parse_operation, split_target, Operation, OperationKind};
use crate::ship::{Placement, Ship, ShipId};

/// Result of one operation line within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub operation: String,
    pub result: Result<Outcome, OperationError>,
}

/// Per-operation results of a whole batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub reports: Vec<Report>,
}

impl BatchReport {
    /// Number of operations that changed the registry.
    pub fn applied(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_ok()).count()
    }

    /// Number of operations that were reported and skipped or rolled back.
    pub fn failed(&self) -> usize {
        self.reports.len() - self.applied()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Report, &OperationError)> {
        self.reports
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r, e)))
    }
}

/// Applies operations against a board.
#[derive(Debug, Clone)]
pub struct OperationEngine {
    board: Board,
}

impl OperationEngine {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Hand the final registry over to the output side.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Look up an afloat target.
    fn resolve(&self, id: ShipId) -> Result<&Ship, OperationError> {
        match self.board.get(id) {
            None => Err(OperationError::UnknownShip(id)),
            Some(ship) if ship.is_sunk() => Err(OperationError::AlreadySunk(id)),
            Some(ship) => Ok(ship),
        }
    }

    /// Apply one raw operation line.
    ///
    /// The target is resolved before the suffix is decoded, so a line that
    /// names an unknown ship reports `UnknownShip` even if its suffix is
    /// also malformed.
    pub fn apply_line(&mut self, line: &str) -> Result<Outcome, OperationError> {
        let (target, _) = split_target(line)?;
        self.resolve(target)?;
        let op = parse_operation(line)?;
        self.apply(&op)
    }

    /// Apply an already parsed operation.
    pub fn apply(&mut self, op: &Operation) -> Result<Outcome, OperationError> {
        match &op.kind {
            OperationKind::Sink => self.sink(op.target),
            OperationKind::Steps(steps) => self.apply_steps(op.target, steps),
        }
    }

    /// Flag the target as sunk.
    pub fn sink(&mut self, id: ShipId) -> Result<Outcome, OperationError> {
        self.resolve(id)?;
        let ship = self
            .board
            .get_mut(id)
            .ok_or(OperationError::UnknownShip(id))?;
        ship.sink();
        Ok(Outcome::Sunk(id))
    }

    /// Apply a step batch to the target.
    ///
    /// A move that would leave the board is dropped on its own. If any move
    /// was applied and the final cell is held by another afloat ship, the
    /// whole batch is rolled back, heading included.
    pub fn apply_steps(&mut self, id: ShipId, steps: &[Step]) -> Result<Outcome, OperationError> {
        self.resolve(id)?;
        let size = self.board.size();

        let (snapshot, current, moved, dropped) = {
            let ship = self
                .board
                .get_mut(id)
                .ok_or(OperationError::UnknownShip(id))?;
            let snapshot = ship.placement();
            let mut moved = false;
            let mut dropped = 0;
            for step in steps {
                match step {
                    Step::RotateLeft => ship.rotate_left(),
                    Step::RotateRight => ship.rotate_right(),
                    Step::Move => {
                        let (x, y) = ship.placement().ahead();
                        if within_bounds(x, y, size) {
                            ship.move_to(x, y);
                            moved = true;
                        } else {
                            debug!("ship {} move to ({}, {}) leaves the board, dropped", id, x, y);
                            dropped += 1;
                        }
                    }
                }
            }
            (snapshot, ship.placement(), moved, dropped)
        };

        if moved && self.board.occupied(current.x, current.y, id) {
            self.rollback(id, snapshot);
            return Err(OperationError::Collision {
                ship: id,
                x: current.x,
                y: current.y,
            });
        }

        let Placement { x, y, orientation } = current;
        Ok(Outcome::Moved {
            ship: id,
            x,
            y,
            orientation,
            dropped,
        })
    }

    fn rollback(&mut self, id: ShipId, snapshot: Placement) {
        if let Some(ship) = self.board.get_mut(id) {
            ship.restore(snapshot);
        }
    }

    /// Apply every operation in order. A failing operation is logged and
    /// recorded, and the batch carries on with the next one.
    pub fn run<I, S>(&mut self, operations: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();
        for op in operations {
            let op = op.as_ref();
            let result = self.apply_line(op);
            match &result {
                Ok(outcome) => debug!("operation '{}': {:?}", op, outcome),
                Err(e) => warn!("Error processing operation '{}': {}", op, e),
            }
            report.reports.push(Report {
                operation: op.to_string(),
                result,
            });
        }
        info!(
            "processed {} operations: {} applied, {} failed, {} ships afloat",
            report.reports.len(),
            report.applied(),
            report.failed(),
            self.board.afloat()
        );
        report
    }
}
