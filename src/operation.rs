//! Operation lines: a `(x, y)` target token, optionally followed by a step suffix.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::common::OperationError;
use crate::instruction::{decode, Step};
use crate::ship::ShipId;

/// What an operation asks of its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    /// No suffix: flag the ship as sunk.
    Sink,
    /// Decoded step batch.
    Steps(Vec<Step>),
}

/// A parsed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub target: ShipId,
    pub kind: OperationKind,
}

/// Split a line into its target identity and the trimmed suffix after the
/// first `)`.
pub fn split_target(line: &str) -> Result<(ShipId, &str), OperationError> {
    let malformed = || OperationError::MalformedOperation(line.to_string());
    let line = line.trim();
    let body = line.strip_prefix('(').ok_or_else(malformed)?;
    let close = body.find(')').ok_or_else(malformed)?;
    let (coords, rest) = (&body[..close], &body[close + 1..]);

    let (x, y) = coords.split_once(',').ok_or_else(malformed)?;
    let x = parse_coord(x).ok_or_else(malformed)?;
    let y = parse_coord(y).ok_or_else(malformed)?;
    Ok((ShipId(x, y), rest.trim()))
}

fn parse_coord(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a full operation line, decoding any step suffix.
pub fn parse_operation(line: &str) -> Result<Operation, OperationError> {
    let (target, suffix) = split_target(line)?;
    let kind = if suffix.is_empty() {
        OperationKind::Sink
    } else {
        OperationKind::Steps(decode(suffix)?)
    };
    Ok(Operation { target, kind })
}
