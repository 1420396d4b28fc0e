//! Instruction suffix decoding.
//!
//! A suffix is encoded as `M([LRM]M?)*`. Only every second character,
//! starting at index 1, carries a step; the leading `M` and the optional
//! `M` after each step code are separators with no effect of their own.
//! `"MRMLMM"` therefore decodes to `[RotateRight, RotateLeft, Move]`, and
//! a bare `"M"` decodes to no steps at all.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::OperationError;

/// One atomic action inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Move,
    RotateLeft,
    RotateRight,
}

impl Step {
    fn from_code(c: u8) -> Option<Self> {
        match c {
            b'M' => Some(Step::Move),
            b'L' => Some(Step::RotateLeft),
            b'R' => Some(Step::RotateRight),
            _ => None,
        }
    }

    /// Wire code of the step.
    pub fn code(self) -> char {
        match self {
            Step::Move => 'M',
            Step::RotateLeft => 'L',
            Step::RotateRight => 'R',
        }
    }
}

/// Check `s` against `M([LRM]M?)*`, which accepts the same strings as `M[LRM]*`.
fn matches_grammar(s: &[u8]) -> bool {
    match s.split_first() {
        Some((&b'M', rest)) => rest.iter().all(|&c| Step::from_code(c).is_some()),
        _ => false,
    }
}

/// Decode an instruction suffix into its ordered steps.
pub fn decode(instruction: &str) -> Result<Vec<Step>, OperationError> {
    let bytes = instruction.as_bytes();
    if !matches_grammar(bytes) {
        return Err(OperationError::MalformedInstruction(instruction.to_string()));
    }
    let steps = bytes
        .iter()
        .skip(1)
        .step_by(2)
        .filter_map(|&c| Step::from_code(c))
        .collect();
    Ok(steps)
}

/// Encode steps so that [`decode`] returns them unchanged.
pub fn encode(steps: &[Step]) -> String {
    let mut out = String::with_capacity(1 + steps.len() * 2);
    out.push('M');
    for step in steps {
        out.push(step.code());
        out.push('M');
    }
    out
}
