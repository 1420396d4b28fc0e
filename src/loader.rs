#![cfg(feature = "std")]

//! Textual scenario input.
//!
//! ```text
//! 5
//! (0, 0, N) (1, 2, E) (4, 4, S)
//! (0, 0)MRMM
//! (4, 4)
//! ```

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use regex::Regex;

use crate::common::LoadError;
use crate::scenario::Scenario;
use crate::ship::{Orientation, Ship};

static SHIP_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ship_pattern() -> &'static Regex {
    SHIP_PATTERN.get_or_init(|| {
        Regex::new(r"\((\d+),\s*(\d+),\s*([NESW])\)").expect("valid ship tuple regex")
    })
}

/// Extract every `(x, y, O)` tuple from the ship list line, in order.
pub fn parse_ships(line: &str) -> Result<Vec<Ship>, LoadError> {
    let malformed = || LoadError::MalformedShipList(line.trim().to_string());
    let mut ships = Vec::new();
    for caps in ship_pattern().captures_iter(line) {
        let x: i32 = caps[1].parse().map_err(|_| malformed())?;
        let y: i32 = caps[2].parse().map_err(|_| malformed())?;
        let orientation = caps[3]
            .chars()
            .next()
            .and_then(Orientation::from_char)
            .ok_or_else(malformed)?;
        ships.push(Ship::new(x, y, orientation));
    }
    if ships.is_empty() {
        return Err(malformed());
    }
    Ok(ships)
}

/// Parse the board size line.
pub fn parse_size(line: &str) -> Result<i32, LoadError> {
    let trimmed = line.trim();
    match trimmed.parse::<i32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(LoadError::InvalidBoardSize(trimmed.to_string())),
    }
}

/// Parse a whole input document. The initial layout is validated here, so
/// a returned scenario always yields an engine.
pub fn parse_scenario(input: &str) -> Result<Scenario, LoadError> {
    let mut lines = input.lines();
    let size = parse_size(lines.next().ok_or(LoadError::MissingBoardSize)?)?;
    let ships = parse_ships(lines.next().ok_or(LoadError::MissingShipList)?)?;
    crate::board::validate_layout(size, &ships)?;
    let operations = lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();
    Ok(Scenario {
        size,
        ships,
        operations,
    })
}

/// Read and parse a scenario file.
pub fn load_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Scenario> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)
        .with_context(|| format!("Error reading input file {}", path.display()))?;
    let scenario = parse_scenario(&input)
        .with_context(|| format!("Error reading input file {}", path.display()))?;
    log::debug!(
        "loaded {} ships and {} operations on a {}x{} board",
        scenario.ships.len(),
        scenario.operations.len(),
        scenario.size,
        scenario.size
    );
    Ok(scenario)
}
