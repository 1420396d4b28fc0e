#![cfg(feature = "std")]

//! Final snapshot output, as text lines or JSON.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::board::Board;
use crate::config::STDOUT_PATH;
use crate::ship::{Orientation, ShipId};

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// One ship in the JSON snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipSnapshot {
    pub id: ShipId,
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub sunk: bool,
}

/// Snapshot rows in load order.
pub fn snapshot(board: &Board) -> Vec<ShipSnapshot> {
    board
        .ships()
        .iter()
        .map(|s| {
            let (x, y) = s.position();
            ShipSnapshot {
                id: s.id(),
                x,
                y,
                orientation: s.orientation(),
                sunk: s.is_sunk(),
            }
        })
        .collect()
}

/// One `(x, y, O)` line per ship, with ` SUNK` appended to sunk ships.
pub fn render_text(board: &Board) -> String {
    let mut out = String::new();
    for ship in board.ships() {
        // writing into a String cannot fail
        let _ = writeln!(out, "{}", ship);
    }
    out
}

pub fn render_json(board: &Board) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(&snapshot(board))?;
    out.push('\n');
    Ok(out)
}

pub fn render(board: &Board, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(render_text(board)),
        Format::Json => render_json(board),
    }
}

/// Write `contents` to `path`, or to stdout when `path` is `-`.
pub fn write_output<P: AsRef<Path>>(path: P, contents: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    if path == Path::new(STDOUT_PATH) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    fs::write(path, contents)
        .with_context(|| format!("Error writing output file {}", path.display()))
}
