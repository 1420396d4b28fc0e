#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod engine;
pub mod instruction;
#[cfg(feature = "std")]
pub mod loader;
#[cfg(feature = "std")]
mod logging;
pub mod operation;
pub mod scenario;
mod ship;
#[cfg(feature = "std")]
pub mod writer;

pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use instruction::{decode, encode, Step};
#[cfg(feature = "std")]
pub use loader::{load_file, parse_scenario};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use operation::{parse_operation, split_target, Operation, OperationKind};
pub use scenario::{random_scenario, Scenario};
pub use ship::*;
#[cfg(feature = "std")]
pub use writer::{render, render_json, render_text, write_output, Format};
