/// Input file read when no `--input` is given.
pub const DEFAULT_INPUT: &str = "input.txt";
/// Output file written when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "output.txt";
/// Output path that selects stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Suffix appended to a sunk ship's output line.
pub const SUNK_MARKER: &str = "SUNK";

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "FLEET_SIM_LOG";

/// Defaults for generated scenarios.
pub const DEFAULT_RANDOM_BOARD_SIZE: i32 = 8;
pub const DEFAULT_RANDOM_SHIPS: usize = 6;
pub const DEFAULT_RANDOM_OPERATIONS: usize = 40;

/// Longest step suffix produced by the random generator, in decoded steps.
pub const MAX_RANDOM_STEPS: usize = 6;
