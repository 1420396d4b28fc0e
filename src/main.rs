use clap::Parser;
use fleet_sim::{
    init_logging, load_file, render, write_output, Format, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about = "Apply ship operations on a square board", long_about = None)]
struct Cli {
    /// Scenario file: board size, ship list, one operation per line.
    #[arg(long, short, default_value = DEFAULT_INPUT)]
    input: String,
    /// Where to write the final ship states (`-` for stdout).
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: String,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Only log warnings and errors.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();
    if cli.quiet {
        log::set_max_level(log::max_level().min(LevelFilter::Warn));
    }

    let scenario = load_file(&cli.input)?;
    let mut engine = scenario.engine()?;
    engine.run(&scenario.operations);

    let board = engine.into_board();
    let contents = render(&board, cli.format)?;
    write_output(&cli.output, &contents)
}
