//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Run puzzle solvers against local input files
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run puzzle solvers against local inputs", version)]
pub struct Args {
    /// Input file for a single puzzle (requires --year and --day)
    #[arg(requires_all = ["year", "day"])]
    pub input: Option<PathBuf>,

    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{dd}.txt` inputs
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "~/.cache/aoc_solver/inputs")]
    pub input_dir: PathBuf,

    /// Quiet mode - one `YEAR DAY PART ANSWER` line per part
    #[arg(short, long)]
    pub quiet: bool,
}
