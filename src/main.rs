use docopt::Docopt;
use log::{info, LevelFilter};
use serde_derive::Deserialize;
use simple_logger::SimpleLogger;
use tree_mazes::{
    analysis,
    config::MazeConfig,
    generators,
};

const USAGE: &str = "Binary tree mazes

Usage:
    tree_mazes -h | --help
    tree_mazes [--rows=<n>] [--columns=<n>] [--seed=<s>] [--parameters=<i>] [--summary] [--verbose]

Options:
    -h --help          Show this screen.
    --rows=<n>         Number of rows in the maze grid [default: 10].
    --columns=<n>      Number of columns in the maze grid [default: 10].
    --seed=<s>         Seed for the xorshift generator, 0 picks a fixed non-zero seed [default: 23].
    --parameters=<i>   Index of the xorshift shift triple, taken modulo 81 [default: 0].
    --summary          Print passage, dead end and connectivity counts after the maze.
    --verbose          Log generation details to stderr.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: u32,
    flag_parameters: isize,
    flag_summary: bool,
    flag_verbose: bool,
}

impl From<&MazeArgs> for MazeConfig {
    fn from(args: &MazeArgs) -> MazeConfig {
        MazeConfig {
            rows: args.flag_rows,
            columns: args.flag_columns,
            seed: args.flag_seed,
            parameter_index: args.flag_parameters,
        }
    }
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::tree_mazes::errors::Error, ::tree_mazes::errors::ErrorKind);
        }

        foreign_links {
            LoggerFailure(::log::SetLoggerError);
        }
    }
}
use crate::errors::*;

fn main() {
    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let level = if args.flag_verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    SimpleLogger::new().with_level(level).init()?;

    let config = MazeConfig::from(&args);
    info!("Generating maze with {:?}", config);

    let maze = generators::generate(&config)
        .chain_err(|| format!("Failed to generate a {} x {} maze", config.rows, config.columns))?;

    print!("{}", maze);

    if args.flag_summary {
        println!("{}", analysis::summarize(&maze));
    }

    Ok(())
}
