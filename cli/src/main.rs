//! A small collection of street-graph tools, bundled as a single executable. The main one is the
//! interactive command loop; the rest exist to exercise it.

#[macro_use]
extern crate log;

mod logger;
mod parser;
mod random_commands;
mod run;

use anyhow::Result;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "streets", about = "The street intersection graph multi-tool")]
enum Command {
    /// Read street commands (add/mod/rm/gg/sp) one per line from STDIN and print the generated
    /// intersection graph on every gg
    Run {
        /// Read commands from this file instead of STDIN
        #[structopt(long)]
        input: Option<String>,
        /// Print generated graphs as JSON instead of the V/E text format
        #[structopt(long)]
        json: bool,
    },
    /// Emit a pseudo-random street command stream to STDOUT, for exercising the command loop
    RandomCommands {
        /// A seed for generating random numbers
        #[structopt(long, default_value = "42")]
        rng_seed: u64,
        /// Upper bound on the number of streets added per round
        #[structopt(long, default_value = "10")]
        max_streets: usize,
        /// Upper bound on the number of points per street
        #[structopt(long, default_value = "5")]
        max_points: usize,
        /// Coordinates are drawn from [-coord-range, coord-range]
        #[structopt(long, default_value = "30")]
        coord_range: i64,
        /// How many rounds of add/gg/rm to emit
        #[structopt(long, default_value = "1")]
        rounds: usize,
    },
}

fn main() -> Result<()> {
    logger::setup();

    match Command::from_args() {
        Command::Run { input, json } => run::run(input, json),
        Command::RandomCommands {
            rng_seed,
            max_streets,
            max_points,
            coord_range,
            rounds,
        } => random_commands::emit(rng_seed, max_streets, max_points, coord_range, rounds),
    }
}
