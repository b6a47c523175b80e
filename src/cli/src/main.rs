#![warn(clippy::pedantic)]

mod config;
mod net;

use std::{
    io::{IsTerminal, stdout},
    path::PathBuf,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::{eyre::eyre, owo_colors::OwoColorize};
use config::AppConfig;
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug};
use magic_cube::{Cube, CubeGenerator, Playback, RubikCubeApi, same_cube};

/// Scrambles and solves 3x3x3 cubes layer by layer
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search and scramble settings, in TOML format
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a randomly scrambled cube
    Scramble {
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Draw the cube unfolded instead of printing its facelets
        #[arg(long)]
        net: bool,
    },
    /// Solve a cube and print the moves that solve it
    Solve {
        /// The cube as 54 facelets, face by face (Front, Top, Right, Back,
        /// Down, Left). A fresh scramble is solved when left out.
        facelets: Option<String>,
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// The most states a single search may record
        #[arg(long)]
        node_limit: Option<usize>,
        /// Let searches revisit states they have already seen
        #[arg(long)]
        no_dedup: bool,
        /// Also print every intermediate state
        #[arg(long)]
        states: bool,
        /// Draw states unfolded instead of printing their facelets
        #[arg(long)]
        net: bool,
    },
    /// Tell whether two cubes differ only by how they are held
    Same {
        /// The first cube as 54 facelets
        a: String,
        /// The second cube as 54 facelets
        b: String,
    },
    /// Draw a cube unfolded
    Show {
        /// The cube as 54 facelets
        facelets: String,
    },
}

#[derive(Args)]
struct ScrambleArgs {
    /// Makes the scramble reproducible
    #[arg(long)]
    seed: Option<u64>,
    /// The number of layer moves in the scramble
    #[arg(long)]
    length: Option<usize>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;
    debug!("Using {config:?}");
    let colored = stdout().is_terminal();

    match cli.command {
        Commands::Scramble { scramble, net } => {
            let config = config
                .with_seed(scramble.seed)
                .with_length(scramble.length);
            let mut generator = CubeGenerator::from_config(config.scramble);
            let (moves, cube) = generator.scramble();
            debug!("Scramble: {}", moves.iter().join(" "));
            print_cube(&cube, net, colored);
        }
        Commands::Solve {
            facelets,
            scramble,
            node_limit,
            no_dedup,
            states,
            net,
        } => {
            let config = config
                .with_seed(scramble.seed)
                .with_length(scramble.length)
                .with_node_limit(node_limit)
                .without_dedup(no_dedup);
            let mut api = RubikCubeApi::new(
                CubeGenerator::from_config(config.scramble),
                config.solver(),
            );
            let cube = match facelets {
                Some(facelets) => parse_cube(&facelets)?,
                None => {
                    let cube = api.random_cube();
                    println!("{cube}");
                    cube
                }
            };

            let playback = api.solve(&cube)?;
            print_playback(&playback, states, net, colored);
        }
        Commands::Same { a, b } => {
            let same = same_cube(&parse_cube(&a)?, &parse_cube(&b)?);
            if same {
                println!("{}", "Same cube".green());
            } else {
                println!("{}", "Different cubes".red());
            }
        }
        Commands::Show { facelets } => {
            println!("{}", net::render(&parse_cube(&facelets)?, colored));
        }
    }

    Ok(())
}

fn parse_cube(facelets: &str) -> color_eyre::Result<Cube> {
    facelets
        .parse::<Cube>()
        .map_err(|err| eyre!("Could not read the cube `{facelets}`: {err}"))
}

fn print_cube(cube: &Cube, net: bool, colored: bool) {
    if net {
        println!("{}\n", net::render(cube, colored));
    } else {
        println!("{cube}");
    }
}

fn print_playback(playback: &Playback, states: bool, net: bool, colored: bool) {
    if states {
        print_cube(&playback.states[0], net, colored);
        for (action, state) in playback.actions.iter().zip(&playback.states[1..]) {
            println!("{}", action.bold());
            print_cube(state, net, colored);
        }
    } else {
        println!("{}", playback.actions.iter().join(" "));
    }

    println!(
        "{} actions, {} of them turn a layer",
        playback.actions.len().bold(),
        playback.rotation_count.bold()
    );
}
