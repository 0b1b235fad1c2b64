//! A program that pits the engine's strategies against each other.
//! It records every game to a CSV file and can fold that file into a
//! win-rate report, as text or JSON.

use std::io::Seek;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use enum_iterator::{all, cardinality, Sequence};
use itertools::Itertools as _;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use noughty::core::{Difficulty, Outcome, PlayerMark};
use noughty::game::run_game;
use noughty::player::Bot;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The file the game records go to
    #[arg(short, long, default_value = "score.csv")]
    outfile: PathBuf,

    /// Log every move
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run games between two strategies and record the results
    Run {
        /// what kind of player is player1? It plays the naughts.
        #[arg(short = 'p', long)]
        player1: StrategySpec,
        /// what kind of player is player2? It plays the crosses.
        #[arg(short = 'q', long)]
        player2: StrategySpec,
        /// How many games to play. The first mover alternates between games.
        #[arg(short = 'n', long, default_value = "1")]
        rounds: u32,
        /// The seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Aggregate the record file into a win matrix
    Report {
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Sequence)]
enum StrategySpec {
    Random,
    Blocking,
    Minimax,
}

impl StrategySpec {
    fn difficulty(&self) -> Difficulty {
        match self {
            StrategySpec::Random => Difficulty::Easy,
            StrategySpec::Blocking => Difficulty::Normal,
            StrategySpec::Minimax => Difficulty::Hard,
        }
    }

    fn variant_number(&self) -> usize {
        all::<StrategySpec>()
            .position(|s| s == *self)
            .expect("is a variant")
    }
}

/// Flat result column. CSV cannot hold an enum with data, so the winning
/// mark is spelled out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum GameEndStatus {
    X,
    O,
    Draw,
}

impl From<Outcome> for GameEndStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(PlayerMark::Cross) => GameEndStatus::X,
            Outcome::Won(PlayerMark::Naught) => GameEndStatus::O,
            Outcome::Draw => GameEndStatus::Draw,
            Outcome::InProgress => unreachable!("a finished game has a verdict"),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct GameRecord {
    player1: StrategySpec,
    player2: StrategySpec,
    result: GameEndStatus,
    played_at: chrono::DateTime<chrono::Local>,
}

#[derive(Serialize)]
struct Report {
    strategies: Vec<String>,
    wins: Vec<Vec<f64>>,
    games: Vec<Vec<f64>>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    match args.command {
        Commands::Run {
            player1,
            player2,
            rounds,
            seed,
        } => run_games(&args.outfile, player1, player2, rounds, seed),
        Commands::Report { json } => print_out_report(&args.outfile, json),
    }
}

fn run_games(
    outfile: &PathBuf,
    player1: StrategySpec,
    player2: StrategySpec,
    rounds: u32,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let seed = seed.unwrap_or(StdRng::from_entropy().gen());
    info!("arena seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    for round in 0..rounds {
        let p1 = Bot::new(PlayerMark::Naught, player1.difficulty(), Some(rng.gen()));
        let p2 = Bot::new(PlayerMark::Cross, player2.difficulty(), Some(rng.gen()));
        let first = if round % 2 == 0 {
            PlayerMark::Naught
        } else {
            PlayerMark::Cross
        };
        let outcome = run_game(Box::new(p1), Box::new(p2), first);
        record_result(outfile, player1, player2, outcome.into())?;
    }
    info!("recorded {rounds} games to {}", outfile.display());
    Ok(())
}

fn record_result(
    outfile: &PathBuf,
    player1: StrategySpec,
    player2: StrategySpec,
    result: GameEndStatus,
) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .append(true)
        .open(outfile)?;
    let needs_headers = file.seek(std::io::SeekFrom::End(0))? == 0;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    let record = GameRecord {
        player1,
        player2,
        result,
        played_at: chrono::Local::now(),
    };
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

fn print_out_report(outfile: &PathBuf, json: bool) -> anyhow::Result<()> {
    let n = cardinality::<StrategySpec>();
    let mut n_wins = vec![vec![0.0; n]; n];
    let mut n_games = vec![vec![0.0; n]; n];

    // Fold the record lines into the matrices. Player1 always holds the
    // naughts, so an O result is a player1 win.
    let file = std::fs::File::open(outfile)
        .with_context(|| format!("the report file {} does not exist", outfile.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    for line in rdr.deserialize() {
        let GameRecord {
            player1,
            player2,
            result,
            ..
        } = line?;
        let p1num = player1.variant_number();
        let p2num = player2.variant_number();
        n_games[p1num][p2num] += 1.0;
        n_games[p2num][p1num] += 1.0;
        match result {
            GameEndStatus::Draw => {
                n_wins[p1num][p2num] += 0.5;
                n_wins[p2num][p1num] += 0.5;
            }
            GameEndStatus::O => {
                n_wins[p1num][p2num] += 1.0;
            }
            GameEndStatus::X => {
                n_wins[p2num][p1num] += 1.0;
            }
        }
    }

    let strategies: Vec<String> = all::<StrategySpec>()
        .map(|s| format!("{s:?}").to_lowercase())
        .collect();

    if json {
        let report = Report {
            strategies,
            wins: n_wins,
            games: n_games,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("win rate, row against column:");
    println!("{:>9} {}", "", strategies.iter().map(|s| format!("{s:>8}")).join(" "));
    for (i, name) in strategies.iter().enumerate() {
        let row = (0..n)
            .map(|j| {
                if n_games[i][j] > 0.0 {
                    format!("{:>8.2}", n_wins[i][j] / n_games[i][j])
                } else {
                    format!("{:>8}", "-")
                }
            })
            .join(" ");
        println!("{:>9} {row}", name);
    }
    Ok(())
}
