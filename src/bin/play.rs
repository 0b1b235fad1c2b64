//! Play tic-tac-toe against the machine on your terminal.
//!
//! The machine starts out sloppy and gets meaner as you beat it: win more
//! than 3 games and it starts blocking you, win more than 6 and it switches
//! to the full search.

use std::io::BufRead;

use anyhow::Context;
use clap::Parser;
use log::debug;
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

use noughty::core::{Board, CellId, Difficulty, Outcome, PlayerMark};
use noughty::engine::{evaluate, select_move};

/// A Tic-Tac-Toe game for the command line, with a cool AI integrated!
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The mark you play with; the machine takes the other one
    #[arg(long, default_value = "x")]
    mark: PlayerMark,

    /// Starting difficulty level: 1 plays at random, 2 blocks, 3 never loses
    #[arg(long, default_value = "1")]
    level: u8,

    /// The seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Log every move
    #[arg(long)]
    verbose: bool,
}

enum Command {
    Place(CellId),
    Undo,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let seed = args.seed.unwrap_or(StdRng::from_entropy().gen());
    debug!("AI seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let player = args.mark;
    let ai = player.other();
    let mut difficulty = Difficulty::from_level(args.level);
    let mut games_played = 0u32;
    let mut player_wins = 0u32;

    loop {
        let outcome = play_one_game(player, ai, difficulty, &mut rng)?;
        games_played += 1;
        match outcome {
            Outcome::Won(mark) if mark == player => {
                println!("You won!");
                player_wins += 1;
            }
            Outcome::Won(_) => println!("You lost."),
            Outcome::Draw => println!("Draw!"),
            Outcome::InProgress => unreachable!(),
        }

        // The engine knows nothing about this; raising the level as the
        // player racks up wins is the host's policy.
        if player_wins > 6 && difficulty == Difficulty::Normal
            || player_wins > 3 && difficulty == Difficulty::Easy
        {
            difficulty = difficulty.harder();
            println!("The machine has had enough. Difficulty raised.");
        }

        println!("Games played: {games_played}");
        println!("AI difficulty: {}", difficulty.level());
        if !ask_play_again()? {
            break;
        }
    }
    Ok(())
}

fn play_one_game(
    player: PlayerMark,
    ai: PlayerMark,
    difficulty: Difficulty,
    rng: &mut StdRng,
) -> anyhow::Result<Outcome> {
    let mut board = Board::default();
    let mut last_board: Option<Board> = None;
    let mut player_is_next = rng.gen_bool(0.5);
    println!("You are {player}, the machine is {ai}.");

    loop {
        let outcome = evaluate(&board);
        if outcome != Outcome::InProgress {
            print!("{board}");
            return Ok(outcome);
        }
        if player_is_next {
            println!("Player's turn ({player})");
            print!("{board}");
            match prompt_command(&board)? {
                Command::Place(cell) => {
                    last_board = Some(board);
                    board.place_mark(cell, player);
                    player_is_next = false;
                }
                Command::Undo => match last_board.take() {
                    Some(prev) => {
                        board = prev;
                        println!("Went back to before your last move.");
                    }
                    None => println!("Nothing to go back to."),
                },
                Command::Quit => std::process::exit(0),
            }
        } else {
            println!("AI's turn ({ai})");
            board = select_move(&board, difficulty, player, ai, rng);
            player_is_next = true;
        }
    }
}

fn prompt_command(board: &Board) -> anyhow::Result<Command> {
    let stdin = std::io::stdin();
    loop {
        println!("Input a number 1-9 to make a move (1 = top left, 9 = bottom right), u to go back one move, q to quit");
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .context("could not read from stdin")?;
        let token = line.trim();
        match token {
            "u" => return Ok(Command::Undo),
            "q" => return Ok(Command::Quit),
            _ => {}
        }
        let num: usize = match token.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Must input a number, u, or q");
                continue;
            }
        };
        if !(1..=9).contains(&num) {
            eprintln!("Number not in range 1-9");
            continue;
        }
        let cell = CellId(num - 1);
        if board.cell(cell).is_some() {
            eprintln!("There is already a marker there");
            continue;
        }
        return Ok(Command::Place(cell));
    }
}

fn ask_play_again() -> anyhow::Result<bool> {
    println!("Play again? (y/n)");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
