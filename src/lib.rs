//! A single-player tic-tac-toe game for the command line, with a cool AI integrated!
//!
//! The `engine` module holds the move-selection strategies and the outcome
//! evaluator they share. The `player` and `game` modules wrap the engine so
//! that the binaries can pit strategies against each other or against a human.

pub mod core;
pub mod engine;
pub mod game;
pub mod player;
