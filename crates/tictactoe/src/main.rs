//! Play tic-tac-toe against the minimax solver

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use tictactoe::{minimax, Action, Board, Player};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(author, version, about = "Play tic-tac-toe against a perfect opponent")]
struct Cli {
    /// Side the human plays
    #[arg(long, value_enum, default_value = "x")]
    play_as: Side,

    /// Let the solver play both sides and print the game
    #[arg(long)]
    self_play: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let human = if cli.self_play {
        None
    } else {
        Some(Player::from(cli.play_as))
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Board::new();

    while !board.is_terminal() {
        println!("{}", board);
        let action = if Some(board.player()) == human {
            read_action(&board, &mut lines)?
        } else {
            let action = minimax(&board).context("no legal move on an open board")?;
            println!("Computer ({}) plays {} {}", board.player(), action.0, action.1);
            action
        };
        tracing::debug!("{} plays {:?}", board.player(), action);
        board = board.result(action)?;
    }

    println!("{}", board);
    match board.winner() {
        Some(player) => println!("Game over: {} wins.", player),
        None => println!("Game over: tie."),
    }
    Ok(())
}

fn read_action<I>(board: &Board, lines: &mut I) -> Result<Action>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("Your move ({}), as `row col`: ", board.player());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let line = line?;

        match parse_action(&line) {
            Some(action) if board.actions().contains(&action) => return Ok(action),
            _ => println!("Enter an empty cell as two numbers from 0 to 2."),
        }
    }
}

fn parse_action(line: &str) -> Option<Action> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Some((row, col)),
        _ => None,
    }
}
