//! Board state and game rules

use std::fmt;
use thiserror::Error;

/// A move: (row, column), both in 0..3
pub type Action = (usize, usize);

/// Errors raised by game rules
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move ({0}, {1}): cell is occupied or off the board")]
    InvalidMove(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Winning lines (rows, columns, diagonals)
const LINES: [[Action; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 3x3 tic-tac-toe board. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Player>; 3]; 3],
}

impl Board {
    /// Empty starting board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rows of cells
    pub fn from_cells(cells: [[Option<Player>; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// Player who moves next
    pub fn player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell, in row-major order
    pub fn actions(&self) -> Vec<Action> {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col].is_none())
            .collect()
    }

    /// Board after the current player takes `action`
    pub fn result(&self, action: Action) -> Result<Board, GameError> {
        let (row, col) = action;
        if row >= 3 || col >= 3 || self.cells[row][col].is_some() {
            return Err(GameError::InvalidMove(row, col));
        }

        let mut next = *self;
        next.cells[row][col] = Some(self.player());
        Ok(next)
    }

    /// Owner of a completed line, if any
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            match a {
                Some(player) if a == b && b == c => Some(player),
                _ => None,
            }
        })
    }

    /// Whether the game is over (a winner or a full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().flatten().all(Option::is_some)
    }

    /// 1 if X has won, -1 if O has won, 0 otherwise
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            let marks: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(player) => format!(" {} ", player),
                    None => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", marks.join("|"))?;
        }
        Ok(())
    }
}
