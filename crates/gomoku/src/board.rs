//! Board state for Gomoku.

use crate::GomokuMove;
use std::fmt;
use uct_core::Player;

/// Line directions checked for a win: horizontal, vertical, `\` and `/`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A Gomoku position: stones on the board, the side to move and the
/// winner once a line has been completed.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct GomokuState {
    size: usize,
    win_length: usize,
    cells: Vec<Option<Player>>,
    to_move: Player,
    winner: Option<Player>,
    stones: usize,
}

impl GomokuState {
    pub(crate) fn empty(size: usize, win_length: usize) -> Self {
        Self {
            size,
            win_length,
            cells: vec![None; size * size],
            to_move: Player::First,
            winner: None,
            stones: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Stones placed so far.
    pub fn stones(&self) -> usize {
        self.stones
    }

    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    /// Stone at `(row, col)`; `None` for an empty or off-board cell.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, mv: GomokuMove) -> bool {
        self.contains(mv) && self.cells[mv.index(self.size)].is_none()
    }

    pub fn contains(&self, mv: GomokuMove) -> bool {
        (mv.row as usize) < self.size && (mv.col as usize) < self.size
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = GomokuMove> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| GomokuMove::new((i / self.size) as u8, (i % self.size) as u8))
    }

    /// Place a stone for the side to move. The caller has checked legality.
    pub(crate) fn place(&mut self, mv: GomokuMove) {
        let player = self.to_move;
        self.cells[mv.index(self.size)] = Some(player);
        self.stones += 1;
        if self.completes_line(mv, player) {
            self.winner = Some(player);
        }
        self.to_move = player.opponent();
    }

    /// A new line can only pass through the last stone placed, so only the
    /// four lines through `mv` are scanned.
    fn completes_line(&self, mv: GomokuMove, player: Player) -> bool {
        let (row, col) = (mv.row as isize, mv.col as isize);
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let run = 1 + self.run_length(row, col, dr, dc, player) + self.run_length(row, col, -dr, -dc, player);
            run >= self.win_length
        })
    }

    /// Consecutive stones of `player` from `(row, col)` exclusive, stepping by `(dr, dc)`.
    fn run_length(&self, row: isize, col: isize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row + dr, col + dc);
        while r >= 0 && c >= 0 && self.get(r as usize, c as usize) == Some(player) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl fmt::Display for GomokuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
