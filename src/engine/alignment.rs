//! Word-level edit alignment.
//!
//! A Wagner-Fischer table over the two token sequences where a pair of words
//! costs nothing to align when their similarity clears
//! [`SIMILARITY_THRESHOLD`], and one unit otherwise. Deletions and insertions
//! cost one unit each.

use super::classify::{TokenStatus, SIMILARITY_THRESHOLD};
use super::similarity::similarity;
use crate::AlignedToken;

/// Operation that produced a cell's minimum cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditOp {
    /// Reference token with no recognized counterpart.
    Delete,
    /// Recognized token with no reference counterpart.
    Insert,
    /// Reference and recognized token aligned together, matching or not.
    Substitute,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: usize,
    op: EditOp,
}

/// Dense `(m + 1) x (n + 1)` table stored row-major.
struct Grid {
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    fn build(reference: &[String], recognized: &[String]) -> Self {
        let rows = reference.len() + 1;
        let cols = recognized.len() + 1;
        let mut grid = Grid {
            cols,
            cells: vec![Cell { cost: 0, op: EditOp::Insert }; rows * cols],
        };

        for i in 1..rows {
            grid.set(i, 0, Cell { cost: i, op: EditOp::Delete });
        }
        for j in 1..cols {
            grid.set(0, j, Cell { cost: j, op: EditOp::Insert });
        }

        for i in 1..rows {
            for j in 1..cols {
                let pair_cost = if similarity(&reference[i - 1], &recognized[j - 1]) > SIMILARITY_THRESHOLD {
                    0
                } else {
                    1
                };

                // Candidates in tie-break order; a later one wins only when strictly cheaper.
                let mut best = Cell { cost: grid.get(i - 1, j).cost + 1, op: EditOp::Delete };
                let insert = grid.get(i, j - 1).cost + 1;
                if insert < best.cost {
                    best = Cell { cost: insert, op: EditOp::Insert };
                }
                let substitute = grid.get(i - 1, j - 1).cost + pair_cost;
                if substitute < best.cost {
                    best = Cell { cost: substitute, op: EditOp::Substitute };
                }

                grid.set(i, j, best);
            }
        }

        grid
    }

    fn get(&self, i: usize, j: usize) -> Cell {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, cell: Cell) {
        self.cells[i * self.cols + j] = cell;
    }
}

/// Align `reference` against `recognized`, returning rows in reference order
/// with extra words interleaved where they were inserted.
pub fn align(reference: &[String], recognized: &[String]) -> Vec<AlignedToken> {
    log::debug!(
        "building {}x{} alignment table",
        reference.len() + 1,
        recognized.len() + 1
    );

    let grid = Grid::build(reference, recognized);
    let mut rows = Vec::with_capacity(reference.len().max(recognized.len()));
    let (mut i, mut j) = (reference.len(), recognized.len());

    while i > 0 || j > 0 {
        let row = match grid.get(i, j).op {
            EditOp::Substitute => {
                let expected = &reference[i - 1];
                let actual = &recognized[j - 1];
                let (status, confidence) = TokenStatus::for_pair(similarity(expected, actual));
                i -= 1;
                j -= 1;
                AlignedToken {
                    reference: expected.clone(),
                    recognized: actual.clone(),
                    status,
                    confidence,
                    position: Some(i),
                }
            }
            EditOp::Delete => {
                i -= 1;
                AlignedToken {
                    reference: reference[i].clone(),
                    recognized: String::new(),
                    status: TokenStatus::Missing,
                    confidence: 0.0,
                    position: Some(i),
                }
            }
            EditOp::Insert => {
                j -= 1;
                AlignedToken {
                    reference: String::new(),
                    recognized: recognized[j].clone(),
                    status: TokenStatus::Extra,
                    confidence: 0.0,
                    position: None,
                }
            }
        };

        log::trace!("{:?} {:?} -> {:?}", row.reference, row.recognized, row.status);
        rows.push(row);
    }

    rows.reverse();
    rows
}
