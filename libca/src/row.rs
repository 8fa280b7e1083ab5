use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<CellState>,
}

impl Row {
    /// Creates an all-dead row.
    pub fn new(width: usize) -> Self {
        Self::with_cells(vec![CellState::default(); width])
    }

    pub fn with_cells(cells: Vec<CellState>) -> Self {
        Self { cells }
    }

    /// Parses a row from `0`/`1` digits, returning `None` on any other character.
    pub fn from_bits(bits: &str) -> Option<Self> {
        let cells = bits.chars().map(CellState::from_char).collect::<Option<Vec<_>>>()?;
        Some(Self::with_cells(cells))
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&CellState> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut CellState> {
        self.cells.get_mut(index)
    }

    /// The `2 * radius + 1` cells centered on `center`, or `None` if the window
    /// would run past either edge.
    pub fn window(&self, center: usize, radius: usize) -> Option<&[CellState]> {
        let start = center.checked_sub(radius)?;
        self.cells.get(start..=center + radius)
    }

    /// Indices that are at least `margin` cells away from both edges.
    pub fn interior(&self, margin: usize) -> std::ops::Range<usize> {
        margin..self.width().saturating_sub(margin).max(margin)
    }

    pub fn count_cells(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    pub fn to_bits(&self) -> String {
        self.cells.iter().map(|cell| cell.as_char()).join("")
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bits())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn from_bit(bit: bool) -> Self {
        if bit { CellState::Alive } else { CellState::Dead }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(CellState::Dead),
            '1' => Some(CellState::Alive),
            _ => None,
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn as_bit(self) -> u8 {
        match self {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CellState::Alive => '1',
            CellState::Dead => '0',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_is_dead() {
        let row = Row::new(84);
        assert_eq!(row.width(), 84);
        assert_eq!(row.count_cells(CellState::Dead), 84);
    }

    #[test]
    fn bits_survive_parsing() {
        let row = Row::from_bits("0010110").unwrap();
        assert_eq!(row.count_cells(CellState::Alive), 3);
        assert_eq!(row.to_string(), "0010110");
        assert!(Row::from_bits("01x").is_none());
    }

    #[test]
    fn window_stays_inside_row() {
        let row = Row::from_bits("01101").unwrap();
        assert_eq!(Row::from_bits("110").unwrap().cells(), row.window(2, 1).unwrap());
        assert_eq!(row.window(2, 2).unwrap(), row.cells());
        assert!(row.window(0, 1).is_none());
        assert!(row.window(4, 1).is_none());
    }

    #[test]
    fn interior_excludes_margin() {
        let row = Row::new(9);
        assert_eq!(row.interior(1), 1..8);
        assert_eq!(row.interior(2), 2..7);
        assert!(Row::new(3).interior(2).is_empty());
    }
}
