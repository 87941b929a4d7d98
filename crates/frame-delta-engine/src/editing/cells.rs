use std::ops::Range;

use crate::editing::{Edit, PatchError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    /// Untouched character of the base string
    Original(char),
    /// Replacement, inserted or blanked content
    Text(String),
}

impl Cell {
    fn empty() -> Self {
        Cell::Text(String::new())
    }

    fn push_onto(&self, out: &mut String) {
        match self {
            Cell::Original(c) => out.push(*c),
            Cell::Text(text) => out.push_str(text),
        }
    }

    fn prepend(&mut self, data: &str) {
        let mut text = String::from(data);
        self.push_onto(&mut text);
        *self = Cell::Text(text);
    }
}

/// Offset-stable edit target: one cell per character of the base string.
///
/// Cells are never removed, only blanked or grown, so an offset into the
/// original base keeps naming the same cell for the lifetime of the buffer.
/// Inserts past the end append extra cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(base: &str) -> Self {
        Self {
            cells: base.chars().map(Cell::Original).collect(),
        }
    }

    /// Number of cells, including cells appended by inserts
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Apply one edit in place.
    ///
    /// The range is checked before anything is touched, so a rejected edit
    /// leaves the buffer as it was.
    pub fn apply(&mut self, edit: &Edit) -> Result<(), PatchError> {
        match edit {
            Edit::Delete { range } => {
                self.check_range(range)?;
                self.blank(range.clone());
            }
            Edit::Insert { at, data } => {
                if *at >= self.cells.len() {
                    self.cells.push(Cell::Text(data.clone()));
                } else {
                    self.cells[*at].prepend(data);
                }
            }
            Edit::Replace { range, data } => {
                self.check_range(range)?;
                if range.is_empty() {
                    return Err(PatchError::EmptyReplace { at: range.start });
                }
                self.blank(range.clone());
                self.cells[range.start] = Cell::Text(data.clone());
            }
        }
        Ok(())
    }

    /// Concatenate every cell in index order
    pub fn materialize(&self) -> String {
        let mut out = String::with_capacity(self.cells.len());
        for cell in &self.cells {
            cell.push_onto(&mut out);
        }
        out
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), PatchError> {
        if range.start > range.end {
            return Err(PatchError::InvertedRange {
                low: range.start,
                high: range.end,
            });
        }
        if range.end > self.cells.len() {
            return Err(PatchError::OutOfRange {
                index: range.end,
                len: self.cells.len(),
            });
        }
        Ok(())
    }

    fn blank(&mut self, range: Range<usize>) {
        for cell in &mut self.cells[range] {
            *cell = Cell::empty();
        }
    }
}
