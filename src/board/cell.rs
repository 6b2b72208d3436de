//! Cells and rows.
//!
//! A `Cell` is one grid position; a `Row` is a fixed-length run of cells
//! along one board line.

use super::terrain::Terrain;

/// One grid position: a terrain value plus a selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub terrain: Terrain,
    pub selected: bool,
}

impl Cell {
    /// Creates an unselected cell with the given terrain.
    pub const fn new(terrain: Terrain) -> Self {
        Cell {
            terrain,
            selected: false,
        }
    }

    /// Derived from the terrain; never stored.
    pub const fn is_selectable(&self) -> bool {
        self.terrain.is_selectable()
    }
}

/// An ordered run of cells. Length is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Creates a row of `cols` unselected grass cells.
    pub fn uniform(cols: usize) -> Self {
        Row {
            cells: vec![Cell::new(Terrain::Grass); cols],
        }
    }

    /// Creates a row matching `terrains` exactly.
    pub fn from_terrains(terrains: &[Terrain]) -> Self {
        Row {
            cells: terrains.iter().copied().map(Cell::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub(crate) fn get_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}
