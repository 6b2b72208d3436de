//! Board state.
//!
//! A `Board` owns a rectangular grid of rows plus the cell geometry scalars.
//! Dimensions are fixed for the lifetime of the board; reshaping means
//! building a new one.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::cell::{Cell, Row};
use super::terrain::Terrain;
use crate::geometry::{contains, hex_vertices, Point, HEX_WIDTH_RATIO};

/// Errors raised by board construction and cell access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols}: both must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A rectangular hex grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: Vec<Row>,
    cols: usize,
    cell_height: f64,
    /// Last file this board was saved to or opened from.
    last_path: Option<PathBuf>,
}

impl Board {
    /// Builds a `rows` x `cols` board of unselected grass cells.
    pub fn new(rows: usize, cols: usize, cell_height: f64) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimension { rows, cols });
        }
        Ok(Board {
            rows: (0..rows).map(|_| Row::uniform(cols)).collect(),
            cols,
            cell_height,
            last_path: None,
        })
    }

    /// Builds a board matching `grid` exactly, all cells unselected.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_terrains<R: AsRef<[Terrain]>>(
        grid: &[R],
        cell_height: f64,
    ) -> Result<Self, BoardError> {
        let cols = grid.first().map_or(0, |r| r.as_ref().len());
        if grid.is_empty() || cols == 0 {
            return Err(BoardError::InvalidDimension {
                rows: grid.len(),
                cols,
            });
        }

        let mut rows = Vec::with_capacity(grid.len());
        for (y, terrains) in grid.iter().enumerate() {
            let terrains = terrains.as_ref();
            if terrains.len() != cols {
                return Err(BoardError::RaggedGrid {
                    row: y,
                    expected: cols,
                    found: terrains.len(),
                });
            }
            rows.push(Row::from_terrains(terrains));
        }

        Ok(Board {
            rows,
            cols,
            cell_height,
            last_path: None,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Always derived from the cell height.
    pub fn cell_width(&self) -> f64 {
        self.cell_height * HEX_WIDTH_RATIO
    }

    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    pub fn set_last_path(&mut self, path: impl Into<PathBuf>) {
        self.last_path = Some(path.into());
    }

    /// Returns the cell at (`row`, `col`).
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        let err = self.out_of_bounds(row, col);
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(err)
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> BoardError {
        BoardError::OutOfBounds {
            row,
            col,
            rows: self.row_count(),
            cols: self.cols,
        }
    }

    /// Overwrites one cell's terrain. Selection is left alone.
    pub fn set_terrain(
        &mut self,
        row: usize,
        col: usize,
        terrain: Terrain,
    ) -> Result<(), BoardError> {
        self.cell_mut(row, col)?.terrain = terrain;
        Ok(())
    }

    pub fn select(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.cell_mut(row, col)?.selected = true;
        Ok(())
    }

    pub fn deselect(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.cell_mut(row, col)?.selected = false;
        Ok(())
    }

    /// Deselects every selected cell. Idempotent.
    pub fn clear_selection(&mut self) {
        for row in &mut self.rows {
            for cell in row.cells_mut() {
                cell.selected = false;
            }
        }
    }

    /// Iterates the (row, col) coordinates of selected cells in row-major order.
    pub fn selected_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.cells()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.selected)
                .map(move |(x, _)| (y, x))
        })
    }

    /// Iterates terrains row by row.
    pub fn terrain_rows(&self) -> impl Iterator<Item = Vec<Terrain>> + '_ {
        self.rows
            .iter()
            .map(|row| row.cells().iter().map(|c| c.terrain).collect())
    }

    /// Hexagon outline shared by every cell, in cell-local coordinates.
    pub fn cell_polygon(&self) -> [Point; 6] {
        hex_vertices(self.cell_width(), self.cell_height)
    }

    /// Hit-tests a point given in cell-local coordinates.
    pub fn cell_contains(&self, point: Point) -> bool {
        contains(&self.cell_polygon(), point)
    }

    /// Writes a full grid of terrains in place. Caller guarantees the shape.
    pub(crate) fn fill_terrains(&mut self, terrains: &[Vec<Terrain>]) {
        for (row, values) in self.rows.iter_mut().zip(terrains) {
            for (cell, terrain) in row.cells_mut().zip(values) {
                cell.terrain = *terrain;
            }
        }
    }
}
