//! Board representation.
//!
//! Contains the terrain enumeration, cells and rows, and the board that owns
//! them.

pub mod cell;
pub mod state;
pub mod terrain;

pub use cell::{Cell, Row};
pub use state::{Board, BoardError};
pub use terrain::{Terrain, TerrainInfo, ALL_TERRAINS, TERRAIN_COUNT, TERRAIN_INFO};
