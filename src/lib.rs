//! Hexboard library.
//!
//! Exposes the hex-grid board model, hexagon geometry, JSON/XML persistence,
//! and the editor command layer used by the binary entry point.

pub mod board;
pub mod codec;
pub mod command;
pub mod editor;
pub mod geometry;
