//! # cubeplot-lut
//!
//! Reader and in-memory model for 3D color lookup tables stored in the
//! .cube text format.
//!
//! # Overview
//!
//! - [`LutGrid`] - dense `size^3` grid of RGB samples
//! - [`cube`] - line parser ([`cube::ParseState`]) and file reader
//! - [`CubeError`] - everything that can go wrong while reading
//!
//! 1D tables (`LUT_1D_SIZE`) are rejected.
//!
//! # Usage
//!
//! ```rust
//! use cubeplot_lut::parse_cube_str;
//!
//! let grid = parse_cube_str("TITLE \"Flat\"\nLUT_3D_SIZE 1\n0.5 0.5 0.5\n").unwrap();
//! assert_eq!(grid.title(), "Flat");
//! assert_eq!(grid.get(0, 0, 0), Some([0.5, 0.5, 0.5]));
//! ```
//!
//! # Dependencies
//!
//! - [`regex`] - line classification
//! - [`thiserror`] - error handling
//! - [`tracing`] - parse diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod grid;
pub mod cube;

pub use error::{CubeError, CubeResult, ErrorKind};
pub use grid::{LutGrid, MAX_SIZE};
pub use cube::{
    parse as parse_cube, parse_reader as parse_cube_reader, parse_str as parse_cube_str,
    read_cube, LineKind, ParseState,
};
