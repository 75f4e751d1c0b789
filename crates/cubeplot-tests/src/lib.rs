//! Integration tests for cubeplot crates.
//!
//! Cube files are written to a temporary directory and read back through
//! the public file API.
