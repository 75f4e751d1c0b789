//! Dense 3D lookup table grid.
//!
//! A [`LutGrid`] holds `size^3` RGB samples addressed by integer grid
//! coordinates `(r, g, b)`. Samples are stored in the same raster order
//! a .cube file lists them: B varies fastest, then G, then R.

use crate::{CubeError, CubeResult};
use std::ops::Index;

/// Largest accepted `LUT_3D_SIZE`. Common tables are 17, 33 or 65.
pub const MAX_SIZE: usize = 256;

/// A parsed 3D lookup table.
///
/// # Structure
///
/// - `size^3` entries, each an RGB triple of `f64`
/// - Flattened as `(r * size + g) * size + b`
/// - Domain bounds fixed at `[0.0, 1.0]`
///
/// # Example
///
/// ```rust
/// use cubeplot_lut::parse_cube_str;
///
/// let grid = parse_cube_str("LUT_3D_SIZE 1\n0.25 0.5 0.75\n").unwrap();
/// assert_eq!(grid.size(), 1);
/// assert_eq!(grid[(0, 0, 0)], [0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LutGrid {
    samples: Vec<[f64; 3]>,
    size: usize,
    filled: usize,
    title: String,
    domain_min: f64,
    domain_max: f64,
}

impl LutGrid {
    /// Allocates a zero-filled grid of `size^3` samples.
    ///
    /// Fails with [`CubeError::InvalidSize`] when `size` is zero, above
    /// [`MAX_SIZE`], or when the allocation fails.
    /// `line` is the source line reported in that error.
    pub(crate) fn zeroed(size: usize, line: usize) -> CubeResult<Self> {
        let invalid = |reason: String| CubeError::InvalidSize { line, reason };

        if size == 0 {
            return Err(invalid("size must be at least 1".into()));
        }
        if size > MAX_SIZE {
            return Err(invalid(format!("{size} exceeds the maximum of {MAX_SIZE}")));
        }
        let total = size * size * size;

        let mut samples = Vec::new();
        samples
            .try_reserve_exact(total)
            .map_err(|e| invalid(format!("cannot allocate {total} entries: {e}")))?;
        samples.resize(total, [0.0; 3]);

        Ok(Self {
            samples,
            size,
            filled: 0,
            title: String::new(),
            domain_min: 0.0,
            domain_max: 1.0,
        })
    }

    /// Stores the next sample in raster order.
    ///
    /// Returns `false` without writing when the grid is already full.
    pub(crate) fn push(&mut self, rgb: [f64; 3]) -> bool {
        match self.samples.get_mut(self.filled) {
            Some(slot) => {
                *slot = rgb;
                self.filled += 1;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Per-axis resolution N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Title from the `TITLE` directive, without quotes. Empty if absent.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lower bound of the value domain.
    pub fn domain_min(&self) -> f64 {
        self.domain_min
    }

    /// Upper bound of the value domain.
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Returns the total number of entries in the grid.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.samples.len()
    }

    /// Number of samples read from the file.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// True when every grid cell was given by a data row.
    pub fn is_complete(&self) -> bool {
        self.filled == self.samples.len()
    }

    /// All samples in raster order.
    pub fn samples(&self) -> &[[f64; 3]] {
        &self.samples
    }

    #[inline]
    fn offset(&self, r: usize, g: usize, b: usize) -> usize {
        (r * self.size + g) * self.size + b
    }

    /// Gets the sample at grid position (r, g, b).
    pub fn get(&self, r: usize, g: usize, b: usize) -> Option<[f64; 3]> {
        if r >= self.size || g >= self.size || b >= self.size {
            return None;
        }
        Some(self.samples[self.offset(r, g, b)])
    }

    /// The `size * size` samples of red slice `r`, G-major then B.
    ///
    /// # Panics
    ///
    /// Panics if `r >= size`.
    pub fn slice_r(&self, r: usize) -> &[[f64; 3]] {
        let plane = self.size * self.size;
        &self.samples[r * plane..(r + 1) * plane]
    }

    /// Smallest and largest component over all samples.
    pub fn value_range(&self) -> (f64, f64) {
        self.samples
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

impl Index<(usize, usize, usize)> for LutGrid {
    type Output = [f64; 3];

    fn index(&self, (r, g, b): (usize, usize, usize)) -> &[f64; 3] {
        assert!(
            r < self.size && g < self.size && b < self.size,
            "grid coordinate ({r}, {g}, {b}) out of range for size {}",
            self.size
        );
        &self.samples[self.offset(r, g, b)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_grid_defaults() {
        let grid = LutGrid::zeroed(3, 1).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.entry_count(), 27);
        assert_eq!(grid.filled(), 0);
        assert!(!grid.is_complete());
        assert_eq!(grid.title(), "");
        assert_eq!(grid.domain_min(), 0.0);
        assert_eq!(grid.domain_max(), 1.0);
        assert!(grid.samples().iter().all(|s| *s == [0.0; 3]));
    }

    #[test]
    fn zero_size_rejected() {
        let err = LutGrid::zeroed(0, 4).unwrap_err();
        assert!(matches!(err, CubeError::InvalidSize { line: 4, .. }));
    }

    #[test]
    fn huge_size_rejected_without_wrapping() {
        let err = LutGrid::zeroed(usize::MAX / 2, 2).unwrap_err();
        assert!(matches!(err, CubeError::InvalidSize { line: 2, .. }));
    }

    #[test]
    fn size_limit() {
        assert!(LutGrid::zeroed(MAX_SIZE + 1, 3).is_err());
        assert!(LutGrid::zeroed(65, 3).is_ok());
    }

    #[test]
    fn push_fills_b_fastest() {
        let mut grid = LutGrid::zeroed(2, 1).unwrap();
        for k in 0..8 {
            assert!(grid.push([k as f64, 0.0, 0.0]));
        }
        assert!(grid.is_complete());
        assert!(!grid.push([9.0, 9.0, 9.0]));

        assert_eq!(grid[(0, 0, 1)][0], 1.0);
        assert_eq!(grid[(0, 1, 0)][0], 2.0);
        assert_eq!(grid[(1, 0, 0)][0], 4.0);
        assert_eq!(grid[(1, 1, 1)][0], 7.0);
        assert_eq!(grid.get(2, 0, 0), None);
    }

    #[test]
    fn slice_and_range() {
        let mut grid = LutGrid::zeroed(2, 1).unwrap();
        for k in 0..8 {
            grid.push([k as f64, -1.0, 0.5]);
        }
        let slice = grid.slice_r(1);
        assert_eq!(slice.len(), 4);
        assert_eq!(slice[0][0], 4.0);
        assert_eq!(grid.value_range(), (-1.0, 7.0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let grid = LutGrid::zeroed(2, 1).unwrap();
        let _ = grid[(0, 2, 0)];
    }
}
