//! Wireframe scene for a LUT grid.
//!
//! Turns a [`LutGrid`] into line geometry a 3D plotting backend can draw
//! as is: the domain box plus one wireframe per sub-sampled red slice.
//! Each slice maps its (G, B) lattice to the sampled output colors, so a
//! pass-through LUT shows up as evenly spaced flat planes.

use cubeplot_lut::LutGrid;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Plain RGB color, components in `[0, 1]`.
pub type Color = [f32; 3];

const BLACK: Color = [0.0, 0.0, 0.0];

/// Connected line through 3D points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<[f64; 3]>,
    pub color: Color,
}

/// Wireframe of one red slice of the grid.
#[derive(Debug, Clone, Serialize)]
pub struct Slice {
    /// Red grid index of this slice.
    pub red_index: usize,
    pub color: Color,
    pub lines: Vec<Polyline>,
}

/// Everything needed to draw a LUT.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub title: String,
    pub axis_labels: [&'static str; 3],
    pub size: usize,
    pub skip: usize,
    pub domain: [f64; 2],
    pub outer_box: Vec<Polyline>,
    pub slices: Vec<Slice>,
}

impl Scene {
    /// Builds the scene, drawing every `skip`-th grid line.
    ///
    /// Slices `0, skip, 2*skip, ...` are colored along the HSV wheel by
    /// their red index. When the last slice `size - 1` is not on that
    /// stride it is added as well, colored `hsv(1.0)`.
    pub fn build(grid: &LutGrid, skip: NonZeroUsize) -> Self {
        let n = grid.size();
        let skip = skip.get();

        let mut slices: Vec<Slice> = (0..n)
            .step_by(skip)
            .map(|i| slice(grid, i, skip, hsv(i as f32 / n as f32)))
            .collect();
        if (n - 1) % skip != 0 {
            slices.push(slice(grid, n - 1, skip, hsv(1.0)));
        }

        Self {
            title: grid.title().to_string(),
            axis_labels: ["R", "G", "B"],
            size: n,
            skip,
            domain: [grid.domain_min(), grid.domain_max()],
            outer_box: outer_box(grid.domain_min(), grid.domain_max()),
            slices,
        }
    }

    /// Total number of polylines, box edges included.
    pub fn line_count(&self) -> usize {
        self.outer_box.len() + self.slices.iter().map(|s| s.lines.len()).sum::<usize>()
    }
}

/// The 12 edges of the cube `[lo, hi]^3`.
fn outer_box(lo: f64, hi: f64) -> Vec<Polyline> {
    let ends = [lo, hi];
    let mut edges = Vec::with_capacity(12);
    for axis in 0..3 {
        for &u in &ends {
            for &v in &ends {
                let mut a = [0.0; 3];
                let mut b = [0.0; 3];
                // The two fixed coordinates are the axes other than `axis`.
                a[(axis + 1) % 3] = u;
                a[(axis + 2) % 3] = v;
                b[(axis + 1) % 3] = u;
                b[(axis + 2) % 3] = v;
                a[axis] = lo;
                b[axis] = hi;
                edges.push(Polyline {
                    points: vec![a, b],
                    color: BLACK,
                });
            }
        }
    }
    edges
}

/// Sub-sampled wireframe of red slice `r`: one polyline per kept G row
/// (running over B) and one per kept B column (running over G).
fn slice(grid: &LutGrid, r: usize, skip: usize, color: Color) -> Slice {
    let n = grid.size();
    let plane = grid.slice_r(r);
    let kept: Vec<usize> = (0..n).step_by(skip).collect();

    let mut lines = Vec::with_capacity(kept.len() * 2);
    if kept.len() > 1 {
        for &g in &kept {
            lines.push(Polyline {
                points: kept.iter().map(|&b| plane[g * n + b]).collect(),
                color,
            });
        }
        for &b in &kept {
            lines.push(Polyline {
                points: kept.iter().map(|&g| plane[g * n + b]).collect(),
                color,
            });
        }
    }

    Slice {
        red_index: r,
        color,
        lines,
    }
}

/// HSV colormap at full saturation and value. `0.0` and `1.0` are red.
pub fn hsv(h: f32) -> Color {
    let h6 = (h.clamp(0.0, 1.0) * 6.0) % 6.0;
    let x = 1.0 - ((h6 % 2.0) - 1.0).abs();
    match h6 as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cubeplot_lut::parse_cube_str;

    fn identity(n: usize) -> LutGrid {
        let mut text = format!("TITLE \"Identity\"\nLUT_3D_SIZE {n}\n");
        let step = (n - 1).max(1) as f64;
        for r in 0..n {
            for g in 0..n {
                for b in 0..n {
                    text.push_str(&format!(
                        "{} {} {}\n",
                        r as f64 / step,
                        g as f64 / step,
                        b as f64 / step
                    ));
                }
            }
        }
        parse_cube_str(&text).expect("identity parses")
    }

    fn skip(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn hsv_wheel() {
        assert_eq!(hsv(0.0), [1.0, 0.0, 0.0]);
        assert_eq!(hsv(1.0), [1.0, 0.0, 0.0]);
        let green = hsv(1.0 / 3.0);
        assert_relative_eq!(green[0], 0.0, epsilon = 1e-5);
        assert_relative_eq!(green[1], 1.0, epsilon = 1e-5);
        assert_eq!(hsv(0.5), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn box_edges_span_domain() {
        let edges = outer_box(0.0, 1.0);
        assert_eq!(edges.len(), 12);
        for edge in &edges {
            let [a, b] = [edge.points[0], edge.points[1]];
            let differing = (0..3).filter(|&i| a[i] != b[i]).count();
            assert_eq!(differing, 1);
            assert_eq!(edge.color, BLACK);
        }
    }

    #[test]
    fn slices_on_stride_plus_last() {
        // 9 - 1 = 8 is a multiple of 4: no extra slice.
        let scene = Scene::build(&identity(9), skip(4));
        let reds: Vec<usize> = scene.slices.iter().map(|s| s.red_index).collect();
        assert_eq!(reds, vec![0, 4, 8]);

        let scene = Scene::build(&identity(6), skip(4));
        let reds: Vec<usize> = scene.slices.iter().map(|s| s.red_index).collect();
        assert_eq!(reds, vec![0, 4, 5]);
        assert_eq!(scene.slices[2].color, hsv(1.0));
    }

    #[test]
    fn slice_lines_follow_grid() {
        let grid = identity(5);
        let scene = Scene::build(&grid, skip(2));
        let first = &scene.slices[0];

        // Kept indices 0, 2, 4: three rows and three columns.
        assert_eq!(first.lines.len(), 6);
        let row = &first.lines[1];
        assert_eq!(row.points.len(), 3);
        assert_eq!(row.points[0], grid[(0, 2, 0)]);
        assert_eq!(row.points[2], grid[(0, 2, 4)]);
        let col = &first.lines[3];
        assert_eq!(col.points[1], grid[(0, 2, 0)]);

        assert_eq!(scene.line_count(), 12 + 3 * 6);
    }

    #[test]
    fn single_cell_grid() {
        let grid = parse_cube_str("LUT_3D_SIZE 1\n0.5 0.5 0.5\n").unwrap();
        let scene = Scene::build(&grid, skip(4));
        assert_eq!(scene.slices.len(), 1);
        assert!(scene.slices[0].lines.is_empty());
        assert_eq!(scene.title, "");
        assert_eq!(scene.axis_labels, ["R", "G", "B"]);
    }
}
