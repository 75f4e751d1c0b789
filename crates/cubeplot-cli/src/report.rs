//! Scene output.

use crate::wireframe::Scene;
use anyhow::Result;
use cubeplot_lut::LutGrid;
use std::path::Path;

/// Prints a human-readable summary of the LUT and its wireframe.
pub fn print_text(path: &Path, grid: &LutGrid, scene: &Scene) {
    let title = if grid.title().is_empty() { "(none)" } else { grid.title() };
    let (min, max) = grid.value_range();

    println!("{}", path.display());
    println!("  Title:      {title}");
    println!("  Size:       {0}x{0}x{0}", grid.size());
    println!("  Rows:       {}/{}", grid.filled(), grid.entry_count());
    println!("  Domain:     [{}, {}]", grid.domain_min(), grid.domain_max());
    println!("  Min value:  {min:.6}");
    println!("  Max value:  {max:.6}");
    println!("  Skip:       {}", scene.skip);
    println!("  Slices:     {}", scene.slices.len());
    println!("  Polylines:  {}", scene.line_count());

    if !grid.is_complete() {
        println!("  Warning:    grid is not fully populated, missing cells are zero");
    }
}

/// Prints the whole scene as JSON.
pub fn print_json(scene: &Scene) -> Result<()> {
    println!("{}", to_json(scene)?);
    Ok(())
}

fn to_json(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeplot_lut::parse_cube_str;
    use std::num::NonZeroUsize;

    #[test]
    fn json_carries_scene() {
        let grid = parse_cube_str("TITLE \"Json\"\nLUT_3D_SIZE 2\n0 0 0\n0 0 1\n0 1 0\n0 1 1\n1 0 0\n1 0 1\n1 1 0\n1 1 1\n")
            .unwrap();
        let scene = Scene::build(&grid, NonZeroUsize::MIN);
        let value: serde_json::Value = serde_json::from_str(&to_json(&scene).unwrap()).unwrap();

        assert_eq!(value["title"], "Json");
        assert_eq!(value["size"], 2);
        assert_eq!(value["axis_labels"][2], "B");
        assert_eq!(value["outer_box"].as_array().unwrap().len(), 12);
        assert_eq!(value["slices"].as_array().unwrap().len(), 2);
        assert_eq!(value["slices"][1]["lines"][0]["points"][1][2], 1.0);
    }
}
