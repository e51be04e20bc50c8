//! Property tests for the column renderer on random bordered grids.

use maze_caster::renderer::{line_height, wall_span};
use maze_caster::{Grid, Viewer, cast_column, render_columns};
use proptest::prelude::*;

/// A random layout wrapped in a wall border, plus a viewer strictly inside it.
fn scene() -> impl Strategy<Value = (Grid, Viewer)> {
    (1usize..10, 1usize..10)
        .prop_flat_map(|(w, h)| {
            (
                Just((w, h)),
                prop::collection::vec(prop::bool::weighted(0.3), w * h),
                0.0..(w as f64),
                0.0..(h as f64),
                0.0..std::f64::consts::TAU,
                0.1f64..2.0,
            )
        })
        .prop_map(|((w, h), walls, px, py, angle, plane_len)| {
            let rows: Vec<Vec<u8>> = walls
                .chunks(w)
                .map(|r| r.iter().map(|&b| b as u8).collect())
                .collect();
            let grid = Grid::with_border(&rows).unwrap();
            assert_eq!(grid.height(), h + 2);

            let dir = [angle.cos(), angle.sin()];
            let plane = [-dir[1] * plane_len, dir[0] * plane_len];
            let viewer = Viewer::new([px + 1.0, py + 1.0], dir, plane);
            (grid, viewer)
        })
}

proptest! {
    #[test]
    fn traversal_terminates_within_grid_extent(
        (grid, viewer) in scene(),
        width in 1usize..200,
    ) {
        let bound = grid.width() + grid.height();
        for x in 0..width {
            let hit = cast_column(&grid, &viewer, x, width);
            prop_assert!(hit.steps <= bound, "column {} took {} steps", x, hit.steps);
            prop_assert!(grid.is_wall(hit.cell[0], hit.cell[1]));
            prop_assert!(hit.perp_dist.is_finite());
            prop_assert!(hit.perp_dist >= 0.0);
        }
    }

    #[test]
    fn every_column_covered_and_clipped(
        (grid, viewer) in scene(),
        width in 1usize..200,
        height in 1usize..400,
    ) {
        let columns = render_columns(&grid, &viewer, width, height);
        prop_assert_eq!(columns.len(), width);
        for (i, ins) in columns.iter().enumerate() {
            prop_assert_eq!(ins.x, i);
            prop_assert!(ins.top <= ins.bottom);
            prop_assert!(ins.bottom <= height - 1);
        }
    }

    #[test]
    fn farther_walls_are_never_taller(
        height in 1usize..2000,
        near in 0.0f64..100.0,
        extra in 0.0f64..100.0,
    ) {
        let far = near + extra;
        prop_assert!(line_height(height, far) <= line_height(height, near));
    }

    #[test]
    fn span_stays_on_screen(height in 1usize..2000, lh in 0i64..i64::MAX) {
        let (top, bottom) = wall_span(height, lh);
        prop_assert!(top <= bottom);
        prop_assert!(bottom < height);
    }
}
