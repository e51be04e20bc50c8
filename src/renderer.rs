use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{camera::Viewer, world::Grid};

/// Stand-in for `1 / 0` on a ray axis: large enough that the axis is never
/// chosen before a wall is reached, small enough to stay finite when summed.
const INV_CLAMP: f64 = 1e30;

/// Which kind of grid line the ray crossed to enter the wall cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// A vertical grid line (the ray stepped along x).
    Vertical,
    /// A horizontal grid line (the ray stepped along y).
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Primary,
    Dark,
}

impl From<Side> for Shade {
    fn from(side: Side) -> Self {
        match side {
            Side::Vertical => Shade::Primary,
            Side::Horizontal => Shade::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub cell: [usize; 2],
    /// Distance along the viewing axis, not along the ray.
    pub perp_dist: f64,
    pub side: Side,
    /// Grid lines crossed before the wall was found.
    pub steps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawInstruction {
    pub x: usize,
    pub top: usize,    // inclusive
    pub bottom: usize, // inclusive
    pub shade: Shade,
}

#[inline]
fn clamped_inverse(d: f64) -> f64 {
    if d.abs() < 1.0 / INV_CLAMP {
        if d < 0.0 { -INV_CLAMP } else { INV_CLAMP }
    } else {
        1.0 / d
    }
}

/// Walks the ray for screen column `x` through `grid` until it enters a wall.
pub fn cast_column(grid: &Grid, viewer: &Viewer, x: usize, screen_width: usize) -> RayHit {
    let camera_x = 2.0 * x as f64 / screen_width as f64 - 1.0;
    cast_ray(grid, viewer.pos, viewer.ray_dir(camera_x))
}

/// Grid DDA from `pos` along `ray`.
///
/// Terminates on any grid built through [`Grid`], since the border is solid
/// wall and `pos` is expected to lie strictly inside it.
pub fn cast_ray(grid: &Grid, pos: [f64; 2], ray: [f64; 2]) -> RayHit {
    let inv = [clamped_inverse(ray[0]), clamped_inverse(ray[1])];
    let delta = [inv[0].abs(), inv[1].abs()];

    let mut map = [pos[0].floor() as i64, pos[1].floor() as i64];
    let mut step = [0i64; 2];
    let mut side_dist = [0.0f64; 2];
    for axis in 0..2 {
        if ray[axis] < 0.0 {
            step[axis] = -1;
            side_dist[axis] = (pos[axis] - map[axis] as f64) * delta[axis];
        } else {
            step[axis] = 1;
            side_dist[axis] = (map[axis] as f64 + 1.0 - pos[axis]) * delta[axis];
        }
    }

    let mut steps = 0;
    let mut side;
    loop {
        // ties go to y
        let axis = if side_dist[0] < side_dist[1] { 0 } else { 1 };
        side_dist[axis] += delta[axis];
        map[axis] += step[axis];
        side = axis;
        steps += 1;

        if grid.is_wall(map[0] as usize, map[1] as usize) {
            break;
        }
    }

    let perp_dist = (map[side] as f64 - pos[side] + ((1 - step[side]) / 2) as f64) * inv[side];

    RayHit {
        cell: [map[0] as usize, map[1] as usize],
        perp_dist,
        side: if side == 0 {
            Side::Vertical
        } else {
            Side::Horizontal
        },
        steps,
    }
}

/// Wall height in pixels for a perpendicular distance; never negative.
#[inline]
pub fn line_height(screen_height: usize, perp_dist: f64) -> i64 {
    if perp_dist > 0.0 {
        // `as` saturates, so a wall hugging the eye becomes i64::MAX rather than UB
        (screen_height as f64 / perp_dist).floor() as i64
    } else {
        i64::MAX
    }
}

/// Inclusive `[top, bottom]` rows for a wall of `line_height`, centered and clipped.
#[inline]
pub fn wall_span(screen_height: usize, line_height: i64) -> (usize, usize) {
    let h = screen_height as i64;
    let half = line_height / 2;
    let top = (h / 2).saturating_sub(half).max(0);
    let bottom = half.saturating_add(h / 2).min(h - 1);
    (top as usize, bottom.max(0) as usize)
}

pub fn project(hit: &RayHit, x: usize, screen_height: usize) -> DrawInstruction {
    let lh = line_height(screen_height, hit.perp_dist);
    let (top, bottom) = wall_span(screen_height, lh);
    DrawInstruction {
        x,
        top,
        bottom,
        shade: hit.side.into(),
    }
}

/// One draw instruction per column, in column order.
///
/// Columns only read `grid` and `viewer`, so they are cast in parallel; the
/// indexed collect keeps the output ordered.
pub fn render_columns(
    grid: &Grid,
    viewer: &Viewer,
    width: usize,
    height: usize,
) -> Vec<DrawInstruction> {
    (0..width)
        .into_par_iter()
        .map(|x| {
            let hit = cast_column(grid, viewer, x, width);
            project(&hit, x, height)
        })
        .collect()
}
