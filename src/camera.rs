/// Viewer state: where the eye is and which way it looks.
///
/// `plane` is perpendicular to `dir`; its length relative to `dir` sets the
/// horizontal field of view. Fields are public so a caller can move the viewer
/// between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewer {
    pub pos: [f64; 2],   // (x, y) in grid-cell units
    pub dir: [f64; 2],   // facing direction
    pub plane: [f64; 2], // camera plane
}

impl Viewer {
    pub fn new(pos: [f64; 2], dir: [f64; 2], plane: [f64; 2]) -> Self {
        Self { pos, dir, plane }
    }

    /// Builds a viewer whose camera plane spans `fov_deg` degrees horizontally.
    /// The plane points to the right of `dir` when +y is down the screen.
    pub fn with_fov(pos: [f64; 2], dir: [f64; 2], fov_deg: f64) -> Self {
        let half = 0.5 * fov_deg.to_radians();
        let k = half.tan();
        let plane = [-dir[1] * k, dir[0] * k];
        Self { pos, dir, plane }
    }

    /// Horizontal field of view in degrees.
    pub fn fov_degrees(&self) -> f64 {
        let dir_len = self.dir[0].hypot(self.dir[1]);
        let plane_len = self.plane[0].hypot(self.plane[1]);
        2.0 * (plane_len / dir_len).atan().to_degrees()
    }

    /// Ray direction for a camera-space offset in [-1, 1).
    #[inline]
    pub fn ray_dir(&self, camera_x: f64) -> [f64; 2] {
        [
            self.dir[0] + self.plane[0] * camera_x,
            self.dir[1] + self.plane[1] * camera_x,
        ]
    }
}
