//! Command line configuration and defaults.

use clap::Parser;

use crate::{MazeError, MazeResult, camera::Viewer};

/// Internal framebuffer width in pixels
pub const DEFAULT_WIDTH: usize = 640;

/// Internal framebuffer height in pixels
pub const DEFAULT_HEIGHT: usize = 480;

/// Camera plane length for a ~66 degree field of view
pub const DEFAULT_PLANE: f64 = 0.66;

pub const START_POS: [f64; 2] = [1.5, 1.5];
pub const START_DIR: [f64; 2] = [1.0, 0.0];

/// Command line arguments for the maze viewer.
#[derive(Parser, Debug, Clone)]
#[command(name = "maze_caster")]
#[command(about = "First-person ray-cast view of a grid maze")]
#[command(version)]
pub struct Args {
    /// Framebuffer width in pixels (one ray per column)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Camera plane length; larger is a wider field of view
    #[arg(long, default_value_t = DEFAULT_PLANE)]
    pub plane: f64,

    /// Window title
    #[arg(long, default_value = "Maze Game")]
    pub title: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn validate(&self) -> MazeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidConfig(format!(
                "framebuffer must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.plane.is_finite() || self.plane <= 0.0 {
            return Err(MazeError::InvalidConfig(format!(
                "camera plane must be positive, got {}",
                self.plane
            )));
        }
        Ok(())
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::new(START_POS, START_DIR, [0.0, self.plane])
    }
}
