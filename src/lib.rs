//! # maze_caster
//!
//! First-person view of a grid maze using per-column ray casting.
//!
//! - [`world`]: the bordered occupancy grid
//! - [`camera`]: viewer position, facing and camera plane
//! - [`renderer`]: grid DDA and projection into per-column draw instructions
//! - [`surface`]: drawing primitives and the framebuffer that implements them
//! - [`scaler`]: stretching the framebuffer onto the window
//!
//! The renderer is a pure function of grid, viewer and screen size; nothing in
//! it touches a window, so it can be tested headless.

pub mod camera;
pub mod config;
pub mod renderer;
pub mod scaler;
pub mod surface;
pub mod world;

pub use camera::Viewer;
pub use renderer::{DrawInstruction, RayHit, Shade, Side, cast_column, cast_ray, render_columns};
pub use surface::{DrawSurface, Framebuffer, Palette, Rgba, draw_columns};
pub use world::{Cell, Grid, GridError};

/// Core error type for the maze viewer.
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    /// Grid or viewer placement is invalid
    #[error("Invalid maze: {0}")]
    Grid(#[from] GridError),

    /// Command line configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The windowing event loop could not start or failed while running
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// softbuffer could not create, resize or present the surface
    #[error("Surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Result type used throughout the crate.
pub type MazeResult<T> = Result<T, MazeError>;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
