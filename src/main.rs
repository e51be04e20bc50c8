use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use maze_caster::config::Args;
use maze_caster::scaler::{ScaleLut, blit_nearest_stretch, build_scale_lut};
use maze_caster::{
    Framebuffer, Grid, MazeError, MazeResult, Palette, Viewer, draw_columns, render_columns,
};

struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    title: String,

    grid: Grid,
    viewer: Viewer,
    palette: Palette,

    // Fixed-size internal buffer, stretched onto the window
    fb: Framebuffer,
    scale_lut: ScaleLut,

    // HUD
    frame_counter: u32,
    last_fps_print: Instant,

    // First fatal error seen inside the event loop
    error: Option<MazeError>,
}

impl App {
    fn new(args: &Args, grid: Grid, viewer: Viewer) -> Self {
        Self {
            window: None,
            surface: None,
            title: args.title.clone(),
            grid,
            viewer,
            palette: Palette::default(),
            fb: Framebuffer::new(args.width, args.height),
            scale_lut: ScaleLut::empty(),
            frame_counter: 0,
            last_fps_print: Instant::now(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: MazeError) {
        error!("{err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> MazeResult<()> {
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.fb.width as u32,
                self.fb.height as u32,
            ));

        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;

        let size = window.inner_size();
        info!(
            "window created: {}x{} (framebuffer {}x{})",
            size.width, size.height, self.fb.width, self.fb.height
        );

        window.request_redraw();
        self.surface = Some(surface);
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self, id: WindowId) -> MazeResult<()> {
        let (window, surface) = match (&self.window, &mut self.surface) {
            (Some(w), Some(s)) if w.id() == id => (w, s),
            _ => return Ok(()),
        };

        let size = window.inner_size();
        let (Some(nw), Some(nh)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(()); // Minimized window, skip drawing
        };
        let (dw, dh) = (size.width as usize, size.height as usize);

        surface.resize(nw, nh)?;
        if self.scale_lut.dst_size() != (dw, dh) {
            self.scale_lut = build_scale_lut(dw, dh, self.fb.width, self.fb.height);
        }

        let columns = render_columns(&self.grid, &self.viewer, self.fb.width, self.fb.height);
        draw_columns(&mut self.fb, &columns, &self.palette);

        let mut buf = surface.buffer_mut()?;
        blit_nearest_stretch(&mut buf, dw, &self.fb.pixels, &self.scale_lut);
        buf.present()?;

        self.frame_counter += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_print).as_secs_f32();
        if elapsed >= 1.0 {
            debug!("FPS: {:.1}", self.frame_counter as f32 / elapsed);
            self.frame_counter = 0;
            self.last_fps_print = now;
        }
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_surface(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested; stopping");
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw(id) {
                    self.fail(event_loop, err);
                }
            }

            WindowEvent::Resized(new_size) => {
                debug!("resized to {}x{}", new_size.width, new_size.height);
            }
            _ => (),
        }
    }

    // One redraw request per loop iteration keeps the frame loop running.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

fn main() -> MazeResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);
    info!("Starting maze_caster v{}", maze_caster::VERSION);

    args.validate()?;
    let grid = Grid::reference();
    let viewer = args.viewer();
    grid.check_viewer(&viewer)?;
    info!(
        "grid {}x{}, viewer at {:?} facing {:?}, fov {:.1} deg",
        grid.width(),
        grid.height(),
        viewer.pos,
        viewer.dir,
        viewer.fov_degrees()
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(&args, grid, viewer);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
