#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod surface;

pub use surface::{FrameSurface, Snapshot, alpha_blend_with_background};

use log::{debug, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use seed_life::World;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Debug, Error)]
pub enum AnimateError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window")]
    Window(#[from] OsError),
    #[error("pixel buffer failed")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize surface")]
    Texture(#[from] pixels::TextureError),
}

/// Opens a window the size of the world's canvas and steps the world every
/// `step_delay` until the window closes. `on_snapshot` receives a copy of the
/// last complete frame whenever S is pressed.
pub fn animate<W, F>(world: W, title: &str, on_snapshot: F) -> Result<(), AnimateError>
where
    W: World,
    F: FnMut(Snapshot),
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(world, title, on_snapshot);
    event_loop.run_app(&mut handler)?;
    handler.error.map_or(Ok(()), Err)
}

struct App<W: World> {
    world: W,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    next_update: Instant,
    paused: bool,
}

impl<W: World> App<W> {
    fn new(event_loop: &ActiveEventLoop, world: W, title: &str) -> Result<Self, AnimateError> {
        let window = Arc::new(Self::build_window(event_loop, &world, title)?);
        let pixels = Self::build_pixels(&window, &world)?;
        Ok(Self {
            world,
            window,
            pixels,
            next_update: Instant::now(),
            paused: false,
        })
    }

    fn build_window(event_loop: &ActiveEventLoop, world: &W, title: &str) -> Result<Window, OsError> {
        let (width, height) = world.canvas_size();
        let window_attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(width, height))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(window: &Arc<Window>, world: &W) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let (width, height) = world.canvas_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        if !self.paused {
            self.step();
        }

        let step_delay = self.world.step_delay();
        while self.next_update < Instant::now() {
            self.next_update += step_delay;
        }
    }

    fn step(&mut self) {
        self.world.update();
        self.window.request_redraw();
    }

    fn on_redraw(&mut self) -> Result<(), pixels::Error> {
        let (width, height) = self.world.canvas_size();
        let mut surface = FrameSurface::new(width, height, self.pixels.frame_mut());
        self.world.render(&mut surface);
        self.pixels.render()
    }

    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "unpaused" });
    }

    fn snapshot(&self) -> Snapshot {
        let (width, height) = self.world.canvas_size();
        Snapshot::capture(width, height, self.pixels.frame())
    }
}

struct AppEventHandler<W, F>
where
    W: World,
    F: FnMut(Snapshot),
{
    world: Option<W>,
    title: String,
    on_snapshot: F,
    app: Option<App<W>>,
    error: Option<AnimateError>,
}

impl<W, F> AppEventHandler<W, F>
where
    W: World,
    F: FnMut(Snapshot),
{
    fn new(world: W, title: &str, on_snapshot: F) -> Self {
        Self {
            world: Some(world),
            title: title.to_string(),
            on_snapshot,
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: impl Into<AnimateError>) {
        self.error.get_or_insert(error.into());
        event_loop.exit();
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match code {
            KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                event_loop.exit();
            }
            KeyCode::KeyP => app.toggle_pause(),
            KeyCode::Space => {
                app.paused = true;
                app.step();
                debug!("frame advanced");
            }
            KeyCode::KeyS => {
                let snapshot = app.snapshot();
                info!("captured {}x{} snapshot", snapshot.width, snapshot.height);
                (self.on_snapshot)(snapshot);
            }
            _ => (),
        }
    }
}

impl<W, F> ApplicationHandler for AppEventHandler<W, F>
where
    W: World,
    F: FnMut(Snapshot),
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let (StartCause::ResumeTimeReached { .. }, Some(app)) = (cause, self.app.as_mut()) {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(world) = self.world.take() else {
            return;
        };
        match App::new(event_loop, world, &self.title) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(error) => self.fail(event_loop, error),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => self.on_key(event_loop, code),
            WindowEvent::Resized(size) => {
                if let Some(Err(error)) = self.app.as_mut().map(|app| app.on_resize(size.width, size.height)) {
                    self.fail(event_loop, error);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(Err(error)) = self.app.as_mut().map(|app| app.on_redraw()) {
                    self.fail(event_loop, error);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = self.app.as_ref() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(app.next_update));
        }
    }
}
