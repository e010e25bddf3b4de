//! Interactive 2D Repulsion Particle Simulation
//!
//! Thousands of particles push each other apart, bounce off the window edges
//! and can be dragged around with the left mouse button. Escape quits.

mod events;
mod gpu;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use events::EventTranslator;
use gpu::GpuError;
use particle_physics::SimulationConfig;
use particle_renderer::SurfaceCanvas;
use particle_simulation::{Clock, FrameDriver, ParticleStore, RawEvent, RunState, SystemClock};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Frames between window title refreshes
const TITLE_REFRESH_FRAMES: u64 = 60;

struct App {
    driver: FrameDriver,
    clock: SystemClock,
    title: String,

    window: Option<Arc<Window>>,
    canvas: Option<SurfaceCanvas>,

    translator: EventTranslator,
    // Events received since the last simulated frame
    pending: Vec<RawEvent>,
    next_frame_at: Option<Instant>,

    exit_code: ExitCode,
}

impl App {
    fn new(driver: FrameDriver, clock: SystemClock) -> Self {
        Self {
            title: driver.config().title.clone(),
            driver,
            clock,
            window: None,
            canvas: None,
            translator: EventTranslator::default(),
            pending: Vec::new(),
            next_frame_at: None,
            exit_code: ExitCode::SUCCESS,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), GpuError> {
        let config = self.driver.config();
        let window_attributes = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let canvas = pollster::block_on(gpu::create_canvas(window.clone(), config))?;

        log::info!("✓ Window and surface ready");
        self.window = Some(window);
        self.canvas = Some(canvas);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, message: impl std::fmt::Display) {
        log::error!("{message}");
        eprintln!("{message}");
        self.exit_code = ExitCode::FAILURE;
        event_loop.exit();
    }

    /// Simulate and draw one frame, then schedule the next wake-up
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(canvas)) = (&self.window, &mut self.canvas) else {
            return;
        };

        let frame_start = self.clock.now_ms();
        let state = self
            .driver
            .frame(self.pending.drain(..), frame_start, canvas);

        if state == RunState::Stopped {
            log::info!("Shutting down after {} frames", self.driver.frames());
            event_loop.exit();
            return;
        }

        if let Some(e) = canvas.take_fatal_error() {
            self.fail(event_loop, format!("Render error: {e:?}"));
            return;
        }

        let frames = self.driver.frames();
        if frames % TITLE_REFRESH_FRAMES == 0 {
            let stats = self.driver.stats();
            window.set_title(&format!(
                "{} - {:.0} FPS ({:.2}ms) - {} particles",
                self.title,
                stats.fps(),
                stats.average_frame_time_ms(),
                self.driver.store().len()
            ));
        }

        match self.driver.pacing_delay(frame_start, self.clock.now_ms()) {
            Some(delay) => {
                let wake = Instant::now() + Duration::from_millis(delay);
                self.next_frame_at = Some(wake);
                event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
            }
            None => {
                self.next_frame_at = None;
                event_loop.set_control_flow(ControlFlow::Poll);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::Resized(size) = event {
            if let Some(canvas) = &mut self.canvas {
                canvas.resize(size.width, size.height);
            }
            return;
        }

        let scale_factor = self
            .window
            .as_ref()
            .map_or(1.0, |window| window.scale_factor());
        if let Some(raw) = self.translator.translate(&event, scale_factor) {
            self.pending.push(raw);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Woken early by input: keep collecting until the frame is due
        if let Some(wake) = self.next_frame_at {
            if Instant::now() < wake {
                event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
                return;
            }
        }

        self.run_frame(event_loop);
    }
}

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug for per-second frame stats)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting particle simulation...");

    let config = SimulationConfig::default();
    let store = match ParticleStore::initialize(&config, &mut rand::rng()) {
        Ok(store) => store,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    let clock = SystemClock::new();
    let driver = FrameDriver::new(store, config, clock.now_ms());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(driver, clock);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }

    app.exit_code
}
