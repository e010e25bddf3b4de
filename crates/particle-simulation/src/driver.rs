//! Frame driver: dt clamping, input, physics, draw hand-off and pacing

use std::collections::VecDeque;

use particle_physics::{MouseState, SimulationConfig};

use crate::input::{InputAdapter, RawEvent};
use crate::integrator;
use crate::platform::{Canvas, Platform};
use crate::store::ParticleStore;

/// Frames averaged for the FPS readout
const FRAME_TIME_WINDOW: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Terminal
    Stopped,
}

/// Convert elapsed wall time to a simulation timestep, capped at `max_dt`.
pub fn clamp_dt(elapsed_ms: u64, max_dt: f32) -> f32 {
    (elapsed_ms as f32 / 1000.0).min(max_dt)
}

/// Rolling frame-time statistics
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    frame_times: VecDeque<f32>,
    frames: u64,
    last_report_ms: u64,
}

impl FrameStats {
    fn record(&mut self, frame_time_ms: f32, now_ms: u64) {
        self.frame_times.push_back(frame_time_ms);
        if self.frame_times.len() > FRAME_TIME_WINDOW {
            self.frame_times.pop_front();
        }
        self.frames += 1;

        if now_ms.saturating_sub(self.last_report_ms) >= 1000 {
            self.last_report_ms = now_ms;
            log::debug!(
                "frame {}: {:.0} FPS ({:.2}ms avg)",
                self.frames,
                self.fps(),
                self.average_frame_time_ms()
            );
        }
    }

    /// Simulated frames so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn average_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }

    pub fn fps(&self) -> f32 {
        let avg = self.average_frame_time_ms();
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }
}

pub struct FrameDriver {
    config: SimulationConfig,
    store: ParticleStore,
    input: InputAdapter,
    state: RunState,
    last_frame_ms: u64,
    stats: FrameStats,
}

impl FrameDriver {
    /// `start_ms` is the clock reading the first frame's dt is measured from.
    pub fn new(store: ParticleStore, config: SimulationConfig, start_ms: u64) -> Self {
        log::info!(
            "Frame driver ready: {} particles, {}x{}, target {} FPS{}",
            store.len(),
            config.width,
            config.height,
            config.target_fps,
            if config.limit_fps { "" } else { " (unlimited)" }
        );

        Self {
            input: InputAdapter::new(&config),
            config,
            store,
            state: RunState::Running,
            last_frame_ms: start_ms,
            stats: FrameStats {
                last_report_ms: start_ms,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn mouse(&self) -> &MouseState {
        self.input.mouse()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn frames(&self) -> u64 {
        self.stats.frames()
    }

    /// Run one frame at wall time `now_ms`.
    ///
    /// A stop request in `events` still lets this frame simulate and draw;
    /// the driver reports [`RunState::Stopped`] afterwards. Once stopped,
    /// further calls do nothing.
    pub fn frame<I, C>(&mut self, events: I, now_ms: u64, canvas: &mut C) -> RunState
    where
        I: IntoIterator<Item = RawEvent>,
        C: Canvas + ?Sized,
    {
        if self.state == RunState::Stopped {
            return self.state;
        }

        let elapsed_ms = now_ms.saturating_sub(self.last_frame_ms);
        let dt = clamp_dt(elapsed_ms, self.config.max_dt);
        self.last_frame_ms = now_ms;

        let stop_requested = self.input.apply(events, dt).stop_requested;

        integrator::step(&mut self.store, self.input.mouse(), &self.config, dt);
        self.draw(canvas);

        self.stats.record(elapsed_ms as f32, now_ms);

        if stop_requested {
            log::info!("Stop requested after {} frames", self.stats.frames());
            self.state = RunState::Stopped;
        }
        self.state
    }

    /// How long to idle after a frame that started at `frame_start_ms`.
    /// `None` when the frame already used up the interval or pacing is off.
    pub fn pacing_delay(&self, frame_start_ms: u64, now_ms: u64) -> Option<u64> {
        if !self.config.limit_fps {
            return None;
        }

        let interval = self.config.frame_interval_ms();
        let frame_time = now_ms.saturating_sub(frame_start_ms);
        (frame_time < interval).then(|| interval - frame_time)
    }

    /// Blocking loop until a stop request arrives
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        while self.state == RunState::Running {
            let frame_start = platform.now_ms();
            let events = platform.poll_events();
            self.frame(events, frame_start, platform);

            if let Some(delay) = self.pacing_delay(frame_start, platform.now_ms()) {
                platform.sleep_ms(delay);
            }
        }
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear(self.config.background);
        for particle in &self.store {
            canvas.draw_point(particle.position.x, particle.position.y, particle.color);
        }
        canvas.present();
    }
}
