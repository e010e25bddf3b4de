use std::cell::Cell;
use std::collections::VecDeque;

use glam::Vec2;
use particle_physics::{Particle, Rgb, SimulationConfig};
use particle_simulation::{
    Canvas, Clock, EventSource, FrameDriver, Key, MouseButton, ParticleStore, RawEvent, RunState,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Scripted backend: one batch of events per frame, a fake clock that advances
/// by `frame_cost_ms` on every read after a poll, and recorded sleeps.
struct ScriptedPlatform {
    frames: VecDeque<Vec<RawEvent>>,
    now: Cell<u64>,
    frame_cost_ms: u64,
    sleeps: Cell<Vec<u64>>,
    presents: usize,
    drawn: Vec<(f32, f32)>,
}

impl ScriptedPlatform {
    fn new(frames: Vec<Vec<RawEvent>>, frame_cost_ms: u64) -> Self {
        Self {
            frames: frames.into(),
            now: Cell::new(0),
            frame_cost_ms,
            sleeps: Cell::new(Vec::new()),
            presents: 0,
            drawn: Vec::new(),
        }
    }

    fn sleeps(&self) -> Vec<u64> {
        let sleeps = self.sleeps.take();
        self.sleeps.set(sleeps.clone());
        sleeps
    }
}

impl Canvas for ScriptedPlatform {
    fn clear(&mut self, _color: Rgb) {
        self.drawn.clear();
    }

    fn draw_point(&mut self, x: f32, y: f32, _color: Rgb) {
        self.drawn.push((x, y));
    }

    fn present(&mut self) {
        self.presents += 1;
        self.now.set(self.now.get() + self.frame_cost_ms);
    }
}

impl Clock for ScriptedPlatform {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        let mut sleeps = self.sleeps.take();
        sleeps.push(ms);
        self.sleeps.set(sleeps);
        self.now.set(self.now.get() + ms);
    }
}

impl EventSource for ScriptedPlatform {
    fn poll_events(&mut self) -> Vec<RawEvent> {
        // Running out of script ends the session
        self.frames.pop_front().unwrap_or_else(|| vec![RawEvent::Quit])
    }
}

fn small_config() -> SimulationConfig {
    SimulationConfig {
        particle_count: 100,
        ..Default::default()
    }
}

#[test]
fn run_stops_on_quit_and_paces_fast_frames() {
    let config = small_config();
    let mut rng = StdRng::seed_from_u64(3);
    let store = ParticleStore::initialize(&config, &mut rng).unwrap();
    let mut driver = FrameDriver::new(store, config, 0);

    let mut platform = ScriptedPlatform::new(vec![Vec::new(); 5], 1);
    driver.run(&mut platform);

    assert_eq!(driver.state(), RunState::Stopped);
    // Five scripted frames plus the quit frame, which still runs and is paced
    assert_eq!(driver.frames(), 6);
    assert_eq!(platform.presents, 6);
    assert_eq!(platform.drawn.len(), 100);
    // 1 ms of work against a 4 ms interval
    assert_eq!(platform.sleeps(), vec![3; 6]);
}

#[test]
fn slow_frames_are_not_paced() {
    let config = small_config();
    let mut rng = StdRng::seed_from_u64(4);
    let store = ParticleStore::initialize(&config, &mut rng).unwrap();
    let mut driver = FrameDriver::new(store, config, 0);

    let mut platform = ScriptedPlatform::new(vec![Vec::new(); 3], 10);
    driver.run(&mut platform);

    assert_eq!(driver.frames(), 4);
    assert!(platform.sleeps().is_empty());
}

#[test]
fn escape_release_ends_run() {
    let config = small_config();
    let mut rng = StdRng::seed_from_u64(5);
    let store = ParticleStore::initialize(&config, &mut rng).unwrap();
    let mut driver = FrameDriver::new(store, config, 0);

    let mut platform = ScriptedPlatform::new(
        vec![
            Vec::new(),
            vec![RawEvent::KeyDown(Key::Escape)],
            Vec::new(),
            vec![RawEvent::KeyUp(Key::Escape)],
            Vec::new(),
        ],
        1,
    );
    driver.run(&mut platform);

    assert_eq!(driver.state(), RunState::Stopped);
    // The escape-release frame is the last one simulated
    assert_eq!(driver.frames(), 4);
    assert_eq!(platform.presents, 4);
    // The last scripted frame was never polled
    assert_eq!(platform.frames.len(), 1);
}

#[test]
fn drag_session_moves_particle_with_cursor() {
    let config = SimulationConfig::default();
    let store = ParticleStore::from_particles(vec![Particle::at_rest(Vec2::new(200.0, 200.0))])
        .unwrap();
    let mut driver = FrameDriver::new(store, config, 0);

    let mut frames = vec![vec![
        RawEvent::MouseMotion {
            x: 200.0,
            y: 200.0,
            dx: 0.0,
            dy: 0.0,
        },
        RawEvent::MouseDown(MouseButton::Left),
    ]];
    // Sweep right at 1 px per 4 ms frame = 250 px/s
    for step in 1..=20 {
        frames.push(vec![RawEvent::MouseMotion {
            x: 200.0 + step as f32,
            y: 200.0,
            dx: 1.0,
            dy: 0.0,
        }]);
    }
    frames.push(vec![RawEvent::MouseUp(MouseButton::Left)]);

    let mut platform = ScriptedPlatform::new(frames, 0);
    driver.run(&mut platform);

    let particle = driver.store().particles()[0];
    assert!(!driver.mouse().pressed);
    assert!(particle.velocity.x > 0.0, "vx = {}", particle.velocity.x);
    assert!(particle.position.x > 200.0);
    assert!(particle.velocity.x < 250.0);
    assert!(particle.velocity.y.abs() < 1e-4);
}

#[test]
fn long_run_keeps_particles_on_screen() {
    let config = SimulationConfig {
        particle_count: 150,
        initial_velocity: (-2000.0, 2000.0),
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(11);
    let store = ParticleStore::initialize(&config, &mut rng).unwrap();
    let (max_x, max_y) = (config.max_x(), config.max_y());
    let mut driver = FrameDriver::new(store, config, 0);

    // 50 ms frames with a held, fast-moving cursor
    let mut frames = vec![vec![RawEvent::MouseDown(MouseButton::Left)]];
    for step in 0..60 {
        frames.push(vec![RawEvent::MouseMotion {
            x: (step * 15) as f32,
            y: 300.0,
            dx: 15.0,
            dy: 0.0,
        }]);
    }
    let mut platform = ScriptedPlatform::new(frames, 50);
    driver.run(&mut platform);

    assert_eq!(driver.frames(), 62);
    for p in driver.store() {
        assert!(p.position.x >= 0.0 && p.position.x <= max_x);
        assert!(p.position.y >= 0.0 && p.position.y <= max_y);
        assert!(p.velocity.is_finite());
    }
}
