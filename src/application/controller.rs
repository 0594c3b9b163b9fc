use std::time::Duration;

use crate::config::DEFAULT_STEP_DELAY;
use crate::domain::{Grid, ScaleConfig};
use super::GridEngine;

/// Fastest pacing, in step-delay units (nanoseconds)
pub const MIN_STEP_DELAY: i64 = 1_000;
/// Slowest pacing, just under one second per generation
pub const MAX_STEP_DELAY: i64 = 999_999_999;
/// Step-delay change per unit of speed input; scrolling up speeds up
const SPEED_INCREMENT: i64 = -10_000_000;

/// Input signals the controller understands, in window pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// End the session
    Terminate,
    TogglePause,
    /// Signed number of speed units (wheel notches)
    AdjustSpeed(i32),
    /// Seed a blob under the pointer
    PrimaryClick { px: f32, py: f32 },
    /// Kill the cell under the pointer
    SecondaryClick { px: f32, py: f32 },
    Randomize,
    Clear,
}

/// Result of one controller tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Terminate,
}

/// Snapshot of controller state handed to the renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationStatus {
    pub paused: bool,
    pub generation: u64,
    pub population: usize,
    pub step_delay: i64,
    pub rule_name: &'static str,
}

/// Anything that can draw a generation
pub trait GridRenderer {
    fn draw(&mut self, grid: &Grid, scale: &ScaleConfig, status: &SimulationStatus);
}

/// Pause flag, pacing and generation counter.
/// Mutated only through input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    pub paused: bool,
    pub step_delay: i64,
    pub generation: u64,
    pub update_timer: Duration,
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            paused: false,
            step_delay: DEFAULT_STEP_DELAY,
            generation: 0,
            update_timer: Duration::ZERO,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_paused(mut self) -> Self {
        self.paused = !self.paused;
        self
    }

    /// Shift the step delay by `delta` speed units.
    /// Anything at or below zero snaps to the minimum delay.
    pub fn adjust_speed(mut self, delta: i32) -> Self {
        let delay = self
            .step_delay
            .saturating_add((delta as i64).saturating_mul(SPEED_INCREMENT));
        self.step_delay = if delay <= 0 {
            MIN_STEP_DELAY
        } else if delay >= MAX_STEP_DELAY {
            MAX_STEP_DELAY
        } else {
            delay
        };
        self
    }

    /// Time between generations
    pub fn step_interval(&self) -> Duration {
        Duration::from_nanos(self.step_delay.max(0) as u64)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

/// SimulationController drives a GridEngine from input and asks a renderer
/// to draw every tick.
pub struct SimulationController {
    engine: GridEngine,
    scale: ScaleConfig,
    state: SimulationState,
}

impl SimulationController {
    pub fn new(engine: GridEngine, scale: ScaleConfig) -> Self {
        Self {
            engine,
            scale,
            state: SimulationState::new(),
        }
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }

    pub fn status(&self) -> SimulationStatus {
        SimulationStatus {
            paused: self.state.paused,
            generation: self.state.generation,
            population: self.engine.population(),
            step_delay: self.state.step_delay,
            rule_name: self.engine.rule_name(),
        }
    }

    /// Apply one input event
    pub fn handle(&mut self, event: InputEvent) -> TickOutcome {
        match event {
            InputEvent::Terminate => return TickOutcome::Terminate,
            InputEvent::TogglePause => {
                self.state = self.state.toggle_paused();
                log::debug!("paused = {}", self.state.paused);
            }
            InputEvent::AdjustSpeed(delta) => {
                self.state = self.state.adjust_speed(delta);
                log::debug!("step delay = {}ns", self.state.step_delay);
            }
            InputEvent::PrimaryClick { px, py } => {
                let (x, y) = self.scale.screen_to_grid(px, py);
                self.engine.seed_blob(x, y);
            }
            InputEvent::SecondaryClick { px, py } => {
                let (x, y) = self.scale.screen_to_grid(px, py);
                let (width, height) = self.engine.dimensions();
                if x < width as i64 && y < height as i64 {
                    self.engine.clear_cell(x, y);
                }
            }
            InputEvent::Randomize => {
                self.engine.randomize();
                log::debug!("grid randomized, population {}", self.engine.population());
            }
            InputEvent::Clear => {
                self.engine.clear();
                log::debug!("grid cleared");
            }
        }
        TickOutcome::Continue
    }

    /// Advance the pacing timer and step once the delay has elapsed
    fn advance(&mut self, elapsed: Duration) {
        if self.state.paused {
            return;
        }

        self.state.update_timer += elapsed;
        if self.state.update_timer >= self.state.step_interval() {
            self.engine.step();
            self.state.generation += 1;
            self.state.update_timer = Duration::ZERO;
        }
    }

    /// One pass of the loop: drain input, pace, step, render
    pub fn tick(
        &mut self,
        elapsed: Duration,
        events: impl IntoIterator<Item = InputEvent>,
        renderer: &mut impl GridRenderer,
    ) -> TickOutcome {
        for event in events {
            if self.handle(event) == TickOutcome::Terminate {
                return TickOutcome::Terminate;
            }
        }

        self.advance(elapsed);

        let status = self.status();
        renderer.draw(self.engine.grid(), &self.scale, &status);
        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, CellTier};

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(usize, SimulationStatus)>,
    }

    impl GridRenderer for RecordingRenderer {
        fn draw(&mut self, grid: &Grid, _scale: &ScaleConfig, status: &SimulationStatus) {
            self.frames.push((grid.population(), *status));
        }
    }

    fn controller() -> SimulationController {
        let scale = ScaleConfig::from_tier(CellTier::default(), 640, 480);
        let engine = GridEngine::blank(scale.width, scale.height);
        SimulationController::new(engine, scale)
    }

    const LONG: Duration = Duration::from_secs(2);
    const NO_INPUT: [InputEvent; 0] = [];

    #[test]
    fn test_initial_state() {
        let state = SimulationState::new();
        assert!(!state.paused);
        assert_eq!(state.step_delay, 50_000_000);
        assert_eq!(state.step_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_speed_clamps_low() {
        let state = SimulationState::new().adjust_speed(5);
        assert_eq!(state.step_delay, 1_000);
        // From the minimum, one notch down lands on a regular step
        assert_eq!(state.adjust_speed(-1).step_delay, 10_001_000);
    }

    #[test]
    fn test_speed_clamps_high() {
        let state = SimulationState::new().adjust_speed(-200);
        assert_eq!(state.step_delay, 999_999_999);
        let state = SimulationState::new().adjust_speed(i32::MIN);
        assert_eq!(state.step_delay, 999_999_999);
    }

    #[test]
    fn test_speed_up_and_down() {
        let state = SimulationState::new().adjust_speed(1);
        assert_eq!(state.step_delay, 40_000_000);
        assert_eq!(state.adjust_speed(-2).step_delay, 60_000_000);
    }

    #[test]
    fn test_pause_twice_is_identity_and_never_steps() {
        let mut ctl = controller();
        ctl.engine.seed_blob(5, 5);
        let grid = ctl.engine().grid().clone();
        let mut renderer = RecordingRenderer::default();

        let events = [InputEvent::TogglePause, InputEvent::TogglePause];
        assert_eq!(ctl.tick(Duration::ZERO, events, &mut renderer), TickOutcome::Continue);

        assert!(!ctl.state().paused);
        assert_eq!(ctl.state().generation, 0);
        assert_eq!(ctl.engine().grid(), &grid);
    }

    #[test]
    fn test_paused_does_not_step() {
        let mut ctl = controller();
        let mut renderer = RecordingRenderer::default();

        ctl.tick(LONG, [InputEvent::TogglePause], &mut renderer);
        ctl.tick(LONG, NO_INPUT, &mut renderer);
        assert_eq!(ctl.state().generation, 0);
        assert!(renderer.frames.iter().all(|(_, status)| status.paused));

        ctl.tick(LONG, [InputEvent::TogglePause], &mut renderer);
        assert_eq!(ctl.state().generation, 1);
    }

    #[test]
    fn test_step_waits_for_delay() {
        let mut ctl = controller();
        let mut renderer = RecordingRenderer::default();

        ctl.tick(Duration::from_millis(20), NO_INPUT, &mut renderer);
        ctl.tick(Duration::from_millis(20), NO_INPUT, &mut renderer);
        assert_eq!(ctl.state().generation, 0);

        ctl.tick(Duration::from_millis(20), NO_INPUT, &mut renderer);
        assert_eq!(ctl.state().generation, 1);
        assert_eq!(renderer.frames.len(), 3);
    }

    #[test]
    fn test_terminate_stops_before_render() {
        let mut ctl = controller();
        let mut renderer = RecordingRenderer::default();

        let outcome = ctl.tick(LONG, [InputEvent::Terminate, InputEvent::Clear], &mut renderer);
        assert_eq!(outcome, TickOutcome::Terminate);
        assert!(renderer.frames.is_empty());
        assert_eq!(ctl.state().generation, 0);
    }

    #[test]
    fn test_primary_click_seeds_blob() {
        let mut ctl = controller();
        // Scale 1.0: cell (3, 2) spans x 100..130, y 58..82
        ctl.handle(InputEvent::PrimaryClick { px: 105.0, py: 60.0 });
        assert_eq!(ctl.engine().grid().get(3, 2), Some(Cell::Alive));
    }

    #[test]
    fn test_primary_click_in_margin_is_ignored() {
        let mut ctl = controller();
        // Maps to column 0, which the blob guard rejects
        ctl.handle(InputEvent::PrimaryClick { px: 5.0, py: 60.0 });
        assert_eq!(ctl.engine().population(), 0);
    }

    #[test]
    fn test_secondary_click_clears_cell() {
        let mut ctl = controller();
        ctl.engine.randomize();
        ctl.handle(InputEvent::SecondaryClick { px: 105.0, py: 60.0 });
        assert_eq!(ctl.engine().grid().get(3, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_secondary_click_outside_grid_is_ignored() {
        let mut ctl = controller();
        ctl.engine.randomize();
        let before = ctl.engine().grid().clone();

        ctl.handle(InputEvent::SecondaryClick { px: 639.0, py: 479.0 });
        ctl.handle(InputEvent::SecondaryClick { px: -40.0, py: -40.0 });
        assert_eq!(ctl.engine().grid(), &before);
    }

    #[test]
    fn test_render_receives_status() {
        let mut ctl = controller();
        let mut renderer = RecordingRenderer::default();

        ctl.tick(Duration::ZERO, [InputEvent::AdjustSpeed(1)], &mut renderer);
        let (population, status) = renderer.frames[0];
        assert_eq!(population, 0);
        assert_eq!(status.step_delay, 40_000_000);
        assert_eq!(status.rule_name, "HighLife");
    }

    #[test]
    fn test_clear_and_randomize_events() {
        let mut ctl = controller();
        ctl.handle(InputEvent::Randomize);
        assert!(ctl.engine().population() > 0);
        ctl.handle(InputEvent::Clear);
        assert_eq!(ctl.engine().population(), 0);
    }
}
