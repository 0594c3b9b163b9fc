mod controller;
mod engine;

pub use controller::{
    GridRenderer, InputEvent, SimulationController, SimulationState, SimulationStatus,
    TickOutcome, MAX_STEP_DELAY, MIN_STEP_DELAY,
};
pub use engine::GridEngine;

use crate::config::SessionConfig;

/// Size, seed and wrap a new engine for the given configuration
pub fn start_session(config: &SessionConfig) -> SimulationController {
    let scale = config.scale();
    let rule = config.rule.build();
    let engine = match config.seed {
        Some(seed) => GridEngine::with_seed(scale.width, scale.height, config.seed_mode, rule, seed),
        None => GridEngine::new(scale.width, scale.height, config.seed_mode, rule),
    };

    log::info!(
        "Session started: {}x{} cells, tier {}, {:?} start, rule {} ({}), population {}",
        scale.width,
        scale.height,
        config.tier.get(),
        config.seed_mode,
        engine.rule_name(),
        engine.rule().description(),
        engine.population()
    );

    SimulationController::new(engine, scale)
}
