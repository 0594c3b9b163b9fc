// Domain layer - grid, rules, sizing
pub mod domain;

// Application layer - engine and interactive controller
pub mod application;

// Session configuration shared by the menu and the CLI
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Rule, RuleKind, CellTier, ScaleConfig};
pub use application::{GridEngine, SimulationController, InputEvent, start_session};
pub use config::{SessionConfig, SeedMode, ConfigError};
