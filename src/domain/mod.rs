mod cell;
mod grid;
mod rules;
mod scale;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, HighLifeRule, ConwayRule, RuleKind};
pub use scale::{CellTier, ScaleConfig, MARGIN, CELL_PIXEL_WIDTH, CELL_PIXEL_HEIGHT};
