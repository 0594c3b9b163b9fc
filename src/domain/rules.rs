use super::Cell;

/// Trait for cellular automaton rules
/// Lets the engine run HighLife or plain Conway without knowing which
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born too.
/// Produces replicators.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            // Death by under- or overpopulation
            (Cell::Alive, n) if n < 2 || n > 3 => Cell::Dead,
            // Survival: anything alive that was not killed above
            (Cell::Alive, _) => Cell::Alive,
            // Birth
            (Cell::Dead, 3 | 6) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Selectable rule sets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RuleKind {
    #[default]
    HighLife,
    Conway,
}

impl RuleKind {
    /// Build the boxed rule for the engine
    pub fn build(self) -> Box<dyn Rule> {
        match self {
            RuleKind::HighLife => Box::new(HighLifeRule),
            RuleKind::Conway => Box::new(ConwayRule),
        }
    }
}
