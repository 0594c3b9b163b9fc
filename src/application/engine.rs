use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::SeedMode;
use crate::domain::{Cell, Grid, HighLifeRule, Rule};

/// Grids at least this many cells evolve on the rayon pool
const PARALLEL_THRESHOLD: usize = 100 * 100;

/// GridEngine owns the current generation, the rule that advances it and
/// the session's random source.
pub struct GridEngine {
    grid: Grid,
    rule: Box<dyn Rule>,
    rng: StdRng,
}

impl GridEngine {
    /// Create an engine whose random source is seeded from the clock
    pub fn new(width: usize, height: usize, seed_mode: SeedMode, rule: Box<dyn Rule>) -> Self {
        Self::with_seed(width, height, seed_mode, rule, clock_seed())
    }

    /// Create an engine with a fixed random seed
    pub fn with_seed(
        width: usize,
        height: usize,
        seed_mode: SeedMode,
        rule: Box<dyn Rule>,
        seed: u64,
    ) -> Self {
        let mut engine = Self {
            grid: Grid::new(width, height),
            rule,
            rng: StdRng::seed_from_u64(seed),
        };
        if seed_mode == SeedMode::Random {
            engine.randomize();
        }
        engine
    }

    /// Blank HighLife engine, mostly for tests and benchmarks
    pub fn blank(width: usize, height: usize) -> Self {
        Self::with_seed(width, height, SeedMode::Blank, Box::new(HighLifeRule), 0)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Replace the current generation with the next one
    pub fn step(&mut self) {
        let (width, height) = self.grid.dimensions();
        self.grid = if width * height >= PARALLEL_THRESHOLD {
            self.grid.evolve_parallel(self.rule.as_ref())
        } else {
            self.grid.evolve(self.rule.as_ref())
        };
    }

    /// Light up (x, y) and scatter random cells around it.
    ///
    /// Accepted only for `0 < x < width - 1` and `0 <= y < height`; the
    /// centre is always set alive, each Moore neighbor gets a coin flip.
    /// Neighbor writes that fall off the grid are dropped.
    pub fn seed_blob(&mut self, x: i64, y: i64) {
        let (width, height) = self.grid.dimensions();
        let (width, height) = (width as i64, height as i64);
        if !(x > 0 && x < width - 1 && y >= 0 && y < height) {
            return;
        }

        self.grid.set(x as usize, y as usize, Cell::Alive);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            let cell = Cell::from_alive(self.rng.random_bool(0.5));
            if self.grid.contains(nx, ny) {
                self.grid.set(nx as usize, ny as usize, cell);
            }
        }
    }

    /// Kill the cell at (x, y); out-of-range coordinates are ignored
    pub fn clear_cell(&mut self, x: i64, y: i64) {
        if self.grid.contains(x, y) {
            self.grid.set(x as usize, y as usize, Cell::Dead);
        }
    }

    /// Refill the grid with independent 50/50 coin flips
    pub fn randomize(&mut self) {
        let (width, height) = self.grid.dimensions();
        let rng = &mut self.rng;
        self.grid = Grid::from_fn(width, height, |_, _| Cell::from_alive(rng.random_bool(0.5)));
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.clear();
    }
}

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
