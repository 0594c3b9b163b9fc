//! Performance benchmark: serial vs rayon generation stepping

use std::time::Instant;
use highlife::{
    config::SeedMode,
    domain::{CellTier, Grid, HighLifeRule, ScaleConfig},
    GridEngine,
};

fn random_grid(width: usize, height: usize) -> Grid {
    GridEngine::with_seed(width, height, SeedMode::Random, Box::new(HighLifeRule), 2015)
        .grid()
        .clone()
}

fn benchmark_serial(width: usize, height: usize, iterations: u32) -> f64 {
    let rule = HighLifeRule;
    let mut grid = random_grid(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve(&rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(width: usize, height: usize, iterations: u32) -> f64 {
    let rule = HighLifeRule;
    let mut grid = random_grid(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve_parallel(&rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== HighLife Step Benchmark ===\n");

    let iterations = 50;

    println!("{:>6} {:>12} {:>12} {:>12} {:>10}",
        "Tier", "Grid", "Serial", "Parallel", "Speedup");
    println!("{:-<58}", "");

    // Largest window, every tier
    for tier in CellTier::all() {
        let scale = ScaleConfig::from_tier(tier, 1024, 768);
        let serial_ms = benchmark_serial(scale.width, scale.height, iterations);
        let parallel_ms = benchmark_parallel(scale.width, scale.height, iterations);

        println!(
            "{:>6} {:>12} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            tier.get(),
            format!("{}x{}", scale.width, scale.height),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 1000x1000 ===\n");

    let cells = 1000 * 1000;
    let parallel_ms = benchmark_parallel(1000, 1000, 10);
    println!("Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms, (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0);
}
