//! Step throughput on both screen presets

use std::time::Instant;
use block_life::{Engine, Grid, LifeConfig};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_step(config: &LifeConfig, iterations: u32) -> f64 {
    let (width, height) = config.grid_dimensions();
    let mut rng = StdRng::seed_from_u64(0xB10C);
    let mut grid = Grid::new(width, height);
    grid.reset_random(&mut rng, config.seed_denominator);
    let mut engine = Engine::new();

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let iterations = 500;
    let presets = [("standard", LifeConfig::standard()), ("hd", LifeConfig::hd())];

    println!("{:>10} {:>10} {:>12} {:>16}", "Preset", "Grid", "ms/step", "Cells/sec");
    println!("{:-<52}", "");

    for (name, config) in presets {
        let (width, height) = config.grid_dimensions();
        let step_ms = benchmark_step(&config, iterations);
        let cells_per_sec = (width * height) as f64 / (step_ms / 1000.0);

        println!(
            "{:>10} {:>10} {:>12.3} {:>15.1}M",
            name,
            format!("{}x{}", width, height),
            step_ms,
            cells_per_sec / 1_000_000.0
        );
    }

    // 60 fps leaves 16.6ms per frame for input, step and render
    let hd_ms = benchmark_step(&LifeConfig::hd(), iterations);
    println!("\nHD step uses {:.1}% of a 60 fps frame", hd_ms / (1000.0 / 60.0) * 100.0);
}
