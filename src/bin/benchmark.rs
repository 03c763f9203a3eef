//! Sparse candidate stepping vs full-grid scan on random boards

use std::time::Instant;

use life_gif::domain::{Grid, Seed, StepEngine, step_dense};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_grid(size: usize, density: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64 ^ density.to_bits());
    let seed = Seed::random(size, size, density, &mut rng);
    Grid::with_alive(size, size, seed.iter())
}

/// Average milliseconds per generation
fn benchmark_sparse(start: &Grid, iterations: u32) -> f64 {
    let mut engine = StepEngine::new();
    let mut grid = start.clone();

    let timer = Instant::now();
    for _ in 0..iterations {
        grid = engine.step(&grid);
    }
    timer.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_dense(start: &Grid, iterations: u32) -> f64 {
    let mut grid = start.clone();

    let timer = Instant::now();
    for _ in 0..iterations {
        grid = step_dense(&grid);
    }
    timer.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Stepping Benchmark ===\n");

    let sizes = [20, 100, 500, 1000, 2000];
    let densities = [0.001, 0.01, 0.1, 0.3];
    let iterations = 20;

    println!("{:>10} {:>9} {:>12} {:>12} {:>10}", "Size", "Density", "Sparse", "Dense", "Speedup");
    println!("{:-<57}", "");

    for size in sizes {
        for density in densities {
            let grid = random_grid(size, density);
            let sparse_ms = benchmark_sparse(&grid, iterations);
            let dense_ms = benchmark_dense(&grid, iterations);

            println!(
                "{:>10} {:>9} {:>12.3} {:>12.3} {:>9.1}x",
                format!("{size}x{size}"),
                format!("{:.1}%", density * 100.0),
                sparse_ms,
                dense_ms,
                dense_ms / sparse_ms.max(f64::EPSILON)
            );
        }
    }

    println!("\n=== Reference runs (20x20, 30 steps) ===\n");

    for pattern in life_gif::presets::all_patterns() {
        let (height, width) = pattern.board;
        let timer = Instant::now();
        match life_gif::run(height, width, &pattern.seed(), pattern.steps) {
            Ok(frames) => println!(
                "{:<12} {:>3} frames {:>8.3} ms",
                pattern.name,
                frames.len(),
                timer.elapsed().as_secs_f64() * 1000.0
            ),
            Err(error) => eprintln!("{:<12} failed: {error}", pattern.name),
        }
    }
}
