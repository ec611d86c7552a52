//! Timing comparison of the serial and parallel staging passes

use std::time::Instant;
use life_editor::domain::{Grid, PARALLEL_THRESHOLD};
use rand::{SeedableRng, rngs::StdRng};

fn random_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);
    grid
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.stage_next_generation();
        grid.commit_generation();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.stage_next_generation_parallel();
        grid.commit_generation();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation Advance Benchmark ===\n");
    println!("Parallel staging kicks in at {} cells\n", PARALLEL_THRESHOLD);

    let sizes = [20, 50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }
}
