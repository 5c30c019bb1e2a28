extern crate lockstep_pathfinding;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use lockstep_pathfinding::prelude::*;
use log::info;
use nanorand::{Rng, WyRand};

fn new_random(width: usize, height: usize, wall_percent: usize) -> CellGrid {
    let mut grid = CellGrid::new(width, height);
    let mut rng = WyRand::new_seed(4);
    for y in 0..height {
        for x in 0..width {
            if rng.generate_range(0_usize..100) < wall_percent {
                grid.set((x, y), CellClass::Wall).unwrap();
            }
        }
    }
    grid
}

/// Places start and target in opposite corners, clearing whatever was there
fn with_endpoints(mut grid: CellGrid) -> (CellGrid, Point, Point) {
    let start = (0, 0);
    let target = (grid.width() - 1, grid.height() - 1);
    grid.set(start, CellClass::Start).unwrap();
    grid.set(target, CellClass::Target).unwrap();
    (grid, start, target)
}

fn run_to_end(pathfinder: &mut dyn Pathfinder, grid: &CellGrid) -> usize {
    let mut explored = 0;
    while !pathfinder.is_terminal() {
        explored += pathfinder.step(grid).len();
    }
    explored
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // debug logs every finished search, trace every expansion
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_single_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search to completion");

    // Log to stdout
    init();

    let maps = [
        ("Uniform", 64, 0),
        ("Uniform", 256, 0),
        ("Random", 64, 25),
        ("Random", 256, 25),
    ];

    for (kind, size, wall_percent) in maps {
        let (grid, start, target) = with_endpoints(new_random(size, size, wall_percent));
        if size > 128 {
            // For large maps, use a smaller sample size so they don't take 30+s per run.
            group.sample_size(10);
        }

        for algorithm in Algorithm::lineup(WeightedAStarSearch::DEFAULT_WEIGHT) {
            let mut pathfinder = algorithm.build();
            pathfinder.initialize(start, target);
            run_to_end(pathfinder.as_mut(), &grid);
            info!(
                "{}, {} Map of {}: {:?} after {} expansions",
                algorithm,
                kind,
                size,
                pathfinder.status(),
                pathfinder.stats().expanded
            );

            let id = BenchmarkId::new(
                algorithm.to_string(),
                format!("{} Map, Map Size: ({}, {})", kind, size, size),
            );
            group.bench_with_input(id, &grid, |b, grid| {
                b.iter(|| {
                    let mut pathfinder = algorithm.build();
                    pathfinder.initialize(start, target);
                    run_to_end(pathfinder.as_mut(), grid)
                })
            });
        }
    }
}

fn bench_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("Driver");
    group.sample_size(20);

    let config = DriverConfig::with_size(128, 96);
    let mut walled = Driver::new(config);
    // a wall across the middle with a gap at the bottom
    for y in 0..config.height - 1 {
        walled.set_wall((config.width / 2, y)).unwrap();
    }

    group.bench_function("Run all, Open Map", |b| {
        b.iter(|| {
            let mut driver = Driver::new(config);
            driver.run(|_| {})
        })
    });
    group.bench_function("Run all, Walled Map", |b| {
        b.iter(|| {
            walled.reset();
            walled.run(|_| {})
        })
    });
}

criterion_group!(benches, bench_single_search, bench_driver);
criterion_main!(benches);
