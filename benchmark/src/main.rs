use lockstep_pathfinding::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SIZE: usize = 256;
const RUNS: usize = 20;

struct Run {
    nanos: u128,
    expanded: usize,
    cost: Option<usize>,
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0x1057);

    let weights = [2, 3, 5];
    let mut algorithms: Vec<Algorithm> = Algorithm::lineup(WeightedAStarSearch::DEFAULT_WEIGHT)
        .into_iter()
        .filter(|algorithm| !matches!(algorithm, Algorithm::WeightedAStar { .. }))
        .collect();
    algorithms.extend(weights.map(|weight| Algorithm::WeightedAStar { weight }));

    let mut results: HashMap<Algorithm, Vec<Run>> =
        algorithms.iter().map(|algorithm| (*algorithm, vec![])).collect();

    for _ in 0..RUNS {
        let mut grid = CellGrid::new(SIZE, SIZE);
        for y in 0..SIZE {
            for x in 0..SIZE {
                if rng.gen_bool(0.3) {
                    grid.set((x, y), CellClass::Wall).unwrap();
                }
            }
        }
        let start = (rng.gen_range(0..SIZE / 4), rng.gen_range(0..SIZE));
        let target = (rng.gen_range(SIZE - SIZE / 4..SIZE), rng.gen_range(0..SIZE));
        grid.set(start, CellClass::Start).unwrap();
        grid.set(target, CellClass::Target).unwrap();

        println!("finished Grid gen");

        for algorithm in &algorithms {
            let mut pathfinder = algorithm.build();
            let start_time = Instant::now();
            pathfinder.initialize(start, target);
            while !pathfinder.is_terminal() {
                pathfinder.step(&grid);
            }
            let dt = duration_as_nanos(Instant::now() - start_time);

            results.get_mut(algorithm).unwrap().push(Run {
                nanos: dt,
                expanded: pathfinder.stats().expanded,
                cost: pathfinder.solution().map(|path| path.cost()),
            });
        }
    }

    let best = results[&Algorithm::Dijkstra]
        .iter()
        .map(|run| run.cost)
        .collect::<Vec<_>>();

    println!("name | time min - max; avg | expanded avg | optimal/cost min - max; avg");
    for algorithm in &algorithms {
        let results = &results[algorithm];
        let times = results.iter().map(|r| r.nanos);
        let min_time = times.clone().min().unwrap() as f64 / 1_000_000.0;
        let max_time = times.clone().max().unwrap() as f64 / 1_000_000.0;
        let avg_time = times.sum::<u128>() as f64 / results.len() as f64 / 1_000_000.0;
        let avg_expanded =
            results.iter().map(|r| r.expanded).sum::<usize>() as f64 / results.len() as f64;

        // every search agrees on whether there is a Path at all
        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.cost.is_some() == b.is_some()));

        let costs = results
            .iter()
            .filter_map(|r| r.cost)
            .zip(best.iter().filter_map(|p| *p))
            .map(|(cost, best)| best as f64 / cost as f64);

        if costs.clone().count() == 0 {
            println!("{} | no target was reachable", algorithm);
            continue;
        }
        let min_cost = costs.clone().fold(f64::INFINITY, |a, b| a.min(b));
        let max_cost = costs.clone().fold(0.0_f64, |a, b| a.max(b));
        let avg_cost = costs.clone().sum::<f64>() / costs.count() as f64;

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | {:.1} | {:.2}% - {:.2}%; {:.2}%",
            algorithm,
            min_time,
            max_time,
            avg_time,
            avg_expanded,
            min_cost * 100.0,
            max_cost * 100.0,
            avg_cost * 100.0,
        );
    }
}

fn duration_as_nanos(d: Duration) -> u128 {
    d.as_secs() as u128 * 1_000_000_000 + d.subsec_nanos() as u128
}
