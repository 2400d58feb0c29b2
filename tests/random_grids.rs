use nanorand::{Rng, WyRand};
use tile_pathfinding::{is_valid_step, prelude::*, step_cost};

use std::collections::{HashSet, VecDeque};

const SIZE: usize = 24;
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn walker(open: &bool) -> bool {
    *open
}

struct Case {
    grid: TileGrid<bool>,
    start: Point,
    goal: Point,
}

fn random_case(seed: u64) -> Case {
    let mut rng = WyRand::new_seed(seed);
    let mut grid = TileGrid::from_fn(SIZE, SIZE, |_| rng.generate_range(0_u32..100) >= 28);

    let mut random_point = || {
        (
            rng.generate_range(0..SIZE as i32),
            rng.generate_range(0..SIZE as i32),
        )
    };
    let start = random_point();
    let goal = random_point();
    grid.set(start, true);
    grid.set(goal, true);

    Case { grid, start, goal }
}

// every Point that can be reached from start under the same step rules
fn flood_fill(grid: &TileGrid<bool>, start: Point) -> HashSet<Point> {
    let traversable = |(x, y): Point| grid.can_traverse(&walker, x, y);
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(pos) = queue.pop_front() {
        for &(dx, dy) in OFFSETS.iter() {
            let next = (pos.0 + dx, pos.1 + dy);
            if is_valid_step(traversable, pos, next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn check_path(grid: &TileGrid<bool>, path: &Path<Point>, start: Point, goal: Point) {
    let traversable = |(x, y): Point| grid.can_traverse(&walker, x, y);

    assert_eq!(path.start(), start);
    assert_eq!(path.end(), goal);

    let mut cost = 0;
    for step in path.as_slice().windows(2) {
        let (from, to) = (step[0], step[1]);
        cost += step_cost(from, to).unwrap_or_else(|| panic!("{:?} -> {:?} is no step", from, to));
        assert!(
            is_valid_step(traversable, from, to),
            "{:?} -> {:?} enters a wall or cuts a corner",
            from,
            to
        );
    }
    assert_eq!(cost, path.cost());
}

#[test]
fn paths_exist_exactly_when_reachable() {
    init_logger();
    let config = SearchConfig::default();

    for seed in 0..60 {
        let Case { grid, start, goal } = random_case(seed);
        let reachable = flood_fill(&grid, start).contains(&goal);

        match find_path(&grid, &walker, &config, start, goal) {
            Some(path) => {
                assert!(reachable, "seed {}: found a path to an unreachable goal", seed);
                check_path(&grid, &path, start, goal);
            }
            None => assert!(!reachable, "seed {}: missed a path", seed),
        }
    }
}

#[test]
fn bounded_paths_stay_within_bound() {
    init_logger();

    for seed in 0..60 {
        let Case { grid, start, goal } = random_case(seed);
        let unbounded = find_path(&grid, &walker, &SearchConfig::default(), start, goal);

        for tiles in [0, 3, 10, 25, 60] {
            let config = SearchConfig::default().with_longest(tiles);
            let bounded = find_path(&grid, &walker, &config, start, goal);

            if let Some(path) = &bounded {
                check_path(&grid, path, start, goal);
                assert!(path.cost() <= config.max_cost);
            }
            // a Path within the bound exists, so the bounded search has to find one
            if let Some(path) = &unbounded {
                if path.cost() <= config.max_cost {
                    assert!(bounded.is_some(), "seed {}: bound {} too strict", seed, tiles);
                }
            }
        }
    }
}

#[test]
fn repeated_searches_agree() {
    init_logger();
    let config = SearchConfig::default().loose(true);

    for seed in 0..20 {
        let Case { grid, start, goal } = random_case(seed);
        let first = find_path_with_stats(&grid, &walker, &config, start, goal);
        let second = find_path_with_stats(&grid, &walker, &config, start, goal);
        assert_eq!(first, second);

        // loose searches always return something, starting at the start
        let (path, stats) = first;
        let path = path.unwrap();
        assert_eq!(path.start(), start);
        assert_eq!(stats.reached_goal, path.end() == goal);
    }
}

#[test]
fn batch_matches_single_searches() {
    init_logger();
    let config = SearchConfig::default();
    let Case { grid, .. } = random_case(7);

    let mut rng = WyRand::new_seed(99);
    let requests: Vec<(Point, Point)> = (0..64)
        .map(|_| {
            let mut point = || {
                (
                    rng.generate_range(0..SIZE as i32),
                    rng.generate_range(0..SIZE as i32),
                )
            };
            (point(), point())
        })
        .collect();

    let batch = find_paths(&grid, &walker, &config, &requests);
    for (&(start, goal), result) in requests.iter().zip(batch) {
        assert_eq!(result, find_path(&grid, &walker, &config, start, goal));
    }
}

#[test]
fn goals_millions_of_cells_away() {
    init_logger();
    let far_goals = [(5_000_000, 3), (-2_000_000, -2_000_000), (i32::MAX, i32::MIN)];

    for seed in 0..10 {
        let Case { grid, start, .. } = random_case(seed);
        let reachable = flood_fill(&grid, start);

        for &goal in far_goals.iter() {
            let (path, stats) = find_path_with_stats(&grid, &walker, &SearchConfig::default(), start, goal);
            assert_eq!(path, None);
            assert_eq!(stats.considered, reachable.len());

            let loose = SearchConfig::default().loose(true);
            let path = find_path(&grid, &walker, &loose, start, goal).unwrap();
            assert_eq!(path.start(), start);
            assert!(reachable.contains(&path.end()));
        }
    }
}
