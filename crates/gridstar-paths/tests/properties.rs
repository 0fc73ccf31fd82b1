use gridstar_core::{Point, Range};
use gridstar_paths::{
    AstarSolver, Metric, ObstacleMap, PathOutcome, path_cost, step_cost,
};
use rand::{Rng, RngExt, SeedableRng};

const EPS: f64 = 1e-9;

fn random_grid(rng: &mut impl Rng, w: i32, h: i32, density_pct: u32) -> Vec<bool> {
    (0..w * h)
        .map(|_| rng.random_range(0..100u32) < density_pct)
        .collect()
}

fn offset(w: i32, p: Point) -> usize {
    (p.y * w + p.x) as usize
}

/// Exact costs from `start` by repeated relaxation until nothing changes.
fn brute_force_costs(grid: &[bool], w: i32, h: i32, start: Point) -> Vec<f64> {
    let rng = Range::with_size(w, h);
    let mut cost = vec![f64::INFINITY; grid.len()];
    cost[offset(w, start)] = 0.0;
    loop {
        let mut changed = false;
        for p in rng {
            let c = cost[offset(w, p)];
            if c.is_infinite() {
                continue;
            }
            for n in p.neighbors_8() {
                if !rng.contains(n) || grid[offset(w, n)] {
                    continue;
                }
                let candidate = c + step_cost(p, n).unwrap();
                if candidate < cost[offset(w, n)] - 1e-12 {
                    cost[offset(w, n)] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            return cost;
        }
    }
}

fn assert_valid_path(grid: &[bool], w: i32, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
    }
    for &p in &path[1..] {
        assert!(!grid[offset(w, p)], "path crosses blocked cell {p}");
    }
}

#[test]
fn matches_brute_force_on_random_grids() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for round in 0..60 {
        let w = rng.random_range(1..9);
        let h = rng.random_range(1..9);
        let grid = random_grid(&mut rng, w, h, 30);
        let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        let goal = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        if grid[offset(w, start)] {
            continue;
        }

        let expected = brute_force_costs(&grid, w, h, start)[offset(w, goal)];
        for metric in [Metric::Octile, Metric::Euclidean, Metric::Chebyshev, Metric::Zero] {
            let mut solver = AstarSolver::new(w, h, metric).unwrap();
            let mut path = Vec::new();
            let outcome = solver.find_path(&grid, start, goal, &mut path).unwrap();
            match outcome {
                PathOutcome::Found { cost } => {
                    assert!(
                        (cost - expected).abs() < EPS,
                        "round {round} {metric:?}: got {cost}, want {expected}"
                    );
                    assert_valid_path(&grid, w, &path, start, goal);
                    assert!((path_cost(&path).unwrap() - cost).abs() < EPS);
                }
                PathOutcome::NoPath => {
                    assert!(
                        expected.is_infinite(),
                        "round {round} {metric:?}: missed a path of cost {expected}"
                    );
                }
            }
        }
    }
}

#[test]
fn reachability_matches_flood_fill() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let (w, h) = (10, 7);
    let grid = random_grid(&mut rng, w, h, 40);
    let mut solver = AstarSolver::new(w, h, Metric::Octile).unwrap();
    let mut path = Vec::new();

    for start in Range::with_size(w, h) {
        if grid[offset(w, start)] {
            continue;
        }
        let costs = brute_force_costs(&grid, w, h, start);
        for goal in Range::with_size(w, h) {
            let outcome = solver.find_path(&grid, start, goal, &mut path).unwrap();
            assert_eq!(
                outcome.is_found(),
                costs[offset(w, goal)].is_finite(),
                "{start} -> {goal}"
            );
        }
    }
}

#[test]
fn repeated_queries_are_deterministic() {
    let map = ObstacleMap::parse(
        "\
S.........
.########.
..........
.########.
.........G",
    )
    .unwrap();
    let (start, goal) = (map.start().unwrap(), map.goal().unwrap());
    let mut solver = AstarSolver::new(map.width(), map.height(), Metric::Euclidean).unwrap();

    let mut first = Vec::new();
    let a = solver.find_path(map.blocked(), start, goal, &mut first).unwrap();
    for _ in 0..5 {
        let mut again = Vec::new();
        let b = solver.find_path(map.blocked(), start, goal, &mut again).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, again);
    }
}

#[test]
fn reused_solver_matches_fresh_solvers() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1234);
    let (w, h) = (9, 9);
    let mut reused = AstarSolver::new(w, h, Metric::Octile).unwrap();

    for _ in 0..40 {
        let grid = random_grid(&mut rng, w, h, 25);
        let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        let goal = Point::new(rng.random_range(0..w), rng.random_range(0..h));

        let mut fresh = AstarSolver::new(w, h, Metric::Octile).unwrap();
        let mut p1 = vec![Point::new(-1, -1)];
        let mut p2 = vec![Point::new(-1, -1)];
        let o1 = reused.find_path(&grid, start, goal, &mut p1).unwrap();
        let o2 = fresh.find_path(&grid, start, goal, &mut p2).unwrap();
        assert_eq!(o1, o2);
        assert_eq!(p1, p2);
        assert_eq!(reused.last_stats(), fresh.last_stats());
    }
}

#[test]
fn one_solver_per_thread_sharing_a_grid() {
    let map = ObstacleMap::parse(
        "\
S...#....
.##.#.##.
.#..#..#.
.#.###.#.
.#.....#G",
    )
    .unwrap();
    let (start, goal) = (map.start().unwrap(), map.goal().unwrap());
    let mut expected = Vec::new();
    let want = AstarSolver::new(map.width(), map.height(), Metric::Octile)
        .unwrap()
        .find_path(map.blocked(), start, goal, &mut expected)
        .unwrap();
    assert!(want.is_found());

    let map = &map;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let mut solver =
                        AstarSolver::new(map.width(), map.height(), Metric::Octile).unwrap();
                    let mut path = Vec::new();
                    let outcome = solver
                        .find_path(map.blocked(), start, goal, &mut path)
                        .unwrap();
                    (outcome, path)
                })
            })
            .collect();
        for handle in handles {
            let (outcome, path) = handle.join().unwrap();
            assert_eq!(outcome, want);
            assert_eq!(path, expected);
        }
    });
}

#[test]
fn rendered_route_through_a_maze() {
    let map = ObstacleMap::parse(
        "\
S.#...
..#.#.
..#.#.
....#G",
    )
    .unwrap();
    let mut solver = AstarSolver::new(map.width(), map.height(), Metric::Octile).unwrap();
    let mut path = Vec::new();
    let outcome = solver
        .find_path(map.blocked(), map.start().unwrap(), map.goal().unwrap(), &mut path)
        .unwrap();
    assert!(outcome.is_found());

    let rendered = map.render(&path);
    // The only way round is under the first wall and over the second.
    assert_eq!(rendered.lines().nth(3).unwrap().chars().nth(2), Some('*'));
    assert_eq!(rendered.lines().next().unwrap().chars().nth(4), Some('*'));
}
