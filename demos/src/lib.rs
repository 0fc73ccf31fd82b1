//! Command-line driver for the gridstar solver.
//!
//! Loads an ASCII map (or generates a random one), runs a single A* query
//! and reports the outcome either as a rendered map or as JSON.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use gridstar_core::Point;
use gridstar_paths::{AstarSolver, Metric, ObstacleMap, PathOutcome, SearchStats};
use rand::{Rng, RngExt, SeedableRng};
use serde::Serialize;

pub const DEFAULT_WIDTH: i32 = 40;
pub const DEFAULT_HEIGHT: i32 = 20;

#[derive(Debug, Parser)]
#[command(name = "gridstar")]
#[command(about = "Find an 8-way shortest path on an occupancy grid", version)]
pub struct Args {
    /// ASCII map file: '#' blocked, '.' open, 'S' start, 'G' goal
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Width of a generated map
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Height of a generated map
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Percentage of blocked cells in a generated map
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub density: u32,

    /// Seed for map generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Heuristic guiding the search
    #[arg(long, value_enum, default_value_t = MetricArg::Octile)]
    pub metric: MetricArg,

    /// Start cell as "x,y" (overrides the map's 'S')
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// Goal cell as "x,y" (overrides the map's 'G')
    #[arg(long, value_parser = parse_point)]
    pub goal: Option<Point>,

    /// Print a JSON report instead of the rendered map
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Euclidean,
    Octile,
    Chebyshev,
    Manhattan,
    Zero,
}

impl From<MetricArg> for Metric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Euclidean => Metric::Euclidean,
            MetricArg::Octile => Metric::Octile,
            MetricArg::Chebyshev => Metric::Chebyshev,
            MetricArg::Manhattan => Metric::Manhattan,
            MetricArg::Zero => Metric::Zero,
        }
    }
}

/// Parse "x,y" into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Generate a map with roughly `density` percent of cells blocked.
pub fn random_map(rng: &mut impl Rng, width: i32, height: i32, density: u32) -> ObstacleMap {
    let mut map = ObstacleMap::new(width, height);
    for p in map.range() {
        if rng.random_range(0..100u32) < density {
            map.set_blocked(p, true);
        }
    }
    map
}

/// Everything a query produced.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub width: i32,
    pub height: i32,
    pub cells: usize,
    pub metric: Metric,
    pub start: Point,
    pub goal: Point,
    pub outcome: PathOutcome,
    pub path: Vec<Point>,
    pub stats: SearchStats,
    #[serde(skip)]
    pub rendered: String,
}

/// Build the map described by `args`.
pub fn load_map(args: &Args) -> anyhow::Result<ObstacleMap> {
    if let Some(path) = &args.map {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading map {}", path.display()))?;
        let map = ObstacleMap::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
        log::info!(
            "loaded {}x{} map from {} ({} blocked)",
            map.width(),
            map.height(),
            path.display(),
            map.blocked_count()
        );
        return Ok(map);
    }

    if args.width < 1 || args.height < 1 {
        bail!("map size must be positive, got {}x{}", args.width, args.height);
    }
    let seed = match args.seed {
        Some(seed) => seed,
        None => rand::rng().random_range(0..u64::MAX),
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let map = random_map(&mut rng, args.width, args.height, args.density);
    log::info!(
        "generated {}x{} map, seed {seed}, {} blocked",
        map.width(),
        map.height(),
        map.blocked_count()
    );
    Ok(map)
}

/// Resolve endpoints, run the solver and collect the report.
pub fn run_query(mut map: ObstacleMap, args: &Args) -> anyhow::Result<Report> {
    let start = args
        .start
        .or(map.start())
        .unwrap_or(Point::ZERO);
    let goal = args
        .goal
        .or(map.goal())
        .unwrap_or(Point::new(map.width() - 1, map.height() - 1));
    // Generated maps may have walled in the endpoints.
    if args.map.is_none() {
        map.set_blocked(start, false);
        map.set_blocked(goal, false);
    }
    map.set_start(Some(start));
    map.set_goal(Some(goal));

    let mut solver = AstarSolver::new(map.width(), map.height(), Metric::from(args.metric))?;
    log::debug!("searching {} cells with {:?}", solver.index().len(), solver.heuristic());
    let mut path = Vec::new();
    let outcome = solver
        .find_path(map.blocked(), start, goal, &mut path)
        .with_context(|| format!("searching {start} -> {goal}"))?;
    if outcome == PathOutcome::NoPath {
        log::warn!("no path from {start} to {goal}");
    }

    Ok(Report {
        width: map.width(),
        height: map.height(),
        cells: solver.index().len(),
        metric: *solver.heuristic(),
        start,
        goal,
        outcome,
        rendered: map.render(&path),
        path,
        stats: solver.last_stats(),
    })
}

/// Human-readable summary printed under the rendered map.
pub fn summary(report: &Report) -> String {
    let stats = report.stats;
    match report.outcome {
        PathOutcome::Found { cost } => format!(
            "path {} -> {}: {} cells, cost {cost:.3} (expanded {}, pushed {}, stale {})",
            report.start,
            report.goal,
            report.path.len(),
            stats.expanded,
            stats.pushed,
            stats.stale
        ),
        PathOutcome::NoPath => format!(
            "no path {} -> {} (expanded {})",
            report.start, report.goal, stats.expanded
        ),
    }
}
