//! A* results checked against breadth-first search and flood fill on
//! seeded random grids.

use gridstar_core::{CellKind, Grid, Point};
use gridstar_gen::{GridGen, Scenario};
use gridstar_paths::{DistanceMap, PathFinder, reachable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scenarios(seed: u64, count: usize) -> Vec<Scenario> {
    let mut mg = GridGen::new(StdRng::seed_from_u64(seed));
    (0..count)
        .map(|_| {
            let rows = mg.rng.random_range(1..12);
            let cols = mg.rng.random_range(2..12);
            let cells = (rows * cols) as usize;
            let obstacles = mg.rng.random_range(0..=cells - 2);
            mg.generate(rows, cols, obstacles).unwrap()
        })
        .collect()
}

fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert!(w[0].is_adjacent_4(w[1]), "{} -> {}", w[0], w[1]);
    }
    for &p in path {
        assert_ne!(grid.at(p), Some(CellKind::Obstacle), "{p} on path");
        assert!(grid.contains(p));
    }
}

#[test]
fn path_length_matches_bfs_distance() {
    for sc in scenarios(1, 300) {
        let dm = DistanceMap::compute(&sc.grid, &[sc.start]);
        let path = PathFinder::new(&sc.grid).find_path(sc.start, sc.goal).unwrap();
        match (path, dm.at(sc.goal)) {
            (Some(path), Some(d)) => {
                assert_valid_path(&sc.grid, &path, sc.start, sc.goal);
                assert_eq!(path.len() as i32 - 1, d, "\n{}", sc.grid);
            }
            (None, None) => {}
            (path, d) => panic!("astar {path:?} vs bfs {d:?}\n{}", sc.grid),
        }
    }
}

#[test]
fn not_found_iff_unreachable() {
    for sc in scenarios(2, 300) {
        let region = reachable(&sc.grid, sc.start);
        let path = PathFinder::new(&sc.grid).find_path(sc.start, sc.goal).unwrap();
        assert_eq!(path.is_some(), region.contains(&sc.goal), "\n{}", sc.grid);
    }
}

#[test]
fn every_pair_on_one_grid() {
    let Scenario { grid, .. } = GridGen::new(StdRng::seed_from_u64(3))
        .generate(6, 7, 12)
        .unwrap();
    let finder = PathFinder::new(&grid);
    for from in grid.bounds() {
        if grid.is_blocked(from) {
            continue;
        }
        let dm = DistanceMap::compute(&grid, &[from]);
        for to in grid.bounds() {
            let path = finder.find_path(from, to).unwrap();
            assert_eq!(
                path.as_ref().map(|p| p.len() as i32 - 1),
                dm.at(to),
                "{from} -> {to}\n{grid}"
            );
            if let Some(path) = path {
                assert_valid_path(&grid, &path, from, to);
            }
        }
    }
}

#[test]
fn start_equals_goal_everywhere() {
    for sc in scenarios(4, 20) {
        let finder = PathFinder::new(&sc.grid);
        for p in sc.grid.bounds() {
            assert_eq!(finder.find_path(p, p), Ok(Some(vec![p])));
        }
    }
}

#[test]
fn searches_are_idempotent() {
    for sc in scenarios(5, 50) {
        let finder = PathFinder::new(&sc.grid);
        let first = finder.find_path(sc.start, sc.goal).unwrap();
        let second = finder.find_path(sc.start, sc.goal).unwrap();
        assert_eq!(first, second);
        let other = PathFinder::new(&sc.grid).find_path(sc.start, sc.goal).unwrap();
        assert_eq!(first, other);
    }
}

#[test]
fn listed_scenarios() {
    let one = Grid::new(1, 1).unwrap();
    assert_eq!(
        PathFinder::new(&one).find_path(Point::at(0, 0), Point::at(0, 0)),
        Ok(Some(vec![Point::at(0, 0)]))
    );

    let row = Grid::new(1, 5).unwrap();
    let path = PathFinder::new(&row)
        .find_path(Point::at(0, 0), Point::at(0, 4))
        .unwrap()
        .unwrap();
    assert_eq!(path.len() - 1, 4);
    assert_eq!(path, (0..5).map(|c| Point::at(0, c)).collect::<Vec<_>>());

    let wall = Grid::parse(".#.\n.#.\n.#.").unwrap();
    assert_eq!(
        PathFinder::new(&wall).find_path(Point::at(0, 0), Point::at(0, 2)),
        Ok(None)
    );

    let center = Grid::parse("...\n.#.\n...").unwrap();
    let path = PathFinder::new(&center)
        .find_path(Point::at(0, 0), Point::at(2, 2))
        .unwrap()
        .unwrap();
    assert_eq!(path.len() - 1, 4);
    assert_valid_path(&center, &path, Point::at(0, 0), Point::at(2, 2));
    assert!(!path.contains(&Point::at(1, 1)));
}
