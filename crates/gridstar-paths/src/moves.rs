//! Step costs on an 8-connected grid.

use gridstar_core::Point;

/// Cost of a horizontal or vertical step.
pub const CARDINAL_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Cost of stepping from `from` to `to`, or `None` if they are not
/// 8-neighbours.
#[inline]
pub fn step_cost(from: Point, to: Point) -> Option<f64> {
    if !from.is_adjacent(to) {
        return None;
    }
    if from.x != to.x && from.y != to.y {
        Some(DIAGONAL_COST)
    } else {
        Some(CARDINAL_COST)
    }
}

/// Total cost of a path, or `None` if two consecutive points are not
/// 8-neighbours. Empty and single-point paths cost 0.
pub fn path_cost(path: &[Point]) -> Option<f64> {
    path.windows(2)
        .map(|w| step_cost(w[0], w[1]))
        .sum::<Option<f64>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_costs() {
        let p = Point::new(2, 2);
        assert_eq!(step_cost(p, Point::new(2, 1)), Some(CARDINAL_COST));
        assert_eq!(step_cost(p, Point::new(3, 3)), Some(DIAGONAL_COST));
        assert_eq!(step_cost(p, p), None);
        assert_eq!(step_cost(p, Point::new(4, 2)), None);
    }

    #[test]
    fn path_costs() {
        assert_eq!(path_cost(&[]), Some(0.0));
        assert_eq!(path_cost(&[Point::ZERO]), Some(0.0));
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)];
        let cost = path_cost(&path).unwrap();
        assert!((cost - (DIAGONAL_COST + 1.0)).abs() < 1e-12);
        assert_eq!(path_cost(&[Point::new(0, 0), Point::new(0, 2)]), None);
    }
}
