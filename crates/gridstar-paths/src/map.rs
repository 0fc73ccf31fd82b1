//! Obstacle grids built from text.
//!
//! An [`ObstacleMap`] parses an ASCII picture into the row-major `bool`
//! slice the solver consumes, and renders paths back onto it.

use std::fmt;

use gridstar_core::{Point, Range};

use crate::error::MapError;

/// Blocked cell.
pub const WALL: char = '#';
/// Open cell.
pub const FLOOR: char = '.';
/// Open cell marking the start.
pub const START: char = 'S';
/// Open cell marking the goal.
pub const GOAL: char = 'G';
/// Path cell in [`ObstacleMap::render`] output.
pub const PATH: char = '*';

/// A fixed-size occupancy grid with optional start and goal markers.
///
/// ```
/// use gridstar_core::Point;
/// use gridstar_paths::ObstacleMap;
///
/// let map: ObstacleMap = "S.#\n..#\n..G".parse()?;
/// assert_eq!(map.width(), 3);
/// assert!(map.is_blocked(Point::new(2, 0)));
/// assert_eq!(map.goal(), Some(Point::new(2, 2)));
/// # Ok::<(), gridstar_paths::MapError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawObstacleMap"))]
pub struct ObstacleMap {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    start: Option<Point>,
    goal: Option<Point>,
}

/// Unchecked wire form of [`ObstacleMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawObstacleMap {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    start: Option<Point>,
    goal: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawObstacleMap> for ObstacleMap {
    type Error = MapError;

    fn try_from(raw: RawObstacleMap) -> Result<Self, MapError> {
        Self::from_parts(raw.width, raw.height, raw.blocked, raw.start, raw.goal)
    }
}

impl ObstacleMap {
    /// An all-open map. Dimensions below 1 are clamped to 1.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
            start: None,
            goal: None,
        }
    }

    /// Parse a map where `#` is blocked and `.`, `S`, `G` are open.
    ///
    /// Leading and trailing blank lines are ignored; every remaining line
    /// must have the same width. `S` and `G` may each appear at most once.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut blocked = Vec::with_capacity(width * lines.len());
        let mut start = None;
        let mut goal = None;
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentSize {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    WALL => blocked.push(true),
                    FLOOR => blocked.push(false),
                    START | GOAL => {
                        let slot = if ch == START { &mut start } else { &mut goal };
                        if let Some(first) = *slot {
                            return Err(MapError::DuplicateMarker {
                                marker: ch,
                                first,
                                second: pos,
                            });
                        }
                        *slot = Some(pos);
                        blocked.push(false);
                    }
                    _ => return Err(MapError::InvalidRune { ch, pos }),
                }
            }
        }

        Ok(Self {
            width: width as i32,
            height: lines.len() as i32,
            blocked,
            start,
            goal,
        })
    }

    /// Assemble a map from its fields, checking that `blocked` has one
    /// entry per cell and that both markers lie inside the map.
    pub fn from_parts(
        width: i32,
        height: i32,
        blocked: Vec<bool>,
        start: Option<Point>,
        goal: Option<Point>,
    ) -> Result<Self, MapError> {
        if width < 1 || height < 1 {
            return Err(MapError::Empty);
        }
        let cells = (width as usize).checked_mul(height as usize);
        if cells != Some(blocked.len()) {
            return Err(MapError::CellCountMismatch {
                width,
                height,
                found: blocked.len(),
            });
        }
        let rng = Range::with_size(width, height);
        for (marker, pos) in [(START, start), (GOAL, goal)] {
            if let Some(pos) = pos.filter(|&p| !rng.contains(p)) {
                return Err(MapError::MarkerOutOfBounds { marker, pos });
            }
        }
        Ok(Self {
            width,
            height,
            blocked,
            start,
            goal,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn range(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    /// Row-major occupancy, ready for
    /// [`AstarSolver::find_path`](crate::AstarSolver::find_path).
    #[inline]
    pub fn blocked(&self) -> &[bool] {
        &self.blocked
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn set_start(&mut self, p: Option<Point>) {
        self.start = p;
    }

    pub fn set_goal(&mut self, p: Option<Point>) {
        self.goal = p;
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.range().contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Whether `p` is blocked. Points outside the map count as blocked.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.idx(p).is_none_or(|i| self.blocked[i])
    }

    /// Block or open a cell. Out-of-range points are ignored.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        if let Some(i) = self.idx(p) {
            self.blocked[i] = blocked;
        }
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Draw the map with `path` overlaid as `*`; start and goal markers
    /// win over path cells.
    pub fn render(&self, path: &[Point]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        if self.is_blocked(Point::new(x, y)) {
                            WALL
                        } else {
                            FLOOR
                        }
                    })
                    .collect()
            })
            .collect();
        let mut put = |p: Point, ch: char| {
            if self.range().contains(p) {
                rows[p.y as usize][p.x as usize] = ch;
            }
        };
        for &p in path {
            put(p, PATH);
        }
        if let Some(p) = self.start {
            put(p, START);
        }
        if let Some(p) = self.goal {
            put(p, GOAL);
        }

        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

impl std::str::FromStr for ObstacleMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObstacleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn rejects_wrong_cell_count() {
        let json = r#"{"width":3,"height":3,"blocked":[false],"start":null,"goal":null}"#;
        let err = serde_json::from_str::<ObstacleMap>(json).unwrap_err();
        assert!(err.to_string().contains("map is 3x3 but has 1 cells"), "{err}");
    }

    #[test]
    fn rejects_marker_outside_map() {
        let json = r#"{"width":2,"height":1,"blocked":[false,false],"start":{"x":5,"y":0},"goal":null}"#;
        let err = serde_json::from_str::<ObstacleMap>(json).unwrap_err();
        assert!(err.to_string().contains("outside the map"), "{err}");
    }

    #[test]
    fn map_round_trip() {
        let m = ObstacleMap::parse("S#\n.G").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: ObstacleMap = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
