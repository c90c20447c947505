//! Integer room coordinates and the two distance measures the solver uses.
//!
//! Coordinates are plain map units from the input file; they carry no
//! physical meaning beyond steering the path heuristics.

/// A room position as declared in the colony description.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Taxicab distance `|dx| + |dy|`, saturating at `u64::MAX`.
    #[inline]
    pub fn manhattan(self, other: Point) -> u64 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Perpendicular distance from `self` to the infinite line through `a`
    /// and `b`.
    ///
    /// Returns `None` when `a` and `b` coincide (also after rounding to
    /// `f64`), since no line is defined.  Differences are taken in `f64`, so
    /// any `i64` coordinates are accepted.
    pub fn distance_to_line(self, a: Point, b: Point) -> Option<f64> {
        if a == b {
            return None;
        }
        let (ax, ay) = (a.x as f64, a.y as f64);
        let dx = b.x as f64 - ax;
        let dy = b.y as f64 - ay;
        let len = dx.hypot(dy);
        if len == 0.0 {
            return None;
        }
        let cross = dy * (self.x as f64 - ax) - dx * (self.y as f64 - ay);
        Some(cross.abs() / len)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
