//! Planar coordinate type and the distance metric used for every edge
//! weight and nearest-neighbour query.
//!
//! Coordinates live on a flat plane; there is no projection or great-circle
//! correction.  The origin `(0, 0)` doubles as the "unset" sentinel, so an
//! entity placed exactly there is rejected by validation.

use std::fmt;

/// An immutable 2-D point.  Equality is exact (no tolerance).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// The "unset" sentinel.
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` if this is the origin sentinel.
    #[inline]
    pub fn is_unset(self) -> bool {
        self == Self::ORIGIN
    }

    /// Squared Euclidean distance.  Monotone in [`distance`](Self::distance),
    /// so it may be used for ordering without the square root.
    #[inline]
    pub fn distance_2(self, other: Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance `√((x1−x2)² + (y1−y2)²)`.  Never negative, and
    /// symmetric bit-for-bit: `a.distance(b) == b.distance(a)`.
    #[inline]
    pub fn distance(self, other: Coordinate) -> f64 {
        self.distance_2(other).sqrt()
    }

    /// `[x, y]` array form, as stored in the R-tree index.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
