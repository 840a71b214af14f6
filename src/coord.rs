use std::collections::HashSet;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::pattern::ParseError;

/// A cell position on the unbounded grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

/// The set of live cells of one generation.
///
/// Membership is the only state the engine keeps: a coordinate present in
/// the set is alive, everything else is dead.
pub type CellSet = HashSet<Coord>;

impl Coord {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 Moore neighbors of `self`, in `MOORE_STEPS` order.
    #[inline]
    pub fn neighbors(self) -> [Coord; 8] {
        MOORE_STEPS.map(|step| self + step)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = ParseError;

    /// Parses the external `"x,y"` form. Components must be integers;
    /// surrounding whitespace is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (x, y) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => {
                return Err(ParseError::BadArity {
                    input: s.to_string(),
                })
            }
        };
        let parse = |component: &str| {
            component
                .trim()
                .parse::<i64>()
                .map_err(|_| ParseError::BadInteger {
                    input: s.to_string(),
                    component: component.trim().to_string(),
                })
        };
        Ok(Coord::new(parse(x)?, parse(y)?))
    }
}

/// The 8 king steps around the origin, clockwise from north.
pub const MOORE_STEPS: [Coord; 8] = [
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: 0 },
    Coord { x: 1, y: -1 },
    Coord { x: 0, y: -1 },
    Coord { x: -1, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: -1, y: 1 },
];
