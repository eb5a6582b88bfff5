//! Integer points in three dimensions.

use std::str::FromStr;

/// A point with integer coordinates.
///
/// # Examples
/// ```
/// use junction_providers_points::Point3;
///
/// let origin = Point3::new(0, 0, 0);
/// let far = Point3::new(3, 4, 12);
/// assert_eq!(origin.squared_distance(&far), 169);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point3 {
    x: i32,
    y: i32,
    z: i32,
}

impl Point3 {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i32 { self.x }

    /// Returns the y coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i32 { self.y }

    /// Returns the z coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn z(&self) -> i32 { self.z }

    /// Returns the squared Euclidean distance to `other`.
    ///
    /// Each axis difference fits in 33 bits, so the sum of three squares is
    /// exact in a `u128`. Squared distances order pairs exactly as true
    /// distances do without any floating point.
    #[must_use]
    pub const fn squared_distance(&self, other: &Self) -> u128 {
        let dx = axis_gap(self.x, other.x);
        let dy = axis_gap(self.y, other.y);
        let dz = axis_gap(self.z, other.z);
        dx * dx + dy * dy + dz * dz
    }
}

const fn axis_gap(left: i32, right: i32) -> u128 {
    (left as i64 - right as i64).unsigned_abs() as u128
}

impl FromStr for Point3 {
    type Err = PointParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut fields = raw.split(',').map(str::trim);
        let (Some(x), Some(y), Some(z), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(PointParseError::FieldCount);
        };
        let coordinate = |value: &str| {
            value
                .parse::<i32>()
                .map_err(|_| PointParseError::Coordinate(value.to_owned()))
        };
        Ok(Self::new(coordinate(x)?, coordinate(y)?, coordinate(z)?))
    }
}

/// Reason a single `x,y,z` field list failed to parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PointParseError {
    /// The line did not contain exactly three fields.
    FieldCount,
    /// A field was not a valid coordinate.
    Coordinate(String),
}
