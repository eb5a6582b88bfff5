//! Named collections of points and their all-pairs edge lists.

use std::io::BufRead;

use junction_core::WeightedEdge;
use rayon::prelude::*;

use crate::{Point3, PointParseError, PointsError};

/// A named, non-empty collection of points.
///
/// # Examples
/// ```
/// use junction_providers_points::PointCloud;
///
/// let cloud = PointCloud::parse("demo", "0,0,0\n1,0,0\n5,0,0\n")?;
/// let edges = cloud.sorted_edges()?;
/// let pairs: Vec<_> = edges.iter().map(|edge| edge.endpoints()).collect();
/// assert_eq!(pairs, [(0, 1), (1, 2), (0, 2)]);
/// # Ok::<(), junction_providers_points::PointsError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PointCloud {
    name: String,
    points: Vec<Point3>,
}

impl PointCloud {
    /// Creates a cloud from already-parsed points.
    ///
    /// # Errors
    /// Returns [`PointsError::EmptyInput`] when `points` is empty.
    pub fn new(name: impl Into<String>, points: Vec<Point3>) -> Result<Self, PointsError> {
        if points.is_empty() {
            return Err(PointsError::EmptyInput);
        }
        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// Parses one `x,y,z` point per line. Blank lines are skipped and
    /// surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`PointsError::MalformedLine`] or
    /// [`PointsError::InvalidCoordinate`] for unparsable lines and
    /// [`PointsError::EmptyInput`] when no points remain.
    pub fn parse(name: impl Into<String>, raw: &str) -> Result<Self, PointsError> {
        let points = raw
            .lines()
            .enumerate()
            .filter_map(|(index, line)| parse_line(index, line).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, points)
    }

    /// Reads points from `reader`, one `x,y,z` triple per line.
    ///
    /// # Errors
    /// Returns [`PointsError::Io`] when reading fails, plus every error
    /// documented on [`PointCloud::parse`].
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, PointsError> {
        let mut points = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            if let Some(point) = parse_line(index, &line?)? {
                points.push(point);
            }
        }
        Self::new(name, points)
    }

    /// Returns the cloud's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the cloud has no points.
    ///
    /// Construction rejects empty input, so this is always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point3> {
        self.points.get(index)
    }

    /// Returns every point in input order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Builds an edge for every unordered pair `(i, j)` with `i < j`,
    /// weighted by squared distance.
    ///
    /// Edges are sorted by `(weight, source, target)`, so equal distances
    /// resolve in index order and the output is identical across runs.
    ///
    /// # Errors
    /// Returns [`PointsError::CapacityOverflow`] when the pair count does
    /// not fit in a `usize`.
    pub fn sorted_edges(&self) -> Result<Vec<WeightedEdge<u128>>, PointsError> {
        let count = self.points.len();
        let pair_count = count
            .checked_mul(count.saturating_sub(1))
            .map(|doubled| doubled >> 1)
            .ok_or(PointsError::CapacityOverflow { points: count })?;

        let points = &self.points;
        let mut edges: Vec<WeightedEdge<u128>> = Vec::with_capacity(pair_count);
        edges.par_extend(points.par_iter().enumerate().flat_map_iter(
            |(source, left)| {
                points
                    .iter()
                    .enumerate()
                    .skip(source.saturating_add(1))
                    .map(move |(target, right)| {
                        WeightedEdge::new(source, target, left.squared_distance(right))
                    })
            },
        ));

        edges.par_sort_unstable_by_key(|edge| (edge.weight(), edge.source(), edge.target()));
        Ok(edges)
    }
}

/// Parses line `index` (zero-based). Returns `None` for blank lines.
fn parse_line(index: usize, line: &str) -> Result<Option<Point3>, PointsError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let number = index.saturating_add(1);
    trimmed
        .parse::<Point3>()
        .map(Some)
        .map_err(|err| match err {
            PointParseError::FieldCount => PointsError::MalformedLine {
                line: number,
                content: trimmed.to_owned(),
            },
            PointParseError::Coordinate(value) => PointsError::InvalidCoordinate {
                line: number,
                value,
            },
        })
}
