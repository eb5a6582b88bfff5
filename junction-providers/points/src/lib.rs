//! Point-cloud provider that turns `x,y,z` lines into a weight-ordered edge
//! list for the junction cluster engine.

mod cloud;
mod errors;
mod point;

pub use cloud::PointCloud;
pub use errors::{PointsError, PointsErrorCode};
pub use point::{Point3, PointParseError};
