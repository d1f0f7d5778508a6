//! JSON input format for curve sampling requests.
//!
//! ```json
//! {
//!     "control_points": [
//!         {"x": 0, "y": 0},
//!         {"x": 2, "y": 0},
//!         {"x": 2, "y": 2}
//!     ],
//!     "samples": 5
//! }
//! ```

use super::table::PointTable;
use crate::data::{ControlPoint, ControlPolygon};
use crate::error::BezierResult;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JsonRequest {
    control_points: Vec<JsonPoint>,
    samples: usize,
}

#[derive(Debug, Deserialize)]
struct JsonPoint {
    x: i64,
    y: i64,
}

impl PointTable {
    /// Parse a sampling request from its JSON representation
    pub fn from_json(data: &str) -> BezierResult<Self> {
        let request: JsonRequest = serde_json::from_str(data)?;
        let points = request
            .control_points
            .into_iter()
            .map(|p| ControlPoint::new(p.x, p.y))
            .collect();

        Ok(Self {
            polygon: ControlPolygon::new(points)?,
            sample_count: request.samples,
        })
    }
}
