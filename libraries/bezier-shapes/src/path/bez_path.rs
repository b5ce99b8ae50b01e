use super::*;
use crate::CurveHandles;

use glam::DVec2;
use kurbo::{BezPath, PathEl};

fn to_kurbo(point: DVec2) -> kurbo::Point {
	kurbo::Point::new(point.x, point.y)
}

impl From<&Path> for BezPath {
	fn from(path: &Path) -> Self {
		let Some(first) = path.first_segment() else {
			return BezPath::new();
		};

		let mut elements = vec![PathEl::MoveTo(to_kurbo(first.anchor))];
		elements.extend(path.iter().map(|curve| match curve.handles {
			CurveHandles::Linear => PathEl::LineTo(to_kurbo(curve.end)),
			CurveHandles::Cubic { handle_start, handle_end } => PathEl::CurveTo(to_kurbo(handle_start), to_kurbo(handle_end), to_kurbo(curve.end)),
		}));
		if path.closed {
			elements.push(PathEl::ClosePath);
		}

		BezPath::from_vec(elements)
	}
}
