use crate::consts::*;
use crate::path::Segment;
use crate::utils;

use glam::DVec2;
use std::fmt::{Debug, Formatter, Result, Write};

/// Representation of the handle points in a curve between two adjacent segments, in absolute coordinates.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveHandles {
	/// Both adjoining handles are zero, so the curve is a straight line.
	Linear,
	/// Handles for a cubic curve.
	Cubic {
		/// Point representing the location of the handle associated to the start point.
		handle_start: DVec2,
		/// Point representing the location of the handle associated to the end point.
		handle_end: DVec2,
	},
}

/// A single curve of a [crate::Path], running from one segment's anchor to the next one's.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
	/// Start point of the curve.
	pub start: DVec2,
	/// End point of the curve.
	pub end: DVec2,
	/// Handles of the curve.
	pub handles: CurveHandles,
}

impl Debug for Curve {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		let mut debug_struct = f.debug_struct("Curve");
		let mut debug_struct_ref = debug_struct.field("start", &self.start);
		debug_struct_ref = match self.handles {
			CurveHandles::Linear => debug_struct_ref,
			CurveHandles::Cubic { handle_start, handle_end } => debug_struct_ref.field("handle_start", &handle_start).field("handle_end", &handle_end),
		};
		debug_struct_ref.field("end", &self.end).finish()
	}
}

impl Curve {
	pub fn from_linear(start: DVec2, end: DVec2) -> Self {
		Self { start, end, handles: CurveHandles::Linear }
	}

	pub fn from_cubic(start: DVec2, handle_start: DVec2, handle_end: DVec2, end: DVec2) -> Self {
		Self {
			start,
			end,
			handles: CurveHandles::Cubic { handle_start, handle_end },
		}
	}

	/// Builds the curve leaving `start` through its out handle and entering `end` through its in handle.
	/// The relative handle offsets are converted to absolute handle positions here.
	pub fn between(start: &Segment, end: &Segment) -> Self {
		if start.handle_out.is_zero() && end.handle_in.is_zero() {
			return Self::from_linear(start.anchor, end.anchor);
		}
		Self::from_cubic(start.anchor, start.handle_out.to_absolute(start.anchor), end.handle_in.to_absolute(end.anchor), end.anchor)
	}

	pub fn is_linear(&self) -> bool {
		matches!(self.handles, CurveHandles::Linear)
	}

	/// The four control points of the curve. A straight line is elevated to the cubic with handles at its thirds,
	/// which traces the same points at the same `t`-values.
	pub fn control_points(&self) -> [DVec2; 4] {
		match self.handles {
			CurveHandles::Linear => [self.start, self.start.lerp(self.end, 1. / 3.), self.start.lerp(self.end, 2. / 3.), self.end],
			CurveHandles::Cubic { handle_start, handle_end } => [self.start, handle_start, handle_end, self.end],
		}
	}

	/// Calculate the point on the curve based on the parametric `t`-value provided, expected to lie in `[0, 1]`.
	pub fn evaluate(&self, t: f64) -> DVec2 {
		if self.is_linear() {
			return self.start.lerp(self.end, t);
		}
		let [p0, p1, p2, p3] = self.control_points();
		let one_minus_t = 1. - t;
		p0 * one_minus_t.powi(3) + p1 * 3. * one_minus_t.powi(2) * t + p2 * 3. * one_minus_t * t.powi(2) + p3 * t.powi(3)
	}

	/// Returns the parametric `t`-values in `(0, 1)` where the curve reaches a local extremum along the x and y axes.
	pub fn local_extrema(&self) -> [Vec<f64>; 2] {
		let CurveHandles::Cubic { handle_start, handle_end } = self.handles else {
			return [Vec::new(), Vec::new()];
		};

		// The derivative is a quadratic in the differences of consecutive control points
		let d0 = handle_start - self.start;
		let d1 = handle_end - handle_start;
		let d2 = self.end - handle_end;
		let a = d0 - 2. * d1 + d2;
		let b = 2. * (d1 - d0);
		let c = d0;

		[(a.x, b.x, c.x), (a.y, b.y, c.y)].map(|(a, b, c)| utils::solve_quadratic(a, b, c).into_iter().flatten().filter(|&t| t > 0. && t < 1.).collect())
	}

	/// Return the min and max corners that represent the bounding box of the curve.
	pub fn bounding_box(&self) -> [DVec2; 2] {
		// Start by taking min/max of endpoints.
		let mut endpoints_min = self.start.min(self.end);
		let mut endpoints_max = self.start.max(self.end);

		for t in self.local_extrema().into_iter().flatten() {
			let point = self.evaluate(t);
			endpoints_min = endpoints_min.min(point);
			endpoints_max = endpoints_max.max(point);
		}

		[endpoints_min, endpoints_max]
	}

	/// Signed area swept between the curve and the origin.
	/// Summed over a closed path this gives the enclosed area, positive when the path turns from +X towards +Y.
	pub fn area(&self) -> f64 {
		let [p0, p1, p2, p3] = self.control_points();
		(6. * p0.perp_dot(p1) + 3. * p0.perp_dot(p2) + p0.perp_dot(p3) + 3. * p1.perp_dot(p2) + 3. * p1.perp_dot(p3) + 6. * p2.perp_dot(p3)) / 20.
	}

	/// Returns the same curve traversed from its end to its start.
	#[must_use]
	pub fn reversed(&self) -> Self {
		let handles = match self.handles {
			CurveHandles::Linear => CurveHandles::Linear,
			CurveHandles::Cubic { handle_start, handle_end } => CurveHandles::Cubic {
				handle_start: handle_end,
				handle_end: handle_start,
			},
		};
		Self {
			start: self.end,
			end: self.start,
			handles,
		}
	}

	/// Returns a curve that results from applying the transformation function to each point of the curve.
	#[must_use]
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Self {
		let handles = match self.handles {
			CurveHandles::Linear => CurveHandles::Linear,
			CurveHandles::Cubic { handle_start, handle_end } => CurveHandles::Cubic {
				handle_start: transformation_function(handle_start),
				handle_end: transformation_function(handle_end),
			},
		};
		Self {
			start: transformation_function(self.start),
			end: transformation_function(self.end),
			handles,
		}
	}

	/// Write the curve argument to the string
	pub fn write_curve_argument(&self, svg: &mut String) -> std::fmt::Result {
		match self.handles {
			CurveHandles::Linear => svg.push_str(SVG_ARG_LINEAR),
			CurveHandles::Cubic { handle_start, handle_end } => write!(svg, "{SVG_ARG_CUBIC}{:.6},{:.6} {:.6},{:.6}", handle_start.x, handle_start.y, handle_end.x, handle_end.y)?,
		}
		write!(svg, " {:.6},{:.6}", self.end.x, self.end.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};
	use crate::path::HandleOffset;

	#[test]
	fn between_uses_absolute_handles() {
		let start = Segment::new(DVec2::new(0., 0.), HandleOffset::ZERO, HandleOffset::new(10., 0.));
		let end = Segment::new(DVec2::new(20., 20.), HandleOffset::new(0., -10.), HandleOffset::ZERO);
		let curve = Curve::between(&start, &end);
		assert_eq!(curve, Curve::from_cubic(DVec2::new(0., 0.), DVec2::new(10., 0.), DVec2::new(20., 10.), DVec2::new(20., 20.)));

		let straight = Curve::between(&Segment::new_anchor(DVec2::ZERO), &Segment::new_anchor(DVec2::ONE));
		assert!(straight.is_linear());
	}

	#[test]
	fn evaluate_endpoints_and_midpoint() {
		let curve = Curve::from_cubic(DVec2::new(0., 0.), DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.));
		assert!(compare_points(curve.evaluate(0.), DVec2::new(0., 0.)));
		assert!(compare_points(curve.evaluate(1.), DVec2::new(10., 0.)));
		assert!(compare_points(curve.evaluate(0.5), DVec2::new(5., 7.5)));

		let line = Curve::from_linear(DVec2::new(0., 0.), DVec2::new(4., 2.));
		assert!(compare_points(line.evaluate(0.25), DVec2::new(1., 0.5)));
	}

	#[test]
	fn elevated_line_moves_evenly() {
		let line = Curve::from_linear(DVec2::new(1., 1.), DVec2::new(7., 4.));
		let [start, handle_start, handle_end, end] = line.control_points();
		let elevated = Curve::from_cubic(start, handle_start, handle_end, end);

		for t in [0., 0.1, 0.25, 0.5, 0.9, 1.] {
			assert!(compare_points(elevated.evaluate(t), line.evaluate(t)));
			assert!(compare_points(line.evaluate(t), DVec2::new(1. + 6. * t, 1. + 3. * t)));
		}
	}

	#[test]
	fn bounding_box_includes_extrema() {
		let curve = Curve::from_cubic(DVec2::new(0., 0.), DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.));
		let [min, max] = curve.bounding_box();
		assert!(compare_points(min, DVec2::new(0., 0.)));
		assert!(compare_points(max, DVec2::new(10., 7.5)));
	}

	#[test]
	fn area_of_straight_triangle() {
		let edges = [
			Curve::from_linear(DVec2::new(0., 0.), DVec2::new(4., 0.)),
			Curve::from_linear(DVec2::new(4., 0.), DVec2::new(0., 3.)),
			Curve::from_linear(DVec2::new(0., 3.), DVec2::new(0., 0.)),
		];
		let area: f64 = edges.iter().map(Curve::area).sum();
		assert!(compare_f64s(area, 6.));

		let reversed: f64 = edges.iter().map(|curve| curve.reversed().area()).sum();
		assert!(compare_f64s(reversed, -6.));
	}

	#[test]
	fn svg_argument() {
		let mut svg = String::new();
		Curve::from_linear(DVec2::ZERO, DVec2::new(1., 2.)).write_curve_argument(&mut svg).unwrap();
		assert_eq!(svg, "L 1.000000,2.000000");
	}
}
