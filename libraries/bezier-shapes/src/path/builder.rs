use super::*;
use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, MAX_ARC_PIECE_DEGREES};
use crate::error::{DegenerateGeometry, ShapeError};
use crate::utils;

use glam::DVec2;

/// Incremental drawing operations that extend a `Path` from its last segment.
impl Path {
	/// Start the outline at `point`.
	/// A lone starting segment is replaced, while a path that already has curves is left untouched.
	pub fn move_to(&mut self, point: DVec2) {
		match self.len() {
			0 => self.add(point),
			1 => self.segments[0] = Segment::new_anchor(point),
			len => log::warn!("Ignoring move_to on a path that already has {len} segments"),
		}
	}

	/// Append a straight line to `point`.
	pub fn line_to(&mut self, point: DVec2) {
		self.add(point);
	}

	/// Append a cubic curve to `to`, with both handles given in absolute coordinates.
	pub fn cubic_curve_to(&mut self, handle_start: DVec2, handle_end: DVec2, to: DVec2) -> Result<(), ShapeError> {
		let current = self.last_segment_mut().ok_or(DegenerateGeometry::EmptyPath)?;
		current.handle_out = HandleOffset::from_absolute(current.anchor, handle_start);
		self.add_curved(to, Some(HandleOffset::from_absolute(to, handle_end)), None);
		Ok(())
	}

	/// Append a quadratic curve to `to`, elevated to the equivalent cubic.
	pub fn quadratic_curve_to(&mut self, handle: DVec2, to: DVec2) -> Result<(), ShapeError> {
		let current = self.last_segment().ok_or(DegenerateGeometry::EmptyPath)?.anchor;
		// C1 = Q0 + (2/3) (Q1 - Q0)
		// C2 = Q2 + (2/3) (Q1 - Q2)
		self.cubic_curve_to(current + 2. / 3. * (handle - current), to + 2. / 3. * (handle - to), to)
	}

	/// Append a circular arc that starts at the last segment, passes through `through` and ends at `to`.
	///
	/// The arc is split into pieces of at most 90° so each piece is one cubic curve.
	/// When the three points are collinear and `through` lies between the ends, a straight line is added instead.
	/// Any two of the three points coinciding leaves no circle to follow, which is an error.
	pub fn arc_to(&mut self, through: DVec2, to: DVec2) -> Result<(), ShapeError> {
		let from = self.last_segment().ok_or(DegenerateGeometry::EmptyPath)?.anchor;
		if !through.is_finite() || !to.is_finite() {
			return Err(DegenerateGeometry::NonFinite("arc point").into());
		}
		let coincident = |a: DVec2, b: DVec2| a.abs_diff_eq(b, MAX_ABSOLUTE_DIFFERENCE);
		if coincident(from, to) || coincident(from, through) || coincident(through, to) {
			return Err(DegenerateGeometry::CoincidentArcPoints.into());
		}

		let through_side = utils::side_of_segment(from, to, through);
		let Some(center) = utils::circle_center_through_points(from, through, to) else {
			if through_side == 0 {
				log::warn!("Arc points {from}, {through}, {to} are collinear, adding a straight line instead");
				self.line_to(to);
				return Ok(());
			}
			return Err(DegenerateGeometry::CollinearArc.into());
		};

		let mut vector = from - center;
		let mut extent = utils::directed_angle_degrees(vector, to - center);
		let center_side = utils::side_of_segment(from, to, center);
		if center_side == 0 {
			// Half circle, the through point decides which half
			extent = through_side as f64 * extent.abs();
		} else if through_side == center_side {
			// The through point is on the far side of the center, so take the long way around
			extent += if extent < 0. { 360. } else { -360. };
		}

		let count = if extent.abs() >= 360. { 4 } else { ((extent.abs() / MAX_ARC_PIECE_DEGREES).ceil() as usize).max(1) };
		let increment = extent / count as f64;
		let half = (increment / 2.).to_radians();
		let handle_factor = 4. / 3. * half.sin() / (1. + half.cos());

		for i in 0..=count {
			let (anchor, handle_out) = if i < count {
				(center + vector, HandleOffset::from_vector(vector.perp() * handle_factor))
			} else {
				(to, HandleOffset::ZERO)
			};

			if i == 0 {
				if let Some(current) = self.last_segment_mut() {
					current.handle_out = handle_out;
				}
			} else {
				let handle_in = HandleOffset::from_vector(-vector.perp() * handle_factor);
				self.add_segment(Segment::new(anchor, handle_in, handle_out));
			}
			vector = utils::rotate_degrees(vector, increment);
		}

		Ok(())
	}

	/// Close the path so its last segment connects back to its first.
	pub fn close(&mut self) {
		self.closed = true;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};
	use crate::consts::CIRCLE_HANDLE_RATIO;

	fn arc(from: DVec2, through: DVec2, to: DVec2) -> Result<Path, ShapeError> {
		let mut path = Path::default();
		path.move_to(from);
		path.arc_to(through, to)?;
		Ok(path)
	}

	#[test]
	fn move_to_replaces_lone_segment() {
		let mut path = Path::default();
		path.move_to(DVec2::ONE);
		path.move_to(DVec2::new(2., 2.));
		assert_eq!(path.anchors(), vec![DVec2::new(2., 2.)]);

		path.line_to(DVec2::new(3., 3.));
		path.move_to(DVec2::ZERO);
		assert_eq!(path.len(), 2);
	}

	#[test]
	fn cubic_curve_to_stores_relative_handles() {
		let mut path = Path::default();
		path.move_to(DVec2::new(10., 10.));
		path.cubic_curve_to(DVec2::new(15., 10.), DVec2::new(20., 15.), DVec2::new(20., 20.)).unwrap();

		assert_eq!(path[0].handle_out, HandleOffset::new(5., 0.));
		assert_eq!(path[1].handle_in, HandleOffset::new(0., -5.));
		assert!(path[1].handle_out.is_zero());
	}

	#[test]
	fn quadratic_curve_to_elevates() {
		let mut path = Path::default();
		path.move_to(DVec2::new(0., 0.));
		path.quadratic_curve_to(DVec2::new(3., 3.), DVec2::new(6., 0.)).unwrap();

		let curve = path.get_curve(0).unwrap();
		// A quadratic through its control point peaks at half the control point's height
		assert!(compare_points(curve.evaluate(0.5), DVec2::new(3., 1.5)));
	}

	#[test]
	fn curves_need_a_start() {
		let mut path = Path::default();
		assert_eq!(path.cubic_curve_to(DVec2::ZERO, DVec2::ZERO, DVec2::ONE), Err(ShapeError::from(DegenerateGeometry::EmptyPath)));
		assert_eq!(path.arc_to(DVec2::ZERO, DVec2::ONE), Err(ShapeError::from(DegenerateGeometry::EmptyPath)));
	}

	#[test]
	fn half_circle_arc() {
		let path = arc(DVec2::new(-10., 0.), DVec2::new(0., -10.), DVec2::new(10., 0.)).unwrap();

		assert_eq!(path.len(), 3);
		assert!(compare_points(path[1].anchor, DVec2::new(0., -10.)));
		assert!(compare_points(path[2].anchor, DVec2::new(10., 0.)));
		for segment in path.segments() {
			assert!(compare_f64s(segment.anchor.length(), 10.));
		}
		// Each 90° piece uses the quarter circle handle length
		assert!(compare_f64s(path[0].handle_out.length(), 10. * CIRCLE_HANDLE_RATIO));
		assert!(compare_f64s(path[1].handle_in.length(), 10. * CIRCLE_HANDLE_RATIO));
		assert!(path[0].handle_in.is_zero());
		assert!(path[2].handle_out.is_zero());
	}

	#[test]
	fn three_quarter_arc_takes_the_long_way() {
		let path = arc(DVec2::new(0., 1.), DVec2::new(-1., 0.), DVec2::new(1., 0.)).unwrap();

		assert_eq!(path.len(), 4);
		assert!(compare_points(path[1].anchor, DVec2::new(-1., 0.)));
		assert!(compare_points(path[2].anchor, DVec2::new(0., -1.)));
		assert!(compare_points(path[3].anchor, DVec2::new(1., 0.)));
	}

	#[test]
	fn arc_passes_through_point() {
		let through = DVec2::new(3., 4.);
		let path = arc(DVec2::new(-5., 0.), through, DVec2::new(5., 0.)).unwrap();

		let closest = path
			.iter()
			.flat_map(|curve| (0..=100).map(move |i| curve.evaluate(i as f64 / 100.)))
			.map(|point| point.distance(through))
			.fold(f64::INFINITY, f64::min);
		assert!(closest < 0.05);

		for curve in path.iter() {
			assert!(compare_f64s(curve.evaluate(0.5).length(), 5.));
		}
	}

	#[test]
	fn collinear_arcs() {
		let line = arc(DVec2::new(0., 0.), DVec2::new(5., 0.), DVec2::new(10., 0.)).unwrap();
		assert_eq!(line.len(), 2);
		assert!(line.iter().all(|curve| curve.is_linear()));

		let error = arc(DVec2::new(0., 0.), DVec2::new(15., 0.), DVec2::new(10., 0.));
		assert_eq!(error, Err(ShapeError::from(DegenerateGeometry::CollinearArc)));
	}

	#[test]
	fn coincident_arc_points() {
		let expected = Err(ShapeError::from(DegenerateGeometry::CoincidentArcPoints));
		assert_eq!(arc(DVec2::ZERO, DVec2::new(10., 0.), DVec2::ZERO), expected);
		assert_eq!(arc(DVec2::ZERO, DVec2::ZERO, DVec2::new(10., 0.)), expected);
		assert_eq!(arc(DVec2::ZERO, DVec2::new(10., 0.), DVec2::new(10., 0.)), expected);

		let mut path = Path::default();
		path.move_to(DVec2::ONE);
		assert!(path.arc_to(DVec2::new(5., 5.), DVec2::ONE).is_err());
		assert_eq!(path.len(), 1);
	}
}
