use super::*;

use glam::{DAffine2, DVec2};

/// Functionality that transforms or measures whole Paths.
impl Path {
	/// Apply an affine transformation. Anchors are transformed as points, while the relative handles only pick up the linear part.
	pub fn apply_transformation(&mut self, transform: DAffine2) {
		for segment in &mut self.segments {
			segment.anchor = transform.transform_point2(segment.anchor);
			segment.handle_in = segment.handle_in.transform(transform);
			segment.handle_out = segment.handle_out.transform(transform);
		}
	}

	/// Move every anchor by `offset`.
	pub fn translate(&mut self, offset: DVec2) {
		self.apply_transformation(DAffine2::from_translation(offset));
	}

	/// Returns the path traversed in the opposite direction, with each segment's handles swapped to match.
	#[must_use]
	pub fn reversed(&self) -> Path {
		Path {
			segments: self.segments.iter().rev().map(Segment::flipped).collect(),
			closed: self.closed,
		}
	}

	/// The signed area enclosed by the path, treating an open path as if it were closed with a straight line.
	///
	/// The area is positive when the outline turns from the +X axis towards the +Y axis.
	/// With `y` pointing down, as on screen, that is a clockwise outline.
	pub fn area(&self) -> f64 {
		let mut area: f64 = self.iter().map(|curve| curve.area()).sum();
		if !self.closed {
			if let (Some(first), Some(last)) = (self.first_segment(), self.last_segment()) {
				area += Curve::from_linear(last.anchor, first.anchor).area();
			}
		}
		area
	}

	/// Returns true if the outline winds clockwise on a screen where `y` points down.
	pub fn is_clockwise(&self) -> bool {
		self.area() >= 0.
	}

	/// Return the min and max corners that represent the bounding box of the path, or `None` for an empty path.
	pub fn bounding_box(&self) -> Option<[DVec2; 2]> {
		let first = self.first_segment()?.anchor;
		Some(self.iter().map(|curve| curve.bounding_box()).fold([first, first], |[min, max], [curve_min, curve_max]| {
			[min.min(curve_min), max.max(curve_max)]
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};

	fn square() -> Path {
		Path::from_anchors([DVec2::new(0., 0.), DVec2::new(10., 0.), DVec2::new(10., 10.), DVec2::new(0., 10.)], true)
	}

	#[test]
	fn transformation_keeps_handles_relative() {
		let mut path = Path::new(
			vec![
				Segment::new(DVec2::new(0., 0.), HandleOffset::ZERO, HandleOffset::new(1., 0.)),
				Segment::new(DVec2::new(4., 0.), HandleOffset::new(-1., 0.), HandleOffset::ZERO),
			],
			false,
		);
		path.apply_transformation(DAffine2::from_scale_angle_translation(DVec2::splat(2.), 0., DVec2::new(5., 5.)));

		assert_eq!(path[0].anchor, DVec2::new(5., 5.));
		assert_eq!(path[1].anchor, DVec2::new(13., 5.));
		assert_eq!(path[0].handle_out, HandleOffset::new(2., 0.));
		assert_eq!(path[1].handle_in, HandleOffset::new(-2., 0.));
	}

	#[test]
	fn translate() {
		let mut path = square();
		path.translate(DVec2::new(1., 2.));
		assert_eq!(path[0].anchor, DVec2::new(1., 2.));
		assert_eq!(path[2].anchor, DVec2::new(11., 12.));
	}

	#[test]
	fn reversed_flips_winding() {
		let path = square();
		assert!(compare_f64s(path.area(), 100.));
		assert!(path.is_clockwise());

		let reversed = path.reversed();
		assert!(compare_f64s(reversed.area(), -100.));
		assert!(!reversed.is_clockwise());
		assert_eq!(reversed[0].anchor, DVec2::new(0., 10.));
	}

	#[test]
	fn reversed_swaps_handles() {
		let path = Path::new(vec![Segment::new(DVec2::ZERO, HandleOffset::new(0., 1.), HandleOffset::new(1., 0.)), Segment::new_anchor(DVec2::ONE)], false);
		let reversed = path.reversed();
		assert_eq!(reversed[1].handle_in, HandleOffset::new(1., 0.));
		assert_eq!(reversed[1].handle_out, HandleOffset::new(0., 1.));
	}

	#[test]
	fn open_path_area_closes_implicitly() {
		let mut path = square();
		path.set_closed(false);
		assert!(compare_f64s(path.area(), 100.));
	}

	#[test]
	fn bounding_box() {
		assert!(Path::default().bounding_box().is_none());

		let [min, max] = square().bounding_box().unwrap();
		assert!(compare_points(min, DVec2::ZERO));
		assert!(compare_points(max, DVec2::splat(10.)));
	}
}
