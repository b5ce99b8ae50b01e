use super::*;
use crate::Rect;
use crate::consts::{CIRCLE_HANDLE_RATIO, KAPPA};
use crate::error::{DegenerateGeometry, ShapeError};
use crate::utils;

use glam::DVec2;

/// Unit-square ellipse at the left, top, right and bottom of the square, in that order.
/// Scaling it by a rectangle's size and moving it to the rectangle's top-left corner inscribes an ellipse in that rectangle.
const OVAL_TEMPLATE: [Segment; 4] = [
	Segment {
		anchor: DVec2::new(0., 0.5),
		handle_in: HandleOffset::new(0., KAPPA),
		handle_out: HandleOffset::new(0., -KAPPA),
	},
	Segment {
		anchor: DVec2::new(0.5, 0.),
		handle_in: HandleOffset::new(-KAPPA, 0.),
		handle_out: HandleOffset::new(KAPPA, 0.),
	},
	Segment {
		anchor: DVec2::new(1., 0.5),
		handle_in: HandleOffset::new(0., -KAPPA),
		handle_out: HandleOffset::new(0., KAPPA),
	},
	Segment {
		anchor: DVec2::new(0.5, 1.),
		handle_in: HandleOffset::new(KAPPA, 0.),
		handle_out: HandleOffset::new(-KAPPA, 0.),
	},
];

fn finite_point(point: DVec2, name: &'static str) -> Result<DVec2, DegenerateGeometry> {
	if point.is_finite() { Ok(point) } else { Err(DegenerateGeometry::NonFinite(name)) }
}

fn positive_radius(radius: f64) -> Result<f64, DegenerateGeometry> {
	if !radius.is_finite() {
		return Err(DegenerateGeometry::NonFinite("radius"));
	}
	if radius <= 0. {
		return Err(DegenerateGeometry::NonPositiveRadius(radius));
	}
	Ok(radius)
}

fn built(shape: &str, path: Path) -> Path {
	log::trace!("Built {shape} with {} segments", path.len());
	path
}

/// Parametric shape constructors. Each one validates its parameters up front and either returns a complete path or an error.
///
/// Closed shapes all share one winding: they turn from +X towards +Y, which is clockwise on a `y`-down screen.
impl Path {
	/// Constructs an open, straight line from `from` to `to`.
	/// Passing full [Segment]s keeps their handles, which bends the line into a curve.
	pub fn new_line(from: impl Into<Segment>, to: impl Into<Segment>) -> Result<Self, ShapeError> {
		let (from, to) = (from.into(), to.into());
		if !from.is_finite() || !to.is_finite() {
			return Err(DegenerateGeometry::NonFinite("line segment").into());
		}
		Ok(built("line", Self::new(vec![from, to], false)))
	}

	/// Constructs a closed rectangle through its corners, in the order bottom-left, top-left, top-right, bottom-right.
	pub fn new_rectangle(rect: Rect) -> Result<Self, ShapeError> {
		rect.validate()?;
		let corners = [rect.bottom_left(), rect.top_left(), rect.top_right(), rect.bottom_right()];
		Ok(built("rectangle", Self::from_anchors(corners, true)))
	}

	/// Constructs a closed rectangle whose corners are quarter ellipses of `corner_size` radii.
	///
	/// The corner size is clamped to half the rectangle's size so opposite corners never overlap.
	/// Each corner takes two segments: the first carries only an out handle into the corner's arc
	/// and the second only an in handle out of it, so the 8 segments run bottom-left, top-left, top-right, bottom-right.
	pub fn new_round_rectangle(rect: Rect, corner_size: DVec2) -> Result<Self, ShapeError> {
		rect.validate()?;
		let corner_size = finite_point(corner_size, "corner size")?;
		if corner_size.x < 0. || corner_size.y < 0. {
			return Err(DegenerateGeometry::NegativeCornerSize {
				width: corner_size.x,
				height: corner_size.y,
			}
			.into());
		}

		let size = corner_size.min(rect.size / 2.);
		if size != corner_size {
			log::debug!("Clamped corner size {corner_size} to {size} to fit a {} x {} rectangle", rect.width(), rect.height());
		}
		let handle = size * CIRCLE_HANDLE_RATIO;

		let (bottom_left, top_left, top_right, bottom_right) = (rect.bottom_left(), rect.top_left(), rect.top_right(), rect.bottom_right());
		let mut path = Self::default();

		path.add_curved(bottom_left + DVec2::new(size.x, 0.), None, Some(HandleOffset::new(-handle.x, 0.)));
		path.add_curved(bottom_left - DVec2::new(0., size.y), Some(HandleOffset::new(0., handle.y)), None);

		path.add_curved(top_left + DVec2::new(0., size.y), None, Some(HandleOffset::new(0., -handle.y)));
		path.add_curved(top_left + DVec2::new(size.x, 0.), Some(HandleOffset::new(-handle.x, 0.)), None);

		path.add_curved(top_right - DVec2::new(size.x, 0.), None, Some(HandleOffset::new(handle.x, 0.)));
		path.add_curved(top_right + DVec2::new(0., size.y), Some(HandleOffset::new(0., -handle.y)), None);

		path.add_curved(bottom_right - DVec2::new(0., size.y), None, Some(HandleOffset::new(0., handle.y)));
		path.add_curved(bottom_right - DVec2::new(size.x, 0.), Some(HandleOffset::new(handle.x, 0.)), None);

		path.close();
		Ok(built("round rectangle", path))
	}

	/// Constructs a closed ellipse inscribed in `rect`, made of four cubic curves meeting at the middle of each side.
	/// A rectangle without area has no ellipse inside it.
	pub fn new_oval(rect: Rect) -> Result<Self, ShapeError> {
		rect.validate()?;
		if rect.width() == 0. || rect.height() == 0. {
			return Err(DegenerateGeometry::EmptyOval {
				width: rect.width(),
				height: rect.height(),
			}
			.into());
		}
		let mut path = Self::default();
		for segment in &OVAL_TEMPLATE {
			path.add_segment(segment.scaled_and_translated(rect.size, rect.top_left));
		}
		path.close();
		Ok(built("oval", path))
	}

	/// Constructs a closed circle, the oval inscribed in the square of side `2 * radius` centered on `center`.
	pub fn new_circle(center: DVec2, radius: f64) -> Result<Self, ShapeError> {
		let center = finite_point(center, "center")?;
		let radius = positive_radius(radius)?;
		Self::new_oval(Rect::from_origin_size(center - radius, DVec2::splat(radius * 2.)))
	}

	/// Constructs an open circular arc starting at `from`, passing through `through` and ending at `to`.
	pub fn new_arc(from: DVec2, through: DVec2, to: DVec2) -> Result<Self, ShapeError> {
		let from = finite_point(from, "arc point")?;
		let mut path = Self::default();
		path.move_to(from);
		path.arc_to(through, to)?;
		Ok(built("arc", path))
	}

	/// Constructs a closed regular polygon with `sides` corners, each at `radius` from `center`.
	///
	/// When the number of sides is a multiple of 3 one corner points straight up, otherwise the top is a flat edge.
	pub fn new_regular_polygon(center: DVec2, sides: u32, radius: f64) -> Result<Self, ShapeError> {
		let center = finite_point(center, "center")?;
		let radius = positive_radius(radius)?;
		if sides < 3 {
			return Err(DegenerateGeometry::TooFewSides(sides).into());
		}

		let three = sides % 3 == 0;
		let vector = DVec2::new(0., if three { -radius } else { radius });
		let offset = if three { -1. } else { 0.5 };
		let step = 360. / sides as f64;

		let anchors = (0..sides).map(|i| center + utils::rotate_degrees(vector, step * (i as f64 + offset)));
		Ok(built("regular polygon", Self::from_anchors(anchors, true)))
	}

	/// Constructs a closed star with `points` tips, alternating between `radius1` and `radius2` from `center`.
	///
	/// The first vertex sits straight above the center at `radius1`, so whichever radius is larger decides
	/// whether the star starts on a tip or in a notch.
	pub fn new_star(center: DVec2, points: u32, radius1: f64, radius2: f64) -> Result<Self, ShapeError> {
		let center = finite_point(center, "center")?;
		let radius1 = positive_radius(radius1)?;
		let radius2 = positive_radius(radius2)?;
		if points < 2 {
			return Err(DegenerateGeometry::TooFewStarPoints(points).into());
		}

		let vertices = u64::from(points) * 2;
		let inner = radius1.min(radius2);
		let outer = radius1.max(radius2);
		let outer_first = radius1 < radius2;
		let step = 360. / vertices as f64;

		let anchors = (0..vertices).map(|i| {
			let radius = if (i % 2 == 1) == outer_first { outer } else { inner };
			center + utils::from_polar_degrees(-90. + step * i as f64, radius)
		});
		Ok(built("star", Self::from_anchors(anchors, true)))
	}
}

impl From<DVec2> for Segment {
	fn from(anchor: DVec2) -> Self {
		Segment::new_anchor(anchor)
	}
}
