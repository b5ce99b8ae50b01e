use crate::error::DegenerateGeometry;

use glam::DVec2;

/// An axis-aligned rectangle described by its top-left corner and its size.
///
/// Coordinates follow the screen convention where `y` grows downwards, so the top edge has the smallest `y`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
	pub top_left: DVec2,
	pub size: DVec2,
}

impl Rect {
	pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			top_left: DVec2::new(x, y),
			size: DVec2::new(width, height),
		}
	}

	pub fn from_origin_size(top_left: DVec2, size: DVec2) -> Self {
		Self { top_left, size }
	}

	/// Creates the rectangle spanned by two opposite corners, given in any order.
	pub fn from_corners(corner1: DVec2, corner2: DVec2) -> Self {
		let top_left = corner1.min(corner2);
		Self {
			top_left,
			size: corner1.max(corner2) - top_left,
		}
	}

	pub fn width(&self) -> f64 {
		self.size.x
	}

	pub fn height(&self) -> f64 {
		self.size.y
	}

	pub fn top_left(&self) -> DVec2 {
		self.top_left
	}

	pub fn top_right(&self) -> DVec2 {
		self.top_left + DVec2::new(self.size.x, 0.)
	}

	pub fn bottom_left(&self) -> DVec2 {
		self.top_left + DVec2::new(0., self.size.y)
	}

	pub fn bottom_right(&self) -> DVec2 {
		self.top_left + self.size
	}

	pub fn center(&self) -> DVec2 {
		self.top_left + self.size / 2.
	}

	/// Rejects rectangles with non-finite coordinates or a negative extent.
	pub(crate) fn validate(&self) -> Result<(), DegenerateGeometry> {
		if !self.top_left.is_finite() || !self.size.is_finite() {
			return Err(DegenerateGeometry::NonFinite("rectangle"));
		}
		if self.size.x < 0. || self.size.y < 0. {
			return Err(DegenerateGeometry::NegativeSize {
				width: self.size.x,
				height: self.size.y,
			});
		}
		Ok(())
	}
}
