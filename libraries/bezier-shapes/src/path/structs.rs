use glam::{DAffine2, DVec2};
use std::fmt::{Debug, Formatter, Result};

/// A Bézier handle expressed as an offset from the anchor it belongs to, never as an absolute position.
///
/// A zero offset means the curve has no tangent on that side and joins the neighboring curve with a corner.
#[derive(Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleOffset(DVec2);

impl Debug for HandleOffset {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		write!(f, "HandleOffset({}, {})", self.0.x, self.0.y)
	}
}

impl HandleOffset {
	pub const ZERO: Self = Self(DVec2::ZERO);

	pub const fn new(x: f64, y: f64) -> Self {
		Self(DVec2::new(x, y))
	}

	pub const fn from_vector(offset: DVec2) -> Self {
		Self(offset)
	}

	/// The offset between the handle's absolute `position` and its `anchor`.
	pub fn from_absolute(anchor: DVec2, position: DVec2) -> Self {
		Self(position - anchor)
	}

	pub fn vector(self) -> DVec2 {
		self.0
	}

	/// The handle's absolute position when attached to `anchor`.
	pub fn to_absolute(self, anchor: DVec2) -> DVec2 {
		anchor + self.0
	}

	pub fn is_zero(self) -> bool {
		self.0 == DVec2::ZERO
	}

	pub fn length(self) -> f64 {
		self.0.length()
	}

	/// Scales the offset component-wise, as when stretching a unit template to a rectangle.
	#[must_use]
	pub fn scale(self, factor: DVec2) -> Self {
		Self(self.0 * factor)
	}

	/// Transforms the offset by the linear part of `transform`. Translation does not move a relative handle.
	#[must_use]
	pub fn transform(self, transform: DAffine2) -> Self {
		Self(transform.transform_vector2(self.0))
	}
}

/// An anchor point with up to two handles along a [crate::Path].
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
	/// Absolute position of the on-curve point.
	pub anchor: DVec2,
	/// Tangent of the curve arriving at the anchor, relative to the anchor.
	pub handle_in: HandleOffset,
	/// Tangent of the curve leaving the anchor, relative to the anchor.
	pub handle_out: HandleOffset,
}

impl Debug for Segment {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match (self.handle_in.is_zero(), self.handle_out.is_zero()) {
			(true, true) => write!(f, "anchor: {}, in: n/a, out: n/a", self.anchor),
			(false, true) => write!(f, "anchor: {}, in: {}, out: n/a", self.anchor, self.handle_in.vector()),
			(true, false) => write!(f, "anchor: {}, in: n/a, out: {}", self.anchor, self.handle_out.vector()),
			(false, false) => write!(f, "anchor: {}, in: {}, out: {}", self.anchor, self.handle_in.vector(), self.handle_out.vector()),
		}
	}
}

impl Segment {
	pub fn new(anchor: DVec2, handle_in: HandleOffset, handle_out: HandleOffset) -> Self {
		Self { anchor, handle_in, handle_out }
	}

	/// Create a corner segment with no curvature on either side.
	pub fn new_anchor(anchor: DVec2) -> Self {
		Self::new(anchor, HandleOffset::ZERO, HandleOffset::ZERO)
	}

	/// Returns true if both handles are zero.
	pub fn is_corner(&self) -> bool {
		self.handle_in.is_zero() && self.handle_out.is_zero()
	}

	pub fn is_finite(&self) -> bool {
		self.anchor.is_finite() && self.handle_in.vector().is_finite() && self.handle_out.vector().is_finite()
	}

	/// Absolute position of the in handle.
	pub fn handle_in_position(&self) -> DVec2 {
		self.handle_in.to_absolute(self.anchor)
	}

	/// Absolute position of the out handle.
	pub fn handle_out_position(&self) -> DVec2 {
		self.handle_out.to_absolute(self.anchor)
	}

	/// Scales the anchor and both handles component-wise by `size`, then moves the anchor by `offset`.
	#[must_use]
	pub fn scaled_and_translated(&self, size: DVec2, offset: DVec2) -> Self {
		Self::new(self.anchor * size + offset, self.handle_in.scale(size), self.handle_out.scale(size))
	}

	/// Returns the segment with its in and out handles swapped, as seen when traversing a path backwards.
	#[must_use]
	pub fn flipped(&self) -> Self {
		Self::new(self.anchor, self.handle_out, self.handle_in)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn handle_offsets_stay_relative() {
		let anchor = DVec2::new(10., 10.);
		let handle = HandleOffset::from_absolute(anchor, DVec2::new(12., 7.));
		assert_eq!(handle, HandleOffset::new(2., -3.));
		assert_eq!(handle.to_absolute(anchor), DVec2::new(12., 7.));
		assert_eq!(handle.transform(DAffine2::from_translation(DVec2::new(100., 100.))), handle);
	}

	#[test]
	fn scaled_and_translated() {
		let segment = Segment::new(DVec2::new(0.5, 1.), HandleOffset::new(0.25, 0.), HandleOffset::new(-0.25, 0.));
		let scaled = segment.scaled_and_translated(DVec2::new(4., 2.), DVec2::new(1., 1.));
		assert_eq!(scaled.anchor, DVec2::new(3., 3.));
		assert_eq!(scaled.handle_in, HandleOffset::new(1., 0.));
		assert_eq!(scaled.handle_out, HandleOffset::new(-1., 0.));
	}

	#[test]
	fn corner_segments() {
		assert!(Segment::new_anchor(DVec2::ONE).is_corner());
		assert!(!Segment::new(DVec2::ONE, HandleOffset::new(1., 0.), HandleOffset::ZERO).is_corner());
	}
}
