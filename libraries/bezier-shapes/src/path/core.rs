use super::*;
use crate::consts::*;

use glam::{DAffine2, DVec2};
use std::fmt::Write;

/// Functionality relating to core `Path` operations, such as constructors, accessors and `iter`.
impl Path {
	/// Create a new `Path` using a list of [Segment]s.
	/// A `Path` with less than 2 [Segment]s may not be closed.
	pub fn new(segments: Vec<Segment>, closed: bool) -> Self {
		assert!(!closed || segments.len() > 1, "A closed Path must contain more than 1 Segment.");
		Self { segments, closed }
	}

	/// Construct a [Path] of corner segments from an iter of anchor positions.
	pub fn from_anchors(anchor_positions: impl IntoIterator<Item = DVec2>, closed: bool) -> Self {
		Self::new(anchor_positions.into_iter().map(Segment::new_anchor).collect(), closed)
	}

	/// Append a corner segment at `anchor`.
	pub fn add(&mut self, anchor: DVec2) {
		self.add_segment(Segment::new_anchor(anchor));
	}

	/// Append a segment at `anchor`. Missing handles are stored as zero offsets.
	pub fn add_curved(&mut self, anchor: DVec2, handle_in: Option<HandleOffset>, handle_out: Option<HandleOffset>) {
		self.add_segment(Segment::new(anchor, handle_in.unwrap_or_default(), handle_out.unwrap_or_default()));
	}

	/// Append an already built segment without any normalization.
	pub fn add_segment(&mut self, segment: Segment) {
		debug_assert!(segment.is_finite(), "Adding non finite segment");
		self.segments.push(segment);
	}

	/// Returns true if the `Path` contains no [Segment].
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns the number of [Segment]s contained within the `Path`.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns the number of curves contained within the `Path`, including the closing curve of a closed path.
	pub fn len_curves(&self) -> usize {
		let mut number_of_curves = self.len();
		if !self.closed && number_of_curves > 0 {
			number_of_curves -= 1
		}
		number_of_curves
	}

	/// Get whether the path is closed.
	pub fn closed(&self) -> bool {
		self.closed
	}

	/// Set whether the path is closed.
	pub fn set_closed(&mut self, new_closed: bool) {
		self.closed = new_closed;
	}

	/// Returns a slice of the [Segment]s in the `Path`.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	pub fn first_segment(&self) -> Option<&Segment> {
		self.segments.first()
	}

	pub fn last_segment(&self) -> Option<&Segment> {
		self.segments.last()
	}

	pub(crate) fn last_segment_mut(&mut self) -> Option<&mut Segment> {
		self.segments.last_mut()
	}

	/// Consumes the `Path` and returns its [Segment]s.
	pub fn into_segments(self) -> Vec<Segment> {
		self.segments
	}

	/// Returns a vector of all the anchors (DVec2) for this `Path`.
	pub fn anchors(&self) -> Vec<DVec2> {
		self.segments.iter().map(|segment| segment.anchor).collect()
	}

	/// Returns a copy of the curve at the given curve index, if this curve exists.
	pub fn get_curve(&self, curve_index: usize) -> Option<Curve> {
		if curve_index >= self.len_curves() {
			return None;
		}
		Some(Curve::between(&self[curve_index], &self[(curve_index + 1) % self.len()]))
	}

	/// Returns an iterator of the [Curve]s along the `Path`.
	pub fn iter(&self) -> PathIter<'_> {
		PathIter { path: self, index: 0 }
	}

	/// Write the path data (the d="..." part of an SVG `path` element) to the string.
	pub fn write_path_data(&self, svg: &mut String, transform: DAffine2) -> std::fmt::Result {
		if self.is_empty() {
			return Ok(());
		}
		let start = transform.transform_point2(self[0].anchor);
		write!(svg, "{SVG_ARG_MOVE}{:.6},{:.6}", start.x, start.y)?;
		for curve in self.iter() {
			svg.push(' ');
			curve.apply_transformation(|pos| transform.transform_point2(pos)).write_curve_argument(svg)?;
		}
		if self.closed {
			svg.push(' ');
			svg.push_str(SVG_ARG_CLOSED);
		}
		Ok(())
	}

	/// Returns the SVG path data of the `Path` in its own coordinate space.
	pub fn to_path_data(&self) -> String {
		let mut svg = String::new();
		// Writing into a `String` cannot fail
		let _ = self.write_path_data(&mut svg, DAffine2::IDENTITY);
		svg
	}
}
