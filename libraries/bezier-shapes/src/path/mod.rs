#[cfg(feature = "kurbo")]
mod bez_path;
mod builder;
mod core;
mod shape_args;
mod shapes;
mod structs;
mod transform;
pub use structs::*;

use crate::Curve;

use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

/// An ordered sequence of [Segment]s forming one outline.
///
/// The order of the segments is the traversal direction, so reversing it reverses the outline's winding.
/// When `closed` is set, a final curve runs from the last segment back to the first one.
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
	segments: Vec<Segment>,
	pub closed: bool,
}

/// Walks the [Curve]s of a `Path` in traversal order, ending with the closing curve when the path is closed.
pub struct PathIter<'a> {
	index: usize,
	path: &'a Path,
}

impl Index<usize> for Path {
	type Output = Segment;

	fn index(&self, index: usize) -> &Segment {
		&self.segments[index]
	}
}

impl IndexMut<usize> for Path {
	fn index_mut(&mut self, index: usize) -> &mut Segment {
		&mut self.segments[index]
	}
}

impl Iterator for PathIter<'_> {
	type Item = Curve;

	fn next(&mut self) -> Option<Curve> {
		let curve = self.path.get_curve(self.index)?;
		self.index += 1;
		Some(curve)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.path.len_curves().saturating_sub(self.index);
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for PathIter<'_> {}

impl Debug for Path {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let kind = if self.closed { "ClosedPath" } else { "OpenPath" };
		f.debug_tuple(kind).field(&self.segments).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Rect;

	use glam::DVec2;

	#[test]
	fn closed_shape_iterates_closing_curve() {
		let path = Path::new_rectangle(Rect::new(0., 0., 4., 2.)).unwrap();
		let curves = path.iter();
		assert_eq!(curves.len(), 4);

		let last = path.iter().last().unwrap();
		assert_eq!(last.start, path[3].anchor);
		assert_eq!(last.end, path[0].anchor);
	}

	#[test]
	fn open_path_skips_closing_curve() {
		let mut path = Path::new_line(DVec2::ZERO, DVec2::X).unwrap();
		assert_eq!(path.iter().count(), 1);

		path[1].anchor = DVec2::Y;
		assert_eq!(path.iter().next().unwrap().end, DVec2::Y);
	}

	#[test]
	fn debug_names_open_and_closed_paths() {
		let line = Path::new_line(DVec2::ZERO, DVec2::X).unwrap();
		assert!(format!("{line:?}").starts_with("OpenPath("));
		let square = Path::new_rectangle(Rect::new(0., 0., 1., 1.)).unwrap();
		assert!(format!("{square:?}").starts_with("ClosedPath("));
	}
}
