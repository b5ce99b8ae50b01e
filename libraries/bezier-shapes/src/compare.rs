//! Comparison functions used for tests in the bezier-shapes library

use crate::Path;
use glam::DVec2;

pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;

/// Compare points by allowing some maximum absolute difference to account for floating point errors
pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

/// Compare vectors of points by allowing some maximum absolute difference to account for floating point errors
pub fn compare_vec_of_points(vec1: Vec<DVec2>, vec2: Vec<DVec2>) -> bool {
	vec1.len() == vec2.len() && vec1.into_iter().zip(vec2).all(|(p1, p2)| compare_points(p1, p2))
}

/// Compare `f64` values by allowing some maximum absolute difference to account for floating point errors
pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	(f1 - f2).abs() < MAX_ABSOLUTE_DIFFERENCE
}

/// Compare paths by verifying that their anchors, handle offsets and closed state are approximately equal
pub fn compare_paths(path1: &Path, path2: &Path) -> bool {
	path1.closed == path2.closed
		&& path1.len() == path2.len()
		&& path1.segments().iter().zip(path2.segments()).all(|(segment1, segment2)| {
			compare_points(segment1.anchor, segment2.anchor)
				&& compare_points(segment1.handle_in.vector(), segment2.handle_in.vector())
				&& compare_points(segment1.handle_out.vector(), segment2.handle_out.vector())
		})
}
