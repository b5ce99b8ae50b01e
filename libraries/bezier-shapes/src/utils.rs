use crate::consts::{COLLINEAR_EPSILON, MAX_ABSOLUTE_DIFFERENCE};

use glam::DVec2;

/// Find the roots of the linear equation `ax + b`.
pub fn solve_linear(a: f64, b: f64) -> [Option<f64>; 2] {
	// There exist roots when `a` is not 0
	if a.abs() > MAX_ABSOLUTE_DIFFERENCE { [Some(-b / a), None] } else { [None; 2] }
}

/// Find the roots of the quadratic equation `ax^2 + bx + c`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> [Option<f64>; 2] {
	if a.abs() <= MAX_ABSOLUTE_DIFFERENCE {
		return solve_linear(b, c);
	}

	let discriminant = b * b - 4. * a * c;
	if discriminant.abs() <= MAX_ABSOLUTE_DIFFERENCE {
		[Some(-b / (2. * a)), None]
	} else if discriminant > 0. {
		let root_discriminant = discriminant.sqrt();
		[Some((-b + root_discriminant) / (2. * a)), Some((-b - root_discriminant) / (2. * a))]
	} else {
		[None; 2]
	}
}

/// Rotate `vector` by `degrees`. Positive angles turn from the +X axis towards the +Y axis.
pub fn rotate_degrees(vector: DVec2, degrees: f64) -> DVec2 {
	DVec2::from_angle(degrees.to_radians()).rotate(vector)
}

/// Build a vector of the given `length` pointing along `degrees`, measured from the +X axis towards the +Y axis.
pub fn from_polar_degrees(degrees: f64, length: f64) -> DVec2 {
	DVec2::from_angle(degrees.to_radians()) * length
}

/// Signed angle in degrees that turns `from` onto `to`, in the range `(-180, 180]`.
pub fn directed_angle_degrees(from: DVec2, to: DVec2) -> f64 {
	from.perp_dot(to).atan2(from.dot(to)).to_degrees()
}

/// Which side of the segment from `start` to `end` the `point` lies on.
///
/// Returns `-1` or `1` for either side, and `0` only when the point is collinear *and* lies between the two ends.
/// Collinear points before `start` report `-1` and those past `end` report `1`.
pub fn side_of_segment(start: DVec2, end: DVec2, point: DVec2) -> i32 {
	let direction = end - start;
	let offset = point - start;
	let scale = direction.length() * offset.length();
	let mut ccw = offset.perp_dot(direction);

	if ccw.abs() <= COLLINEAR_EPSILON * scale.max(1.) {
		ccw = offset.dot(direction);
		if ccw > 0. {
			ccw = (offset - direction).dot(direction);
			if ccw < 0. {
				ccw = 0.;
			}
		}
	}

	if ccw < 0. {
		-1
	} else if ccw > 0. {
		1
	} else {
		0
	}
}

/// Compute the center of the circle that passes through all three provided points, or `None` if they are collinear.
pub fn circle_center_through_points(p1: DVec2, p2: DVec2, p3: DVec2) -> Option<DVec2> {
	let a = p2 - p1;
	let b = p3 - p1;
	let denominator = 2. * a.perp_dot(b);
	if denominator.abs() <= COLLINEAR_EPSILON * a.length() * b.length() {
		return None;
	}

	let (a_squared, b_squared) = (a.length_squared(), b.length_squared());
	let offset = DVec2::new(b.y * a_squared - a.y * b_squared, a.x * b_squared - b.x * a_squared) / denominator;
	Some(p1 + offset)
}
