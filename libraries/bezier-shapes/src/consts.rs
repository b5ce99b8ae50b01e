use std::f64::consts::SQRT_2;

// Approximation constants

/// Handle length of a cubic quarter-arc on the unit square template, where the circle's diameter is `1`.
/// Equal to `2/3 * (√2 - 1)`. Scaling the template by a rectangle's size yields the familiar `0.5523 * radius`.
pub const KAPPA: f64 = 2. / 3. * (SQRT_2 - 1.);
/// Handle length of a cubic quarter-arc as a fraction of the circle's radius, `4/3 * (√2 - 1) ≈ 0.5523`.
pub const CIRCLE_HANDLE_RATIO: f64 = 2. * KAPPA;

// Method argument defaults

/// Largest angle (in degrees) spanned by a single cubic when fitting arcs.
pub const MAX_ARC_PIECE_DEGREES: f64 = 90.;

// Method constants

/// Tolerance below which a length, cross product or coordinate difference is treated as zero.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-9;
/// Tolerance used by the side-of-line test when deciding if three points are collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-7;

// SVG constants
pub const SVG_ARG_MOVE: &str = "M";
pub const SVG_ARG_LINEAR: &str = "L";
pub const SVG_ARG_CUBIC: &str = "C";
pub const SVG_ARG_CLOSED: &str = "Z";
