use thiserror::Error;

/// Failure to normalize a list of [crate::Arg]s into the geometry a constructor expects.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ArgumentError {
	#[error("Expected {expected} arguments, received {found}")]
	Count { expected: &'static str, found: usize },

	#[error("Argument {index} cannot be read as {expected}")]
	Type { index: usize, expected: &'static str },

	#[error("Expected {expected} at argument {index}, but no arguments remain")]
	Missing { index: usize, expected: &'static str },

	#[error("Argument {index} is missing the `{field}` field")]
	Field { index: usize, field: &'static str },

	#[error("{count} unused argument(s) starting at index {index}")]
	Unused { index: usize, count: usize },
}

/// A shape parameter that cannot produce a well-formed outline.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DegenerateGeometry {
	#[error("The {0} is not a finite value")]
	NonFinite(&'static str),

	#[error("A rectangle cannot have a negative size ({width} x {height})")]
	NegativeSize { width: f64, height: f64 },

	#[error("An oval needs a width and height greater than zero ({width} x {height})")]
	EmptyOval { width: f64, height: f64 },

	#[error("A corner size cannot be negative ({width} x {height})")]
	NegativeCornerSize { width: f64, height: f64 },

	#[error("The radius must be greater than zero, received {0}")]
	NonPositiveRadius(f64),

	#[error("A regular polygon needs at least 3 sides, received {0}")]
	TooFewSides(u32),

	#[error("A star needs at least 2 points, received {0}")]
	TooFewStarPoints(u32),

	#[error("Cannot fit an arc through collinear points when the through point lies outside the chord")]
	CollinearArc,

	#[error("Cannot fit an arc through coincident points")]
	CoincidentArcPoints,

	#[error("An arc must start from an existing segment")]
	EmptyPath,
}

/// The error type returned by every shape constructor.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ShapeError {
	#[error("Invalid arguments: {0}")]
	ArgumentShape(#[from] ArgumentError),

	#[error("Degenerate geometry: {0}")]
	DegenerateGeometry(#[from] DegenerateGeometry),
}
