use super::*;
use crate::args::{Arg, ArgReader};
use crate::error::{ArgumentError, ShapeError};

/// Shape constructors that accept loosely-typed [Arg] lists, normalize them, and delegate to the typed constructors.
impl Path {
	/// Reads two segments, splitting the arguments in half, so `[from, to]` and `[x1, y1, x2, y2]` both work.
	pub fn line_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let step = args.len() / 2;
		let mut from_reader = ArgReader::window(args, 0, step);
		let from = from_reader.read_segment()?;
		from_reader.finish()?;
		let mut to_reader = ArgReader::window(args, step, args.len() - step);
		let to = to_reader.read_segment()?;
		to_reader.finish()?;
		Self::new_line(from, to)
	}

	pub fn rectangle_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let mut reader = ArgReader::new(args);
		let rect = reader.read_rect()?;
		reader.finish()?;
		Self::new_rectangle(rect)
	}

	/// Accepts either `[rect, corner_size]` or six numbers `[x, y, width, height, corner_width, corner_height]`.
	pub fn round_rectangle_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let (rect_len, size_len) = match args.len() {
			2 => (1, 1),
			6 => (4, 2),
			found => return Err(ArgumentError::Count { expected: "2 or 6", found }.into()),
		};

		let mut rect_reader = ArgReader::window(args, 0, rect_len);
		let rect = rect_reader.read_rect()?;
		rect_reader.finish()?;
		let mut size_reader = ArgReader::window(args, rect_len, size_len);
		let corner_size = size_reader.read_size()?;
		size_reader.finish()?;

		Self::new_round_rectangle(rect, corner_size)
	}

	pub fn oval_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let mut reader = ArgReader::new(args);
		let rect = reader.read_rect()?;
		reader.finish()?;
		Self::new_oval(rect)
	}

	/// Accepts either `[center, radius]` or `[x, y, radius]`.
	pub fn circle_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let center_len = match args.len() {
			2 => 1,
			3 => 2,
			found => return Err(ArgumentError::Count { expected: "2 or 3", found }.into()),
		};

		let mut center_reader = ArgReader::window(args, 0, center_len);
		let center = center_reader.read_point()?;
		center_reader.finish()?;
		let mut radius_reader = ArgReader::window(args, center_len, 1);
		let radius = radius_reader.read_number()?;

		Self::new_circle(center, radius)
	}

	/// Reads the start point, a point the arc passes through, and the end point.
	pub fn arc_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let mut reader = ArgReader::new(args);
		let (from, through, to) = (reader.read_point()?, reader.read_point()?, reader.read_point()?);
		reader.finish()?;
		Self::new_arc(from, through, to)
	}

	/// Reads `[center, sides, radius]`, where the center may also be given as two numbers.
	pub fn regular_polygon_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let mut reader = center_reader(args, 2)?;
		let (center, sides, radius) = (reader.read_point()?, reader.read_count()?, reader.read_number()?);
		reader.finish()?;
		Self::new_regular_polygon(center, sides, radius)
	}

	/// Reads `[center, points, radius1, radius2]`, where the center may also be given as two numbers.
	pub fn star_from_args(args: &[Arg]) -> Result<Self, ShapeError> {
		let mut reader = center_reader(args, 3)?;
		let (center, points, radius1, radius2) = (reader.read_point()?, reader.read_count()?, reader.read_number()?, reader.read_number()?);
		reader.finish()?;
		Self::new_star(center, points, radius1, radius2)
	}
}

/// The center of a polygon or star is followed by `trailing` numbers, so only a center written as two numbers may make the list longer.
fn center_reader(args: &[Arg], trailing: usize) -> Result<ArgReader<'_>, ArgumentError> {
	match args.len().checked_sub(trailing) {
		Some(1 | 2) => Ok(ArgReader::new(args)),
		_ => Err(ArgumentError::Count {
			expected: if trailing == 2 { "3 or 4" } else { "4 or 5" },
			found: args.len(),
		}),
	}
}
