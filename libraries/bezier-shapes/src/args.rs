//! Loosely-typed shape arguments and the reader that normalizes them into geometry.
//!
//! A point can be written as one structured value, as one number used for both coordinates, as two numbers,
//! or as named fields. The `*_from_args` constructors on [crate::Path] accept any of these encodings.

use crate::Rect;
use crate::error::ArgumentError;
use crate::path::Segment;
use crate::utils;

use glam::DVec2;
use std::collections::BTreeMap;

/// One argument passed to a `*_from_args` shape constructor.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
	Number(f64),
	Point(DVec2),
	Size(DVec2),
	Rect(Rect),
	Segment(Segment),
	/// Named numeric fields, such as `x`/`y`, `angle`/`length` (degrees), `width`/`height`, or `x`/`y`/`width`/`height`.
	Fields(BTreeMap<String, f64>),
}

impl Arg {
	pub fn fields<'a>(fields: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
		Self::Fields(fields.into_iter().map(|(name, value)| (name.to_string(), value)).collect())
	}
}

impl From<f64> for Arg {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<u32> for Arg {
	fn from(value: u32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<DVec2> for Arg {
	fn from(value: DVec2) -> Self {
		Self::Point(value)
	}
}

impl From<Rect> for Arg {
	fn from(value: Rect) -> Self {
		Self::Rect(value)
	}
}

impl From<Segment> for Arg {
	fn from(value: Segment) -> Self {
		Self::Segment(value)
	}
}

/// Reads typed geometry off the front of an argument list, consuming as many arguments as each value needs.
pub struct ArgReader<'a> {
	args: &'a [Arg],
	index: usize,
	/// Position of `args[0]` in the caller's full argument list, so errors report the caller's indices.
	offset: usize,
}

impl<'a> ArgReader<'a> {
	pub fn new(args: &'a [Arg]) -> Self {
		Self { args, index: 0, offset: 0 }
	}

	/// A reader limited to `len` arguments starting at `start`, like reading one parameter out of a flattened list.
	pub fn window(args: &'a [Arg], start: usize, len: usize) -> Self {
		let end = (start + len).min(args.len());
		let start = start.min(end);
		Self { args: &args[start..end], index: 0, offset: start }
	}

	/// Number of arguments not yet consumed.
	pub fn remaining(&self) -> usize {
		self.args.len() - self.index
	}

	fn position(&self) -> usize {
		self.offset + self.index
	}

	fn next(&mut self, expected: &'static str) -> Result<&'a Arg, ArgumentError> {
		let index = self.position();
		let arg = self.args.get(self.index).ok_or(ArgumentError::Missing { index, expected })?;
		self.index += 1;
		Ok(arg)
	}

	fn next_if_number(&mut self) -> Option<f64> {
		match self.args.get(self.index) {
			Some(Arg::Number(value)) => {
				self.index += 1;
				Some(*value)
			}
			_ => None,
		}
	}

	pub fn read_number(&mut self) -> Result<f64, ArgumentError> {
		let index = self.position();
		match self.next("a number")? {
			Arg::Number(value) => Ok(*value),
			_ => Err(ArgumentError::Type { index, expected: "a number" }),
		}
	}

	/// Reads a non-negative whole number, such as a count of sides.
	pub fn read_count(&mut self) -> Result<u32, ArgumentError> {
		let index = self.position();
		let value = self.read_number()?;
		if value < 0. || value.fract() != 0. || value > u32::MAX as f64 {
			return Err(ArgumentError::Type { index, expected: "a whole number" });
		}
		Ok(value as u32)
	}

	pub fn read_point(&mut self) -> Result<DVec2, ArgumentError> {
		let index = self.position();
		match self.next("a point")? {
			Arg::Point(point) | Arg::Size(point) => Ok(*point),
			Arg::Number(x) => Ok(match self.next_if_number() {
				Some(y) => DVec2::new(*x, y),
				None => DVec2::splat(*x),
			}),
			Arg::Fields(fields) => {
				if fields.contains_key("angle") || fields.contains_key("length") {
					Ok(utils::from_polar_degrees(field(fields, index, "angle")?, field(fields, index, "length")?))
				} else {
					Ok(DVec2::new(field(fields, index, "x")?, field(fields, index, "y")?))
				}
			}
			_ => Err(ArgumentError::Type { index, expected: "a point" }),
		}
	}

	pub fn read_size(&mut self) -> Result<DVec2, ArgumentError> {
		let index = self.position();
		match self.next("a size")? {
			Arg::Size(size) | Arg::Point(size) => Ok(*size),
			Arg::Number(width) => Ok(match self.next_if_number() {
				Some(height) => DVec2::new(*width, height),
				None => DVec2::splat(*width),
			}),
			Arg::Fields(fields) => Ok(DVec2::new(field(fields, index, "width")?, field(fields, index, "height")?)),
			_ => Err(ArgumentError::Type { index, expected: "a size" }),
		}
	}

	pub fn read_rect(&mut self) -> Result<Rect, ArgumentError> {
		let index = self.position();
		match self.next("a rectangle")? {
			Arg::Rect(rect) => Ok(*rect),
			Arg::Number(x) => {
				let (y, width, height) = (self.read_number()?, self.read_number()?, self.read_number()?);
				Ok(Rect::new(*x, y, width, height))
			}
			Arg::Point(top_left) => {
				let second = self.position();
				match self.next("a size or opposite corner")? {
					Arg::Size(size) => Ok(Rect::from_origin_size(*top_left, *size)),
					Arg::Point(corner) => Ok(Rect::from_corners(*top_left, *corner)),
					_ => Err(ArgumentError::Type {
						index: second,
						expected: "a size or opposite corner",
					}),
				}
			}
			Arg::Fields(fields) => Ok(Rect::new(
				field(fields, index, "x")?,
				field(fields, index, "y")?,
				field(fields, index, "width")?,
				field(fields, index, "height")?,
			)),
			_ => Err(ArgumentError::Type { index, expected: "a rectangle" }),
		}
	}

	/// Reads a full segment, or a point that becomes a corner segment.
	pub fn read_segment(&mut self) -> Result<Segment, ArgumentError> {
		if let Some(Arg::Segment(segment)) = self.args.get(self.index) {
			self.index += 1;
			return Ok(*segment);
		}
		self.read_point().map(Segment::new_anchor)
	}

	/// Fails if any argument was left unread.
	pub fn finish(self) -> Result<(), ArgumentError> {
		match self.remaining() {
			0 => Ok(()),
			count => Err(ArgumentError::Unused { index: self.position(), count }),
		}
	}
}

fn field(fields: &BTreeMap<String, f64>, index: usize, name: &'static str) -> Result<f64, ArgumentError> {
	fields.get(name).copied().ok_or(ArgumentError::Field { index, field: name })
}
