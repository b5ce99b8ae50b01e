//! Bezier-shapes: parametric shape constructors that build Bézier outlines for Rust
#[cfg(test)]
pub(crate) mod compare;

mod args;
mod consts;
mod curve;
mod error;
mod path;
mod rect;
mod utils;

pub use args::{Arg, ArgReader};
pub use consts::{CIRCLE_HANDLE_RATIO, KAPPA};
pub use curve::*;
pub use error::*;
pub use path::*;
pub use rect::Rect;
