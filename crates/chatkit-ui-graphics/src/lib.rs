//! Pure geometry and font data for Chatkit message layout
//!
//! This crate contains the geometry primitives and font descriptors that
//! the text measurer, alignment policies and layout engine share. It has
//! no knowledge of messages or rendering.

mod geometry;
mod typography;

pub use geometry::*;
pub use typography::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Rect, Size};
    pub use crate::typography::{Font, FontStyle, FontWeight};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod geometry_tests;
