//! **gridstar-core**: geometry types shared across the *gridstar* crates.
//!
//! [`Point`] addresses a grid cell and [`Range`] describes a grid rectangle.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
