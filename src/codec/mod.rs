//! The flatten/unflatten codec: a lossless bridge between a tree of
//! [`crate::geometry::Geometry`] values and a linear sequence of
//! [`TaggedPoint`] records.

pub mod flatten;
pub mod text;
pub mod unflatten;

use crate::geometry::{Coord, CoordNum, PointTag};

/// One record of a flattened stream: a coordinate plus its (possibly empty)
/// ordered tagstack.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedPoint<T: CoordNum = f64> {
    pub coord: Coord<T>,
    pub tags: Vec<PointTag>,
}

impl<T: CoordNum> TaggedPoint<T> {
    pub fn new(coord: Coord<T>, tags: Vec<PointTag>) -> Self {
        TaggedPoint { coord, tags }
    }

    pub fn bare(coord: Coord<T>) -> Self {
        TaggedPoint { coord, tags: Vec::new() }
    }
}

pub use flatten::flatten;
pub use unflatten::unflatten;
