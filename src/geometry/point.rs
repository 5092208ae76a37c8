use crate::geometry::coord::{Coord, CoordNum};

/// `Point(coord)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: CoordNum = f64>(pub Coord<T>);

impl<T: CoordNum> Point<T> {
    pub fn new(coord: Coord<T>) -> Self {
        Point(coord)
    }

    pub fn coord(&self) -> Coord<T> {
        self.0
    }
}
