use crate::geometry::coord::CoordNum;
use crate::geometry::linestring::LineString;

/// `MultiLineString([ls0..lsn])`.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString<T: CoordNum = f64>(pub Vec<LineString<T>>);

impl<T: CoordNum> MultiLineString<T> {
    pub fn new(linestrings: Vec<LineString<T>>) -> Self {
        MultiLineString(linestrings)
    }

    pub fn linestrings(&self) -> &[LineString<T>] {
        &self.0
    }
}
