use crate::geometry::coord::CoordNum;
use crate::geometry::polygon::Polygon;

/// `MultiPolygon([p0..pn])`.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon<T: CoordNum = f64>(pub Vec<Polygon<T>>);

impl<T: CoordNum> MultiPolygon<T> {
    pub fn new(polygons: Vec<Polygon<T>>) -> Self {
        MultiPolygon(polygons)
    }

    pub fn polygons(&self) -> &[Polygon<T>] {
        &self.0
    }
}
