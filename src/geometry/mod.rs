//! The geometry model: a closed, seven-variant sum type over points,
//! linestrings, polygons, and their multi- and collection-valued
//! composites.

pub mod coord;
pub mod geometrycollection;
pub mod linestring;
pub mod multilinestring;
pub mod multipoint;
pub mod multipolygon;
pub mod point;
pub mod polygon;
pub mod tag;

pub use coord::{Coord, CoordNum};
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use tag::PointTag;

/// Any one of the seven geometry shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry<T: CoordNum = f64> {
    Point(Point<T>),
    LineString(LineString<T>),
    Polygon(Polygon<T>),
    MultiPoint(MultiPoint<T>),
    MultiLineString(MultiLineString<T>),
    MultiPolygon(MultiPolygon<T>),
    GeometryCollection(GeometryCollection<T>),
}

impl<T: CoordNum> Geometry<T> {
    /// Borrow the inner `Point`, or `None` if this is some other variant.
    pub fn as_point(&self) -> Option<&Point<T>> {
        match self {
            Geometry::Point(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString<T>> {
        match self {
            Geometry::LineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon<T>> {
        match self {
            Geometry::Polygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint<T>> {
        match self {
            Geometry::MultiPoint(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString<T>> {
        match self {
            Geometry::MultiLineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon<T>> {
        match self {
            Geometry::MultiPolygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection<T>> {
        match self {
            Geometry::GeometryCollection(g) => Some(g),
            _ => None,
        }
    }
}

impl<T: CoordNum> From<Point<T>> for Geometry<T> {
    fn from(g: Point<T>) -> Self {
        Geometry::Point(g)
    }
}

impl<T: CoordNum> From<LineString<T>> for Geometry<T> {
    fn from(g: LineString<T>) -> Self {
        Geometry::LineString(g)
    }
}

impl<T: CoordNum> From<Polygon<T>> for Geometry<T> {
    fn from(g: Polygon<T>) -> Self {
        Geometry::Polygon(g)
    }
}

impl<T: CoordNum> From<MultiPoint<T>> for Geometry<T> {
    fn from(g: MultiPoint<T>) -> Self {
        Geometry::MultiPoint(g)
    }
}

impl<T: CoordNum> From<MultiLineString<T>> for Geometry<T> {
    fn from(g: MultiLineString<T>) -> Self {
        Geometry::MultiLineString(g)
    }
}

impl<T: CoordNum> From<MultiPolygon<T>> for Geometry<T> {
    fn from(g: MultiPolygon<T>) -> Self {
        Geometry::MultiPolygon(g)
    }
}

impl<T: CoordNum> From<GeometryCollection<T>> for Geometry<T> {
    fn from(g: GeometryCollection<T>) -> Self {
        Geometry::GeometryCollection(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_accessors_return_none_off_variant() {
        let g = Geometry::Point(Point::new(Coord::xy(1.0, 2.0)));
        assert!(g.as_point().is_some());
        assert!(g.as_polygon().is_none());
    }

    #[test]
    fn from_impls_wrap_into_geometry() {
        let p: Geometry = Point::new(Coord::xy(0.0, 0.0)).into();
        assert!(matches!(p, Geometry::Point(_)));
    }
}
