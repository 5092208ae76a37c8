//! Geometry tree to tagged-point stream. A single-pass walk that appends to
//! a `Vec` keeps `wrap_tagged`'s one-record lookahead trivial.

use crate::codec::TaggedPoint;
use crate::geometry::{Coord, CoordNum, Geometry, PointTag};

/// Flatten a sequence of geometries in order, preserving input order across
/// the whole sequence.
pub fn flatten<T: CoordNum>(geometries: &[Geometry<T>]) -> Vec<TaggedPoint<T>> {
    geometries.iter().flat_map(flatten_single).collect()
}

/// Flatten one geometry, dispatching on variant.
pub fn flatten_single<T: CoordNum>(geometry: &Geometry<T>) -> Vec<TaggedPoint<T>> {
    match geometry {
        Geometry::Point(p) => vec![TaggedPoint::bare(p.coord())],
        Geometry::LineString(ls) => wrap_bare(ls.coords(), PointTag::LinestringBegin),
        Geometry::Polygon(poly) => {
            let mut rings = wrap_bare(poly.shell().coords(), PointTag::ShellBegin);
            for hole in poly.holes() {
                rings.extend(wrap_bare(hole.coords(), PointTag::HoleBegin));
            }
            wrap_tagged(rings, PointTag::PolygonBegin)
        }
        Geometry::MultiPoint(mp) => {
            let children = mp
                .points()
                .iter()
                .flat_map(|p| flatten_single(&Geometry::Point(*p)))
                .collect();
            wrap_tagged(children, PointTag::MultipointBegin)
        }
        Geometry::MultiLineString(mls) => {
            let children = mls
                .linestrings()
                .iter()
                .flat_map(|ls| flatten_single(&Geometry::LineString(ls.clone())))
                .collect();
            wrap_tagged(children, PointTag::MultilinestringBegin)
        }
        Geometry::MultiPolygon(mp) => {
            let children = mp
                .polygons()
                .iter()
                .flat_map(|p| flatten_single(&Geometry::Polygon(p.clone())))
                .collect();
            wrap_tagged(children, PointTag::MultipolygonBegin)
        }
        Geometry::GeometryCollection(gc) => {
            let children = gc.geometries().iter().flat_map(flatten_single).collect();
            wrap_tagged(children, PointTag::CollectionBegin)
        }
    }
}

/// Wrap a bare coordinate run in a BEGIN/END pair: first coord gets
/// `[begin]`, last gets `[begin.matching_end()]`, everything between is
/// untagged.
///
/// A singleton run (not expected from a well-formed `LineString`, but not
/// assumed away here either) receives both tags on its one record.
fn wrap_bare<T: CoordNum>(coords: &[Coord<T>], begin: PointTag) -> Vec<TaggedPoint<T>> {
    match coords {
        [] => Vec::new(),
        [only] => vec![TaggedPoint::new(*only, vec![begin, begin.matching_end()])],
        [first, middle @ .., last] => {
            let mut records = Vec::with_capacity(coords.len());
            records.push(TaggedPoint::new(*first, vec![begin]));
            records.extend(middle.iter().map(|c| TaggedPoint::bare(*c)));
            records.push(TaggedPoint::new(*last, vec![begin.matching_end()]));
            records
        }
    }
}

/// The wrap operator: prepend `begin` to the first record's tagstack and
/// append `begin.matching_end()` to the last's, leaving everything between
/// unchanged.
fn wrap_tagged<T: CoordNum>(mut records: Vec<TaggedPoint<T>>, begin: PointTag) -> Vec<TaggedPoint<T>> {
    match records.len() {
        0 => Vec::new(),
        1 => {
            let only = records.remove(0);
            let mut tags = vec![begin];
            tags.extend(only.tags);
            tags.push(begin.matching_end());
            vec![TaggedPoint::new(only.coord, tags)]
        }
        n => {
            records[0].tags.insert(0, begin);
            records[n - 1].tags.push(begin.matching_end());
            records
        }
    }
}
