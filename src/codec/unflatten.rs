//! Tagged-point stream to geometry tree, by recursive descent with one
//! record of lookahead.
//!
//! The Point base case for a `MULTIPOINT_END` or `COLLECTION_END` record
//! returns its full, unstripped tagstack; the coordinate-sequence base case
//! strips its closing tag before returning. The enclosing multipart loop
//! strips the outer tag on every iteration, so stripping again in the Point
//! branch would swallow a tag layer on deeply nested input.

use crate::error::DecodeError;
use crate::geometry::{CoordNum, Geometry, GeometryCollection, LineString, Point, PointTag, Polygon};

use super::TaggedPoint;

/// Unflatten a whole stream into its top-level geometries, in the order
/// their outermost BEGIN appeared.
pub fn unflatten<T: CoordNum>(records: &[TaggedPoint<T>]) -> Result<Vec<Geometry<T>>, DecodeError> {
    let mut cursor = Cursor::new(records);
    let mut geometries = Vec::new();
    while !cursor.is_empty() {
        let (geometry, _) = unflatten_single(&mut cursor)?;
        geometries.push(geometry);
    }
    Ok(geometries)
}

/// A peekable, single-record-pushback cursor over a record slice.
struct Cursor<'a, T: CoordNum> {
    records: &'a [TaggedPoint<T>],
    pos: usize,
    pending: Option<TaggedPoint<T>>,
}

impl<'a, T: CoordNum> Cursor<'a, T> {
    fn new(records: &'a [TaggedPoint<T>]) -> Self {
        Cursor { records, pos: 0, pending: None }
    }

    fn peek(&self) -> Option<&TaggedPoint<T>> {
        self.pending.as_ref().or_else(|| self.records.get(self.pos))
    }

    fn next(&mut self) -> Option<TaggedPoint<T>> {
        if let Some(record) = self.pending.take() {
            return Some(record);
        }
        let record = self.records.get(self.pos)?.clone();
        self.pos += 1;
        Some(record)
    }

    fn prepend(&mut self, record: TaggedPoint<T>) {
        self.pending = Some(record);
    }

    /// The index of the record that the next call to [`Cursor::next`] will
    /// return, for error reporting.
    fn position(&self) -> usize {
        if self.pending.is_some() {
            self.pos.saturating_sub(1)
        } else {
            self.pos
        }
    }

    fn is_empty(&self) -> bool {
        self.peek().is_none()
    }
}

fn unwrap_first_tag(tags: &[PointTag]) -> (Option<PointTag>, Vec<PointTag>) {
    match tags.split_first() {
        Some((first, rest)) => (Some(*first), rest.to_vec()),
        None => (None, Vec::new()),
    }
}

/// Decode one geometry. Returns it alongside the tagstack remaining on the
/// record that closed it; the caller (an enclosing multipart decode, or
/// the top-level driver, which discards it) determines what that
/// remainder means.
fn unflatten_single<T: CoordNum>(
    cursor: &mut Cursor<T>,
) -> Result<(Geometry<T>, Vec<PointTag>), DecodeError> {
    let peeked = cursor.peek().ok_or(DecodeError::EmptyStream)?;
    let first = peeked.tags.first().copied();

    match first {
        None => {
            let record = cursor.next().expect("peek just confirmed a record");
            Ok((Geometry::Point(Point::new(record.coord)), Vec::new()))
        }
        Some(PointTag::MultipointEnd) | Some(PointTag::CollectionEnd) => {
            let record = cursor.next().expect("peek just confirmed a record");
            let tags = record.tags;
            Ok((Geometry::Point(Point::new(record.coord)), tags))
        }
        Some(t @ (PointTag::LinestringBegin | PointTag::ShellBegin | PointTag::HoleBegin)) => {
            unflatten_coordinate_sequence(cursor, t)
        }
        Some(_) => unflatten_multipart(cursor),
    }
}

fn unflatten_coordinate_sequence<T: CoordNum>(
    cursor: &mut Cursor<T>,
    begin: PointTag,
) -> Result<(Geometry<T>, Vec<PointTag>), DecodeError> {
    let position = cursor.position();
    let first = cursor
        .next()
        .ok_or(DecodeError::TruncatedSequence { position })?;
    let mut coords = vec![first.coord];

    loop {
        let position = cursor.position();
        let record = cursor
            .next()
            .ok_or(DecodeError::TruncatedSequence { position })?;
        coords.push(record.coord);
        if record.tags.is_empty() {
            continue;
        }
        let found = record.tags[0];
        let expected = begin.matching_end();
        if found != expected {
            return Err(DecodeError::MismatchedEnd { position, expected, found });
        }
        let remaining = record.tags[1..].to_vec();
        return Ok((Geometry::LineString(LineString::new(coords)), remaining));
    }
}

fn unflatten_multipart<T: CoordNum>(
    cursor: &mut Cursor<T>,
) -> Result<(Geometry<T>, Vec<PointTag>), DecodeError> {
    let position = cursor.position();
    let record = cursor
        .next()
        .ok_or(DecodeError::TruncatedSequence { position })?;
    let Some(begin_tag) = record.tags.first().copied() else {
        return Err(DecodeError::UnmatchedEnd { position });
    };
    if !begin_tag.is_begin() {
        return Err(DecodeError::UnmatchedEnd { position });
    }
    let end_tag = begin_tag.matching_end();
    let remaining_tags = record.tags[1..].to_vec();
    cursor.prepend(TaggedPoint::new(record.coord, remaining_tags));

    let mut outer_tag: Option<PointTag> = None;
    let mut children = Vec::new();
    let mut final_remaining = Vec::new();

    while outer_tag != Some(end_tag) {
        if cursor.is_empty() {
            return Err(DecodeError::DanglingBegin { position });
        }
        let (child, remaining) = unflatten_single(cursor)?;
        children.push(child);
        let (tag, rest) = unwrap_first_tag(&remaining);
        outer_tag = tag;
        final_remaining = rest;
    }

    let geometry = assemble(begin_tag, children, position)?;
    Ok((geometry, final_remaining))
}

fn assemble<T: CoordNum>(
    begin_tag: PointTag,
    mut children: Vec<Geometry<T>>,
    position: usize,
) -> Result<Geometry<T>, DecodeError> {
    match begin_tag {
        PointTag::PolygonBegin => {
            if children.is_empty() {
                return Err(DecodeError::TruncatedSequence { position });
            }
            let shell = expect_line_string(children.remove(0), position)?;
            let holes = children
                .into_iter()
                .map(|g| expect_line_string(g, position))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::Polygon(Polygon::new(shell, holes)))
        }
        PointTag::MultipointBegin => {
            let points = children
                .into_iter()
                .map(|g| match g {
                    Geometry::Point(p) => Ok(p),
                    _ => Err(DecodeError::MalformedMultiPointMember { position, tags: Vec::new() }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::MultiPoint(crate::geometry::MultiPoint::new(points)))
        }
        PointTag::MultilinestringBegin => {
            let linestrings = children
                .into_iter()
                .map(|g| expect_line_string(g, position))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::MultiLineString(
                crate::geometry::MultiLineString::new(linestrings),
            ))
        }
        PointTag::MultipolygonBegin => {
            let polygons = children
                .into_iter()
                .map(|g| expect_polygon(g, position))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::MultiPolygon(crate::geometry::MultiPolygon::new(
                polygons,
            )))
        }
        PointTag::CollectionBegin => Ok(Geometry::GeometryCollection(GeometryCollection::new(
            children,
        ))),
        _ => unreachable!("non-multipart begin tags are dispatched elsewhere"),
    }
}

fn expect_line_string<T: CoordNum>(
    g: Geometry<T>,
    position: usize,
) -> Result<LineString<T>, DecodeError> {
    match g {
        Geometry::LineString(ls) => Ok(ls),
        _ => Err(DecodeError::WrongChildShape { position, expected: "LineString" }),
    }
}

fn expect_polygon<T: CoordNum>(g: Geometry<T>, position: usize) -> Result<Polygon<T>, DecodeError> {
    match g {
        Geometry::Polygon(p) => Ok(p),
        _ => Err(DecodeError::WrongChildShape { position, expected: "Polygon" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::flatten::flatten_single;
    use crate::geometry::{Coord, LineString, MultiPolygon, Point};

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord::xy(x, y)
    }

    fn round_trip(g: Geometry<f64>) -> Geometry<f64> {
        let records = flatten_single(&g);
        let mut cursor = Cursor::new(&records);
        let (decoded, remaining) = unflatten_single(&mut cursor).unwrap();
        assert!(remaining.is_empty());
        assert!(cursor.is_empty());
        decoded
    }

    #[test]
    fn point_round_trips() {
        let g = Geometry::Point(Point::new(c(3.0, 4.0)));
        assert_eq!(round_trip(g.clone()), g);
    }

    #[test]
    fn linestring_round_trips() {
        let g = Geometry::LineString(LineString::new(vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)]));
        assert_eq!(round_trip(g.clone()), g);
    }

    #[test]
    fn polygon_with_hole_round_trips() {
        let shell = LineString::new(vec![c(0.0, 1.0), c(2.0, 3.0), c(4.0, 5.0), c(0.0, 1.0)]);
        let hole = LineString::new(vec![c(6.0, 7.0), c(8.0, 9.0), c(10.0, 11.0), c(6.0, 7.0)]);
        let g = Geometry::Polygon(Polygon::new(shell, vec![hole]));
        assert_eq!(round_trip(g.clone()), g);
    }

    #[test]
    fn multipoint_round_trips() {
        let g = Geometry::MultiPoint(crate::geometry::MultiPoint::new(vec![
            Point::new(c(0.0, 0.0)),
            Point::new(c(1.0, 1.0)),
        ]));
        assert_eq!(round_trip(g.clone()), g);
    }

    #[test]
    fn triple_nested_collection_round_trips_as_two_records() {
        let innermost = Geometry::GeometryCollection(GeometryCollection::new(vec![
            Geometry::Point(Point::new(c(0.0, 0.0))),
            Geometry::Point(Point::new(c(1.0, 1.0))),
        ]));
        let middle = Geometry::GeometryCollection(GeometryCollection::new(vec![innermost]));
        let outer = Geometry::GeometryCollection(GeometryCollection::new(vec![middle]));

        let records = flatten_single(&outer);
        assert_eq!(records.len(), 2);

        let decoded = unflatten(&records).unwrap();
        assert_eq!(decoded, vec![outer]);
    }

    #[test]
    fn mixed_collection_of_point_multipolygon_and_linestring_round_trips() {
        let point = Geometry::Point(Point::new(c(0.0, 0.0)));
        let ring = |base: f64| {
            LineString::new(vec![
                c(base, base),
                c(base + 1.0, base),
                c(base + 1.0, base + 1.0),
                c(base, base),
            ])
        };
        let p1 = Polygon::new(ring(0.0), vec![]);
        let p2 = Polygon::new(ring(10.0), vec![]);
        let multipolygon = Geometry::MultiPolygon(MultiPolygon::new(vec![p1, p2]));
        let linestring = Geometry::LineString(LineString::new(vec![c(0.0, 0.0), c(1.0, 1.0)]));
        let collection =
            Geometry::GeometryCollection(GeometryCollection::new(vec![point, multipolygon, linestring]));

        let records = flatten_single(&collection);
        assert_eq!(records[0].tags, vec![PointTag::CollectionBegin]);
        assert_eq!(
            records.last().unwrap().tags,
            vec![PointTag::LinestringEnd, PointTag::CollectionEnd]
        );

        let decoded = unflatten(&records).unwrap();
        assert_eq!(decoded, vec![collection]);
    }

    #[test]
    fn dangling_begin_is_an_error() {
        let records = vec![TaggedPoint::new(c(0.0, 0.0), vec![PointTag::LinestringBegin])];
        let err = unflatten(&records).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedSequence { .. }));
    }

    #[test]
    fn unmatched_end_is_an_error() {
        let records = vec![TaggedPoint::new(c(0.0, 0.0), vec![PointTag::LinestringEnd])];
        let err = unflatten(&records).unwrap_err();
        assert!(matches!(err, DecodeError::UnmatchedEnd { .. }));
    }

    #[test]
    fn empty_stream_is_an_error() {
        let records: Vec<TaggedPoint<f64>> = Vec::new();
        let err = unflatten(&records).unwrap_err();
        assert_eq!(err, DecodeError::EmptyStream);
    }
}
