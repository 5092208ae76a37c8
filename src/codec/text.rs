//! The flat geometry textual format: one [`TaggedPoint`] per line,
//! `coord ('\t' tagnames)?`. This is the format's own small reader/writer,
//! not a wrapper around the general flatten codec; it exists only so a
//! stream of [`TaggedPoint`]s can round-trip to and from text without
//! pulling in a general-purpose tuple/WKT grammar.

use std::fmt;
use std::str::FromStr;

use crate::diagnostics::DiagnosticSink;
use crate::geometry::{Coord, CoordNum, PointTag};

use super::TaggedPoint;

/// Render one record as a line of the flat format. No trailing newline.
pub fn write_line<T: CoordNum + fmt::Display>(record: &TaggedPoint<T>) -> String {
    let mut line = match record.coord.z {
        Some(z) => format!("({}, {}, {})", record.coord.x, record.coord.y, z),
        None => format!("({}, {})", record.coord.x, record.coord.y),
    };
    if !record.tags.is_empty() {
        line.push('\t');
        let names: Vec<&str> = record.tags.iter().map(|t| t.as_str()).collect();
        line.push_str(&names.join(" "));
    }
    line
}

/// Render a whole record stream, one line per record, newline-terminated.
pub fn write_lines<T: CoordNum + fmt::Display>(records: &[TaggedPoint<T>]) -> String {
    records.iter().map(|r| write_line(r) + "\n").collect()
}

/// Parse one line into a [`TaggedPoint`], or report a soft warning and
/// return `None` if the line is malformed. Blank/whitespace-only lines are
/// the caller's concern, not this function's.
pub fn parse_line<T>(line: &str, sink: &mut dyn DiagnosticSink) -> Option<TaggedPoint<T>>
where
    T: CoordNum + FromStr,
{
    let (coord_part, tag_part) = match line.split_once('\t') {
        Some((c, t)) => (c, Some(t)),
        None => (line, None),
    };

    let coord = match parse_coord::<T>(coord_part.trim()) {
        Some(c) => c,
        None => {
            sink.warn(format!("skipping malformed record: bad coordinate in '{line}'"));
            return None;
        }
    };

    let mut tags = Vec::new();
    if let Some(names) = tag_part {
        for name in names.split_whitespace() {
            match PointTag::from_str(name) {
                Some(tag) => tags.push(tag),
                None => {
                    sink.warn(format!("skipping malformed record: unknown tag '{name}' in '{line}'"));
                    return None;
                }
            }
        }
    }

    Some(TaggedPoint::new(coord, tags))
}

/// Parse every line of a flat-format document, skipping blank lines and
/// reporting (but not failing on) malformed records.
pub fn parse_lines<T>(text: &str, sink: &mut dyn DiagnosticSink) -> Vec<TaggedPoint<T>>
where
    T: CoordNum + FromStr,
{
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_line(line, sink))
        .collect()
}

fn parse_coord<T>(text: &str) -> Option<Coord<T>>
where
    T: CoordNum + FromStr,
{
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let x = parts.next()?.parse::<T>().ok()?;
    let y = parts.next()?.parse::<T>().ok()?;
    let z = match parts.next() {
        Some(z_text) => Some(z_text.parse::<T>().ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(match z {
        Some(z) => Coord::xyz(x, y, z),
        None => Coord::xy(x, y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, Level};

    #[test]
    fn writes_2d_bare_point() {
        let record = TaggedPoint::bare(Coord::xy(1.0, 2.0));
        assert_eq!(write_line(&record), "(1, 2)");
    }

    #[test]
    fn writes_3d_point_with_tags() {
        let record = TaggedPoint::new(Coord::xyz(1.0, 2.0, 3.0), vec![PointTag::LinestringBegin]);
        assert_eq!(write_line(&record), "(1, 2, 3)\tLINESTRING_BEGIN");
    }

    #[test]
    fn writes_multiple_tags_space_separated() {
        let record = TaggedPoint::new(
            Coord::xy(0.0, 0.0),
            vec![PointTag::HoleEnd, PointTag::PolygonEnd],
        );
        assert_eq!(write_line(&record), "(0, 0)\tHOLE_END POLYGON_END");
    }

    #[test]
    fn round_trips_through_text() {
        let records = vec![
            TaggedPoint::bare(Coord::xy(1.0, 2.0)),
            TaggedPoint::new(Coord::xyz(3.0, 4.0, 5.0), vec![PointTag::CollectionBegin]),
        ];
        let text = write_lines(&records);
        let mut sink = CollectingSink::new();
        let parsed: Vec<TaggedPoint<f64>> = parse_lines(&text, &mut sink);
        assert_eq!(parsed, records);
        assert!(sink.records.is_empty());
    }

    #[test]
    fn skips_malformed_coordinate_with_a_warning() {
        let mut sink = CollectingSink::new();
        let parsed: Vec<TaggedPoint<f64>> = parse_lines("(not, a, coord)\n(1, 2)\n", &mut sink);
        assert_eq!(parsed, vec![TaggedPoint::bare(Coord::xy(1.0, 2.0))]);
        assert_eq!(sink.messages_at(Level::Warn).count(), 1);
    }

    #[test]
    fn skips_unknown_tag_with_a_warning() {
        let mut sink = CollectingSink::new();
        let parsed: Vec<TaggedPoint<f64>> = parse_lines("(1, 2)\tBOGUS_TAG\n", &mut sink);
        assert!(parsed.is_empty());
        assert_eq!(sink.messages_at(Level::Warn).count(), 1);
    }

    #[test]
    fn skips_blank_lines_silently() {
        let mut sink = CollectingSink::new();
        let parsed: Vec<TaggedPoint<f64>> = parse_lines("\n(1, 2)\n   \n", &mut sink);
        assert_eq!(parsed.len(), 1);
        assert!(sink.records.is_empty());
    }
}
