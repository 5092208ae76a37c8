//! The 16-symbol `PointTag` alphabet: one BEGIN/END pair per structural
//! variant, plus the polygon shell/hole pair.

use std::fmt;

/// A structural begin/end marker attached to a [`crate::geometry::Coord`]
/// in a flattened stream.
///
/// Discriminants are assigned in BEGIN/END pairs so that `END = BEGIN + 1`
/// always holds; [`PointTag::matching_end`] and [`PointTag::matching_begin`]
/// rely on this rather than a lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointTag {
    LinestringBegin = 0,
    LinestringEnd = 1,
    PolygonBegin = 2,
    PolygonEnd = 3,
    ShellBegin = 4,
    ShellEnd = 5,
    HoleBegin = 6,
    HoleEnd = 7,
    MultipointBegin = 8,
    MultipointEnd = 9,
    MultilinestringBegin = 10,
    MultilinestringEnd = 11,
    MultipolygonBegin = 12,
    MultipolygonEnd = 13,
    CollectionBegin = 14,
    CollectionEnd = 15,
}

impl PointTag {
    pub fn is_begin(self) -> bool {
        (self as u8) % 2 == 0
    }

    pub fn is_end(self) -> bool {
        !self.is_begin()
    }

    /// The paired END for a BEGIN tag. Panics if called on an END tag; callers
    /// are expected to check [`PointTag::is_begin`] first.
    pub fn matching_end(self) -> PointTag {
        debug_assert!(self.is_begin());
        PointTag::from_discriminant(self as u8 + 1)
    }

    /// The paired BEGIN for an END tag. Panics if called on a BEGIN tag.
    pub fn matching_begin(self) -> PointTag {
        debug_assert!(self.is_end());
        PointTag::from_discriminant(self as u8 - 1)
    }

    fn from_discriminant(d: u8) -> PointTag {
        match d {
            0 => PointTag::LinestringBegin,
            1 => PointTag::LinestringEnd,
            2 => PointTag::PolygonBegin,
            3 => PointTag::PolygonEnd,
            4 => PointTag::ShellBegin,
            5 => PointTag::ShellEnd,
            6 => PointTag::HoleBegin,
            7 => PointTag::HoleEnd,
            8 => PointTag::MultipointBegin,
            9 => PointTag::MultipointEnd,
            10 => PointTag::MultilinestringBegin,
            11 => PointTag::MultilinestringEnd,
            12 => PointTag::MultipolygonBegin,
            13 => PointTag::MultipolygonEnd,
            14 => PointTag::CollectionBegin,
            15 => PointTag::CollectionEnd,
            _ => unreachable!("PointTag discriminants are 0..=15"),
        }
    }

    /// The canonical wire name, as used by the flat text format.
    pub fn as_str(self) -> &'static str {
        match self {
            PointTag::LinestringBegin => "LINESTRING_BEGIN",
            PointTag::LinestringEnd => "LINESTRING_END",
            PointTag::PolygonBegin => "POLYGON_BEGIN",
            PointTag::PolygonEnd => "POLYGON_END",
            PointTag::ShellBegin => "SHELL_BEGIN",
            PointTag::ShellEnd => "SHELL_END",
            PointTag::HoleBegin => "HOLE_BEGIN",
            PointTag::HoleEnd => "HOLE_END",
            PointTag::MultipointBegin => "MULTIPOINT_BEGIN",
            PointTag::MultipointEnd => "MULTIPOINT_END",
            PointTag::MultilinestringBegin => "MULTILINESTRING_BEGIN",
            PointTag::MultilinestringEnd => "MULTILINESTRING_END",
            PointTag::MultipolygonBegin => "MULTIPOLYGON_BEGIN",
            PointTag::MultipolygonEnd => "MULTIPOLYGON_END",
            PointTag::CollectionBegin => "COLLECTION_BEGIN",
            PointTag::CollectionEnd => "COLLECTION_END",
        }
    }

    pub fn from_str(name: &str) -> Option<PointTag> {
        Some(match name {
            "LINESTRING_BEGIN" => PointTag::LinestringBegin,
            "LINESTRING_END" => PointTag::LinestringEnd,
            "POLYGON_BEGIN" => PointTag::PolygonBegin,
            "POLYGON_END" => PointTag::PolygonEnd,
            "SHELL_BEGIN" => PointTag::ShellBegin,
            "SHELL_END" => PointTag::ShellEnd,
            "HOLE_BEGIN" => PointTag::HoleBegin,
            "HOLE_END" => PointTag::HoleEnd,
            "MULTIPOINT_BEGIN" => PointTag::MultipointBegin,
            "MULTIPOINT_END" => PointTag::MultipointEnd,
            "MULTILINESTRING_BEGIN" => PointTag::MultilinestringBegin,
            "MULTILINESTRING_END" => PointTag::MultilinestringEnd,
            "MULTIPOLYGON_BEGIN" => PointTag::MultipolygonBegin,
            "MULTIPOLYGON_END" => PointTag::MultipolygonEnd,
            "COLLECTION_BEGIN" => PointTag::CollectionBegin,
            "COLLECTION_END" => PointTag::CollectionEnd,
            _ => return None,
        })
    }
}

impl fmt::Display for PointTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_begin_plus_one() {
        assert_eq!(PointTag::PolygonBegin as u8 + 1, PointTag::PolygonEnd as u8);
        assert_eq!(PointTag::PolygonBegin.matching_end(), PointTag::PolygonEnd);
        assert_eq!(PointTag::PolygonEnd.matching_begin(), PointTag::PolygonBegin);
    }

    #[test]
    fn round_trips_through_wire_name() {
        for tag in [
            PointTag::LinestringBegin,
            PointTag::ShellEnd,
            PointTag::CollectionBegin,
        ] {
            assert_eq!(PointTag::from_str(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(PointTag::from_str("BOGUS"), None);
    }
}
