use thiserror::Error;

/// Fatal errors produced by the rule parser. Reported with the offending
/// substring; no partial rule is ever added to the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("could not parse '{0}' as a rule or ignore line")]
    Malformed(String),
    #[error("expected a token in '{0}'")]
    ExpectedToken(String),
    #[error("expected '->' in '{0}'")]
    ExpectedArrow(String),
    #[error("expected a probability after ':' in '{0}'")]
    ExpectedProbability(String),
    #[error("'{0}' starts with '#' but is not an #ignore line")]
    UnknownDirective(String),
    #[error("empty production on the right-hand side of '{0}'")]
    EmptyProduction(String),
}

/// Fatal errors produced while unflattening a tagged-point stream.
///
/// Decoding the current geometry stops as soon as one of these is raised;
/// `position` is the index (0-based) of the offending record in the stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("record {position}: stream ended with an unmatched BEGIN tag")]
    DanglingBegin { position: usize },
    #[error("record {position}: END tag with no matching BEGIN")]
    UnmatchedEnd { position: usize },
    #[error("record {position}: expected END tag {expected:?}, found {found:?}")]
    MismatchedEnd {
        position: usize,
        expected: crate::geometry::tag::PointTag,
        found: crate::geometry::tag::PointTag,
    },
    #[error("record {position}: stream ended inside a coordinate sequence")]
    TruncatedSequence { position: usize },
    #[error("record {position}: a MULTIPOINT member must be a bare point, found tags {tags:?}")]
    MalformedMultiPointMember {
        position: usize,
        tags: Vec<crate::geometry::tag::PointTag>,
    },
    #[error("record {position}: expected a {expected} child, found a different shape")]
    WrongChildShape {
        position: usize,
        expected: &'static str,
    },
    #[error("stream ended with no geometry produced")]
    EmptyStream,
}
