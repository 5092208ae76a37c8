// The unstable `doc_auto_cfg` feature annotates documentation with any required cfg/features
// needed for optional items. We set the `docsrs` config when building for docs.rs. To use it
// in a local docs build, run: `cargo +nightly rustdoc --all-features -- --cfg docsrs`
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `generative` implements the two cores of a generative-geometry
//! toolchain: a context-sensitive, stochastic L-system rewriter, and a
//! lossless codec between a tree of geometry values and a flat,
//! streamable sequence of tagged points.
//!
//! # Rewriting a token sequence
//!
//! ```
//! use generative::diagnostics::NullSink;
//! use generative::rules::{parse_grammar, TokenMode};
//! use generative::rewrite::Rewriter;
//! use generative::token::Token;
//!
//! let (rules, ignore) = parse_grammar("a->ab\nb->a\n", TokenMode::Default).unwrap();
//! let mut rewriter = Rewriter::with_seed(rules, ignore, 0);
//! let axiom = vec![Token::new("a")];
//! let mut sink = NullSink;
//! let result = rewriter.loop_rewrite(&axiom, 4, &mut sink);
//! let rendered: String = result.iter().map(|t| t.name.clone()).collect();
//! assert_eq!(rendered, "abaababa");
//! ```
//!
//! # Flattening and unflattening a geometry
//!
//! ```
//! use generative::codec::{flatten, unflatten};
//! use generative::geometry::{Coord, Geometry, LineString};
//!
//! let geometries = vec![Geometry::LineString(LineString::new(vec![
//!     Coord::xy(0.0, 0.0),
//!     Coord::xy(1.0, 1.0),
//! ]))];
//! let records = flatten(&geometries);
//! assert_eq!(unflatten(&records).unwrap(), geometries);
//! ```

pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod rewrite;
pub mod rules;
pub mod token;

pub use diagnostics::{DiagnosticSink, Level};
pub use error::{DecodeError, RuleParseError};
pub use geometry::{Coord, CoordNum, Geometry, PointTag};
pub use rewrite::Rewriter;
pub use rules::{IgnoreSet, RuleMapping, RuleTable, TokenMode};
pub use token::Token;
