//! The rule language: tokens, rule mappings, the insertion-ordered rule
//! table, the ignore set, and the parser that lifts text into those types.

pub mod lexer;
pub mod mapping;
pub mod parser;
pub mod table;

pub use lexer::TokenMode;
pub use mapping::RuleMapping;
pub use parser::{parse_line, RuleParseResult};
pub use table::{IgnoreSet, RuleTable};

use crate::error::RuleParseError;
use crate::token::Token;

/// Parse a whole rule file: a sequence of `#ignore` and rule lines, with
/// blank lines (after trimming) skipped.
pub fn parse_grammar(
    text: &str,
    mode: TokenMode,
) -> Result<(RuleTable, IgnoreSet), RuleParseError> {
    let mut table = RuleTable::new();
    let mut ignore = IgnoreSet::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_line(trimmed, mode)? {
            RuleParseResult::Ignore(names) => {
                for name in names {
                    ignore.insert(name.name);
                }
            }
            RuleParseResult::Rule(lhs, mapping) => {
                table.add_rule(lhs, mapping);
            }
        }
    }

    Ok((table, ignore))
}
