//! The rule-language parser: lifts one textual line into either an
//! ignore-set update or a rule-table entry, via a hand-rolled
//! recursive-descent scan.

use crate::error::RuleParseError;
use crate::rules::lexer::{Scanner, TokenMode};
use crate::rules::mapping::RuleMapping;
use crate::token::Token;

/// The result of parsing one rule-language line.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleParseResult {
    /// `#ignore: a, b, c`: token names to add to the ignore set.
    Ignore(Vec<Token>),
    /// A production rule, with its left-hand side and mapping.
    Rule(Token, RuleMapping),
}

/// Parse one rule or ignore line. Does not mutate any table; callers fold
/// the result into a [`crate::rules::table::RuleTable`] /
/// [`crate::rules::table::IgnoreSet`] themselves.
pub fn parse_line(line: &str, mode: TokenMode) -> Result<RuleParseResult, RuleParseError> {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix('#') {
        return parse_ignore(trimmed, rest, mode);
    }
    parse_rule(trimmed, mode)
}

fn parse_ignore(
    full_line: &str,
    rest: &str,
    mode: TokenMode,
) -> Result<RuleParseResult, RuleParseError> {
    let rest = rest
        .strip_prefix("ignore")
        .ok_or_else(|| RuleParseError::UnknownDirective(full_line.to_string()))?;
    let mut scanner = Scanner::new(rest);
    scanner.skip_ws();
    scanner.try_eat(':');

    let mut names = Vec::new();
    loop {
        if scanner.at_end() {
            break;
        }
        match scanner.read_token(mode)? {
            Some(name) => names.push(Token::new(name)),
            None => break,
        }
        scanner.skip_list_separator();
    }
    if names.is_empty() {
        return Err(RuleParseError::ExpectedToken(full_line.to_string()));
    }
    Ok(RuleParseResult::Ignore(names))
}

fn parse_rule(line: &str, mode: TokenMode) -> Result<RuleParseResult, RuleParseError> {
    let mut scanner = Scanner::new(line);

    let first = read_required_token(&mut scanner, mode, line)?;

    let (left_context, lhs) = if scanner_peek_less_than(&scanner) {
        scanner.try_eat('<');
        let lhs = read_required_token(&mut scanner, mode, line)?;
        (Some(first), lhs)
    } else {
        (None, first)
    };

    let right_context = if scanner_peek_greater_than(&scanner) {
        scanner.try_eat('>');
        Some(read_required_token(&mut scanner, mode, line)?)
    } else {
        None
    };

    let probability = if scanner.try_eat(':') {
        Some(scanner.read_real()?)
    } else {
        None
    };

    if !scanner.try_eat_arrow() {
        return Err(RuleParseError::ExpectedArrow(line.to_string()));
    }

    let mut production = Vec::new();
    loop {
        match scanner.read_token(mode)? {
            Some(name) => production.push(Token::new(name)),
            None => break,
        }
        scanner.skip_list_separator();
        if scanner.at_end() {
            break;
        }
    }
    if production.is_empty() {
        return Err(RuleParseError::EmptyProduction(line.to_string()));
    }

    let mut mapping = RuleMapping::new(production);
    mapping.probability = probability;
    mapping.left_context = left_context;
    mapping.right_context = right_context;
    Ok(RuleParseResult::Rule(lhs, mapping))
}

fn read_required_token(
    scanner: &mut Scanner,
    mode: TokenMode,
    line: &str,
) -> Result<Token, RuleParseError> {
    match scanner.read_token(mode)? {
        Some(name) => Ok(Token::new(name)),
        None => Err(RuleParseError::ExpectedToken(line.to_string())),
    }
}

/// Leftmost-greedy lookahead for the left-context separator: the token we
/// just read is reinterpreted as a left context only if a bare `<`
/// immediately follows it.
fn scanner_peek_less_than(scanner: &Scanner) -> bool {
    scanner.clone_peek_is('<')
}

fn scanner_peek_greater_than(scanner: &Scanner) -> bool {
    scanner.clone_peek_is('>')
}
