use crate::token::Token;

/// One entry in the rule table.
///
/// Invariant (checked only loosely, see `RuleTable::add_rule` and
/// [`crate::error::RuleParseError`]): rules sharing a left-hand side either
/// all carry a probability, or none do. Mixing the two forms is a soft
/// [`crate::diagnostics`] warning at rewrite time, not a parse-time error.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMapping {
    pub production: Vec<Token>,
    pub probability: Option<f64>,
    pub left_context: Option<Token>,
    pub right_context: Option<Token>,
}

impl RuleMapping {
    pub fn new(production: Vec<Token>) -> Self {
        RuleMapping {
            production,
            probability: None,
            left_context: None,
            right_context: None,
        }
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    pub fn with_left_context(mut self, token: Token) -> Self {
        self.left_context = Some(token);
        self
    }

    pub fn with_right_context(mut self, token: Token) -> Self {
        self.right_context = Some(token);
        self
    }

    /// A rule that always fires and simply re-emits the token it matched.
    pub fn passthrough(token: &Token) -> Self {
        RuleMapping::new(vec![token.clone()])
    }
}
