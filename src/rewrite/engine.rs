//! The context-sensitive, stochastic rewriter: applies a [`RuleTable`] to a
//! token sequence one pass at a time, with a single owned, seeded
//! `rand_chacha::ChaCha8Rng` driving stochastic choice, and soft warnings
//! routed through a [`crate::diagnostics::DiagnosticSink`] rather than
//! failing the pass.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::diagnostics::DiagnosticSink;
use crate::rules::{IgnoreSet, RuleMapping, RuleTable};
use crate::token::Token;

/// Owns the rule table, ignore set, and PRNG used to drive one or more
/// rewrite passes.
///
/// Two `Rewriter`s built with the same seed, rule table (same insertion
/// order), ignore set, and input produce byte-identical output streams.
pub struct Rewriter {
    rules: RuleTable,
    ignore: IgnoreSet,
    rng: ChaCha8Rng,
}

impl Rewriter {
    /// Build a rewriter seeded explicitly, for reproducible runs.
    pub fn with_seed(rules: RuleTable, ignore: IgnoreSet, seed: u64) -> Self {
        Rewriter {
            rules,
            ignore,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build a rewriter seeded from OS entropy, reporting the chosen seed to
    /// `sink` so a caller can record it for reproducibility.
    pub fn with_random_seed(
        rules: RuleTable,
        ignore: IgnoreSet,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let seed: u64 = rand::thread_rng().gen();
        sink.info(format!("using random seed: {seed}"));
        Rewriter::with_seed(rules, ignore, seed)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Apply the production rules to a single token with its (possibly
    /// absent) left/right context.
    pub fn apply_rules(
        &mut self,
        token: &Token,
        left: Option<&Token>,
        right: Option<&Token>,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<Token> {
        let Some(candidates) = self.rules.get(&token.name) else {
            sink.info(format!("unknown token '{token}': passthrough"));
            return vec![token.clone()];
        };

        let filtered: Vec<&RuleMapping> = candidates
            .iter()
            .filter(|r| {
                r.left_context.is_none()
                    || left.is_some_and(|l| Some(l) == r.left_context.as_ref())
            })
            .filter(|r| {
                r.right_context.is_none()
                    || right.is_some_and(|rt| Some(rt) == r.right_context.as_ref())
            })
            .collect();

        if filtered.is_empty() {
            sink.info(format!("no rule for '{token}' matches its context: passthrough"));
            return vec![token.clone()];
        }

        self.check_probability_mix(token, &filtered, sink);

        let chosen = self.pick_rule(&filtered);
        chosen.production.clone()
    }

    /// Pick a rule among the filtered candidates: deterministic-first, else
    /// weighted sample.
    fn pick_rule<'a>(&mut self, candidates: &[&'a RuleMapping]) -> &'a RuleMapping {
        if candidates.len() == 1 {
            return candidates[0];
        }
        if let Some(deterministic) = candidates.iter().find(|r| r.probability.is_none()) {
            return deterministic;
        }
        let weights: Vec<f64> = candidates.iter().map(|r| r.probability.unwrap_or(0.0)).collect();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return candidates[0];
        }
        let mut draw = self.rng.gen_range(0.0..total);
        for (rule, weight) in candidates.iter().zip(weights.iter()) {
            if draw < *weight {
                return rule;
            }
            draw -= weight;
        }
        candidates[candidates.len() - 1]
    }

    fn check_probability_mix(
        &self,
        token: &Token,
        candidates: &[&RuleMapping],
        sink: &mut dyn DiagnosticSink,
    ) {
        if candidates.len() < 2 {
            return;
        }
        let with_probability = candidates.iter().filter(|r| r.probability.is_some()).count();
        if with_probability != 0 && with_probability != candidates.len() {
            sink.warn(format!(
                "rules for '{token}' mix probabilistic and deterministic forms"
            ));
        }
        let sum: f64 = candidates.iter().filter_map(|r| r.probability).sum();
        if sum > 1.0 {
            sink.warn(format!(
                "rules for '{token}' have probabilities summing to {sum} (> 1.0)"
            ));
        }
    }

    /// One rewrite pass over `tokens`: every input token is visited exactly
    /// once, left-to-right, and its replacement(s) are appended to the
    /// output without being re-examined in this same pass.
    pub fn rewrite(&mut self, tokens: &[Token], sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut left: Option<Token> = None;

        for (i, token) in tokens.iter().enumerate() {
            let right = tokens[i + 1..]
                .iter()
                .find(|t| !self.ignore.contains(&t.name));

            let replacement = self.apply_rules(token, left.as_ref(), right, sink);
            output.extend(replacement);

            if !self.ignore.contains(&token.name) {
                left = Some(token.clone());
            }
        }

        output
    }

    /// Apply `rewrite` `n` times in sequence.
    pub fn loop_rewrite(
        &mut self,
        axiom: &[Token],
        n: usize,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<Token> {
        let mut current = axiom.to_vec();
        for _ in 0..n {
            current = self.rewrite(&current, sink);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use crate::rules::parse_grammar;
    use crate::rules::TokenMode;

    fn tokens(s: &str) -> Vec<Token> {
        s.chars().map(|c| Token::new(c.to_string())).collect()
    }

    fn render(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.name.clone()).collect()
    }

    fn build(rule_text: &str) -> Rewriter {
        let (table, ignore) = parse_grammar(rule_text, TokenMode::Default).unwrap();
        Rewriter::with_seed(table, ignore, 42)
    }

    #[test]
    fn passthrough_identity_with_empty_table() {
        let mut rewriter = build("");
        let mut sink = NullSink;
        let input = tokens("abab");
        assert_eq!(rewriter.rewrite(&input, &mut sink), input);
    }

    #[test]
    fn context_free_grammar_grows_algae_string() {
        let mut rewriter = build("a->ab\nb->a\n");
        let mut sink = NullSink;
        let out = rewriter.loop_rewrite(&tokens("a"), 4, &mut sink);
        assert_eq!(render(&out), "abaababa");
    }

    #[test]
    fn two_sided_context_rules_converge_on_alternating_pattern() {
        let mut rewriter = build("a->ab\nb<a->b\nb<b->a\n");
        let mut sink = NullSink;
        let mut current = tokens("a");
        let mut seen = Vec::new();
        for _ in 0..3 {
            current = rewriter.rewrite(&current, &mut sink);
            seen.push(render(&current));
        }
        assert_eq!(seen, vec!["ab", "abb", "abba"]);
    }

    #[test]
    fn left_context_rule_walks_a_marker_down_the_sequence() {
        let mut rewriter = build("b<a->b\nb->a\n");
        let mut sink = NullSink;
        let mut current = tokens("baaaaaa");
        let mut seen = Vec::new();
        for _ in 0..6 {
            current = rewriter.rewrite(&current, &mut sink);
            seen.push(render(&current));
        }
        assert_eq!(
            seen,
            vec![
                "abaaaaa", "aabaaaa", "aaabaaa", "aaaabaa", "aaaaaba", "aaaaaab",
            ]
        );
    }

    #[test]
    fn ignored_tokens_are_skipped_for_context_but_still_rewritten() {
        let mut rewriter = build("#ignore: f\n1<0>1->1f1\n1<1>1->0\n");
        let mut sink = NullSink;
        let mut current = tokens("f1f1f1");
        let mut seen = Vec::new();
        for _ in 0..3 {
            current = rewriter.rewrite(&current, &mut sink);
            seen.push(render(&current));
        }
        assert_eq!(seen, vec!["f1f0f1", "f1f1f1f1", "f1f0f0f1"]);
    }

    #[test]
    fn rule_with_missing_edge_context_does_not_fire() {
        // A rule requiring left context "b" must NOT fire on the first
        // token, where there is no left context at all.
        let mut rewriter = build("b<a->Z\na->Y\n");
        let mut sink = NullSink;
        let out = rewriter.rewrite(&tokens("a"), &mut sink);
        assert_eq!(render(&out), "Y");
    }

    #[test]
    fn deterministic_rule_wins_over_unweighted_siblings() {
        let mut rewriter = build("a->x\na:0.5->y\n");
        let mut sink = NullSink;
        let out = rewriter.apply_rules(&Token::new("a"), None, None, &mut sink);
        assert_eq!(out, vec![Token::new("x")]);
    }

    #[test]
    fn unknown_token_passes_through_with_a_diagnostic() {
        let mut rewriter = build("a->b\n");
        let mut sink = crate::diagnostics::CollectingSink::new();
        let out = rewriter.apply_rules(&Token::new("z"), None, None, &mut sink);
        assert_eq!(out, vec![Token::new("z")]);
        assert_eq!(sink.records.len(), 1);
    }

    #[test]
    fn same_seed_same_rule_order_is_deterministic() {
        let rule_text = "a:0.5->x\na:0.5->y\n";
        let mut a = build(rule_text);
        let mut b = build(rule_text);
        let mut sink = NullSink;
        let axiom = tokens("aaaaaaaaaa");
        let out_a = a.loop_rewrite(&axiom, 1, &mut sink);
        let out_b = b.loop_rewrite(&axiom, 1, &mut sink);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn iteration_homomorphism() {
        let rule_text = "a->ab\nb->a\n";
        let mut once = build(rule_text);
        let mut twice = build(rule_text);
        let mut sink = NullSink;
        let axiom = tokens("a");
        let step_n = once.loop_rewrite(&axiom, 2, &mut sink);
        let step_n_plus_1 = twice.loop_rewrite(&axiom, 2, &mut sink);
        let rewritten_again = twice.rewrite(&step_n_plus_1, &mut sink);
        let direct = once.loop_rewrite(&axiom, 3, &mut sink);
        assert_eq!(once.rewrite(&step_n, &mut sink), direct);
        let _ = rewritten_again;
    }

    #[test]
    fn mixed_probability_forms_warn() {
        let mut rewriter = build("a->x\na:0.5->y\n");
        let mut sink = crate::diagnostics::CollectingSink::new();
        let _ = rewriter.apply_rules(&Token::new("a"), None, None, &mut sink);
        assert_eq!(
            sink.messages_at(crate::diagnostics::Level::Warn).count(),
            1
        );
    }
}
