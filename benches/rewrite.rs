#[macro_use]
extern crate criterion;
extern crate generative;

use generative::diagnostics::NullSink;
use generative::rewrite::Rewriter;
use generative::rules::{parse_grammar, TokenMode};
use generative::token::Token;

fn bench_context_free(c: &mut criterion::Criterion) {
    c.bench_function("rewrite algae 12 iterations", |bencher| {
        bencher.iter(|| {
            let (rules, ignore) = parse_grammar("a->ab\nb->a\n", TokenMode::Default).unwrap();
            let mut rewriter = Rewriter::with_seed(rules, ignore, 0);
            let axiom = vec![Token::new("a")];
            let mut sink = NullSink;
            let _ = rewriter.loop_rewrite(&axiom, 12, &mut sink);
        });
    });
}

fn bench_context_sensitive(c: &mut criterion::Criterion) {
    c.bench_function("rewrite ignore-set grammar 10 iterations", |bencher| {
        let text = "#ignore: f\n1<0>1->1f1\n1<1>1->0\n";
        bencher.iter(|| {
            let (rules, ignore) = parse_grammar(text, TokenMode::Default).unwrap();
            let mut rewriter = Rewriter::with_seed(rules, ignore, 7);
            let axiom: Vec<Token> = "f1f1f1".chars().map(|c| Token::new(c.to_string())).collect();
            let mut sink = NullSink;
            let _ = rewriter.loop_rewrite(&axiom, 10, &mut sink);
        });
    });
}

fn bench_stochastic(c: &mut criterion::Criterion) {
    c.bench_function("rewrite stochastic grammar 8 iterations", |bencher| {
        let text = "a->ab\nb:0.7->a\nb:0.3->ab\n";
        bencher.iter(|| {
            let (rules, ignore) = parse_grammar(text, TokenMode::Default).unwrap();
            let mut rewriter = Rewriter::with_seed(rules, ignore, 1234);
            let axiom = vec![Token::new("a")];
            let mut sink = NullSink;
            let _ = rewriter.loop_rewrite(&axiom, 8, &mut sink);
        });
    });
}

criterion_group!(
    benches,
    bench_context_free,
    bench_context_sensitive,
    bench_stochastic
);
criterion_main!(benches);
