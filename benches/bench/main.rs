// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

// local imports
use wsmatch::{MatchContext, RuleSet};

criterion_group!(benches, bench);
criterion_main!(benches);

const GROUP: &str = "wsmatch";

const PATTERNS: &[&str] = &["eslint-*", "!eslint-plugin-*", "eslint-plugin-bar", "*-config-*", "@scope/*"];

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("short", "eslint-plugin-bar".to_owned(), true),
        ("short", "express".to_owned(), false),
        ("long", format!("@scope/{}", "x".repeat(4096)), true),
        ("long", "aabbcc".repeat(4096), false),
    ];

    for (name, input, expected) in &variants {
        let param = format!("{}:{}:{}", name, if *expected { "pos" } else { "neg" }, input.len());
        c.throughput(Throughput::Bytes(input.len() as u64));

        let rules = RuleSet::compile(PATTERNS);
        assert_eq!(rules.evaluate(input), *expected);
        c.bench_function(BenchmarkId::new("interpreted", &param), |b| {
            b.iter_batched(
                || input.as_str(),
                |input| black_box(&rules).evaluate(input),
                BatchSize::SmallInput,
            );
        });

        let mut ctx = MatchContext::create(PATTERNS, false).unwrap();
        assert_eq!(ctx.matches(input).unwrap(), *expected);
        c.bench_function(BenchmarkId::new("accelerated", &param), |b| {
            b.iter(|| ctx.matches(black_box(input)).unwrap());
        });
        ctx.dispose();
    }

    c.finish();
}
