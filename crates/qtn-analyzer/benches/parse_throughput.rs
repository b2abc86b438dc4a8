use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qtn_analyzer::syntax::{parse, tokenize};
use tower_lsp::lsp_types::Url;

fn sample_source() -> String {
    let mut source = String::from("#pragma max_players 16\nusing Deterministic;\n\n");
    for i in 0..50 {
        source.push_str(&format!(
            "component Unit{i} {{\n  [Header(\"Stats\")]\n  FP speed;\n  nothashed int hp;\n  list<FPVector2> path;\n}}\n\n\
             enum State{i} : Byte {{ Idle, Moving = 1, Dead = 0xFF }}\n\n\
             signal OnUnit{i}Died(EntityRef entity, Unit{i}* unit);\n\n"
        ));
    }
    source.push_str("input { button jump; FPVector2 move; }\nglobal { int round; }\n");
    source
}

fn bench_parse(c: &mut Criterion) {
    let source = sample_source();
    let uri = Url::parse("file:///bench/sample.qtn").unwrap();

    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(&source)));
    });

    c.bench_function("parse", |b| {
        b.iter(|| parse(black_box(&source), &uri));
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
