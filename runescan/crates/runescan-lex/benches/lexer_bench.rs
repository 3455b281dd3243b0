//! Scanning Benchmarks
//!
//! Measures cursor navigation and end-to-end scans through the driver.
//! Run with: `cargo bench --package runescan-lex`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use runescan_lex::unicode::{is_ident_continue, is_ident_start};
use runescan_lex::{tokenize, Cursor, Engine, Lexer, Next, ScanConfig, State};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Number,
    Ident,
    Punct,
}

fn lex_start(lx: &mut Lexer<Kind>) -> Next<Kind> {
    lx.skip_whitespace();
    let c = lx.peek()?;
    if c.is_numeric() {
        lx.accept_while(char::is_numeric);
        lx.emit(Kind::Number);
    } else if is_ident_start(c) {
        lx.accept_while(is_ident_continue);
        lx.emit(Kind::Ident);
    } else {
        lx.advance();
        lx.emit(Kind::Punct);
    }
    State::next(lex_start)
}

fn token_count(source: &str) -> usize {
    tokenize("bench", source, lex_start).map_or(0, |tokens| tokens.len())
}

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor");

    let ascii = "let x = 42; fn main() { let y = x + 1; return y; }".repeat(64);
    let mixed = "größe = ٣٤ + π; 日本語 😀 ".repeat(64);

    for (name, source) in [("ascii", &ascii), ("multibyte", &mixed)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("advance", name), source, |b, source| {
            b.iter(|| {
                let mut cursor = Cursor::new(black_box(source.as_str()));
                let mut count = 0usize;
                while cursor.advance().is_some() {
                    count += 1;
                }
                count
            })
        });
        group.bench_with_input(BenchmarkId::new("peek_backup", name), source, |b, source| {
            b.iter(|| {
                let mut cursor = Cursor::new(black_box(source.as_str()));
                while cursor.peek().is_some() {
                    cursor.advance();
                }
                cursor.pos()
            })
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let source = r#"
        fibonacci = (n - 1) + (n - 2)
        point = x * 10 + y
        größe = breite * höhe
        total = ٣٤ + 56 / count
    "#
    .repeat(16);

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("tokenize", |b| b.iter(|| token_count(black_box(&source))));

    for capacity in [1usize, 16, 100, 1024] {
        let config = ScanConfig::default().with_channel_capacity(capacity);
        group.bench_with_input(
            BenchmarkId::new("channel_capacity", capacity),
            &config,
            |b, config| {
                b.iter(|| {
                    Engine::new("bench", black_box(source.as_str()), lex_start)
                        .with_config(config.clone())
                        .run()
                        .map(|stream| stream.count())
                        .unwrap_or(0)
                })
            },
        );
    }

    group.finish();
}

fn bench_short_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_short");

    group.bench_function("single_number", |b| {
        b.iter(|| token_count(black_box("42")))
    });

    group.bench_function("assignment", |b| {
        b.iter(|| token_count(black_box("very_long_variable_name = 42")))
    });

    group.bench_function("empty", |b| b.iter(|| token_count(black_box(""))));

    group.finish();
}

criterion_group!(benches, bench_cursor, bench_scan, bench_short_inputs);
criterion_main!(benches);
