use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rendered_index_engine::{
    Expectations, IndexedBuilder, LineKind, ReadbackOptions, classify_line, trailing_space_count,
};

fn generate_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 4 {
            0 => String::new(),
            1 => format!("line {i} with text"),
            2 => format!("line {i} with trailing spaces   "),
            _ => " ".repeat(i % 7 + 1),
        })
        .collect()
}

fn bench_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder");
    group.sample_size(20);

    let lines = generate_lines(1000);
    group.bench_function("append_lines", |b| {
        b.iter(|| {
            let mut builder = IndexedBuilder::new();
            for (i, line) in lines.iter().enumerate() {
                if i % 10 == 0 {
                    black_box(builder.append_paragraph(line));
                } else {
                    black_box(builder.append_line(line));
                }
            }
            black_box(builder.into_string());
        });
    });

    group.finish();
}

/// What the host reads back for `lines`, each closed by a line break.
fn modelled_readback(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        match classify_line(line) {
            LineKind::Empty => out.push(' '),
            LineKind::OnlySpaces if trailing_space_count(line) == 1 => out.push_str(line),
            LineKind::OnlySpaces | LineKind::EndsWithSpaces => {
                out.push_str(&line[..line.len() - 1])
            }
            LineKind::EndsWithNoSpace => out.push_str(line),
        }
        out.push_str(" \u{b}");
    }
    out
}

fn bench_readback(c: &mut Criterion) {
    let mut group = c.benchmark_group("readback");
    group.sample_size(20);

    let lines = generate_lines(1000);
    let mut builder = IndexedBuilder::new();
    let mut expectations = Expectations::new();
    for line in &lines {
        let span = builder.append_line(line);
        expectations.record(span, line);
    }
    let readback = modelled_readback(&lines);
    assert!(
        expectations
            .verify(&readback, ReadbackOptions::default())
            .is_ok()
    );

    group.bench_function("verify", |b| {
        b.iter(|| {
            let result = expectations.verify(black_box(&readback), ReadbackOptions::default());
            black_box(result.is_ok());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_builder, bench_readback);
criterion_main!(benches);
