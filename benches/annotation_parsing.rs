use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use extension_repo_builder::RepositoryConfig;
use extension_repo_builder::parsers::annotation::parse_extension_header;

/// Generate a synthetic extension source with a full header and N body lines
fn generate_source(body_lines: usize) -> String {
    let mut source = String::from(
        "// @key bench-extension\n// @label Bench Extension\n// @versionCode 42\n// @versionName 1.0\n// @cover https://example.org/cover.png\n",
    );
    for i in 0..body_lines {
        source.push_str(&format!("const line{} = {};\n", i, i));
    }
    source
}

fn bench_parse_header(c: &mut Criterion) {
    let config = RepositoryConfig::default();
    let mut group = c.benchmark_group("parse_extension_header");

    for size in [10, 1_000, 10_000].iter() {
        let source = generate_source(*size);

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_extension_header(black_box(source.lines()), &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_header);
criterion_main!(benches);
