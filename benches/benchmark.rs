use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::iter::zip;
use std::path::Path;

use csv::Reader;

use hp_fold::{
    bounds::Bound,
    fold,
    lattice::{Hexagonal, Lattice, Square},
    pattern::Pattern,
    FoldOptions,
};

fn load_patterns(dataset: &str) -> Vec<Pattern> {
    let path = Path::new("data").join(dataset).join("max-score.csv");
    let mut reader =
        Reader::from_path(path).expect(&format!("{dataset}/max-score.csv does not exist."));
    reader
        .records()
        .map(|r| {
            r.expect("max-score.csv is malformed.")[0]
                .parse()
                .expect("invalid reference pattern")
        })
        .collect()
}

fn bench_dataset<L: Lattice>(c: &mut Criterion, dataset: &str, max_len: usize) {
    let mut group = c.benchmark_group(format!("reference_{dataset}"));

    let bounds = [vec![Bound::Contact], Bound::all()];
    let bound_strs = ["contactbound", "allbounds"];

    let patterns: Vec<Pattern> = load_patterns(dataset)
        .into_iter()
        .filter(|p| p.len() <= max_len)
        .collect();

    for (bound, bound_str) in zip(&bounds, &bound_strs) {
        let options = FoldOptions::new().bounds(bound);
        group.bench_with_input(BenchmarkId::new(dataset, bound_str), &options, |b, options| {
            b.iter(|| {
                for pattern in &patterns {
                    fold::<L>(pattern, options).expect("fold failed");
                }
            });
        });
    }

    group.finish();
}

pub fn reference_patterns(c: &mut Criterion) {
    bench_dataset::<Square>(c, "square", 12);
    bench_dataset::<Hexagonal>(c, "hexagonal", 12);
}

criterion_group! {
    name = benchmark;
    config = Criterion::default().sample_size(20);
    targets = reference_patterns
}
criterion_main!(benchmark);
