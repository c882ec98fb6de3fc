use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genre_recommender::{similarity, Catalog, Item, RecommendConfig, ScoringMode, Vocabulary};

const GENRES: [&str; 12] = [
    "Action", "Adventure", "Animation", "Comedy", "Crime", "Documentary",
    "Drama", "Fantasy", "Horror", "Romance", "Sci-Fi", "Thriller",
];

fn build_catalog(n: u64) -> Catalog {
    let vocab = Vocabulary::try_from_labels(GENRES).expect("distinct genres");
    let items = (0..n)
        .map(|i| {
            // pseudo-random genre mask per item
            let mask = (i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40) as usize;
            let genres: Vec<&str> = GENRES
                .iter()
                .enumerate()
                .filter(|(g, _)| (mask >> g) & 1 == 1)
                .map(|(_, name)| *name)
                .collect();
            Item::new(i, format!("movie {i}"), &genres)
        })
        .collect();
    Catalog::new(items, vocab).expect("unique keys")
}

fn recommend_benchmark(c: &mut Criterion) {
    let catalog = build_catalog(50_000);
    let sequential = RecommendConfig::default().with_top_n(10);
    let parallel = sequential.clone().with_scoring(ScoringMode::Parallel);

    c.bench_function("similarity", |b| {
        let a = [1.0_f32, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0];
        let v = [0.0_f32, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        b.iter(|| similarity(black_box(&a), black_box(&v)));
    });

    c.bench_function("recommend_sequential", |b| {
        b.iter(|| catalog.recommend(Some(black_box(&7)), &sequential).map(|r| r.is_empty()));
    });

    c.bench_function("recommend_parallel", |b| {
        b.iter(|| catalog.recommend(Some(black_box(&7)), &parallel).map(|r| r.is_empty()));
    });
}

criterion_group!(benches, recommend_benchmark);
criterion_main!(benches);
