// Performance benchmarks for the recx recommendation engine
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use recx_core::{RecommendationModel, Recommender, UserItemMatrix, UserSimilarityMatrix};
use std::sync::Arc;

fn synthetic_model(users: u64, items: u64, clicks_per_user: usize) -> RecommendationModel {
    let mut rng = StdRng::seed_from_u64(42);

    let mut interactions = UserItemMatrix::new();
    for user in 1..=users {
        for _ in 0..clicks_per_user {
            interactions.insert(user, rng.random_range(1..=items), 1.0);
        }
    }

    let mut similarities = UserSimilarityMatrix::new();
    for user in 1..=users {
        for other in 1..=users {
            let score = if user == other {
                1.0
            } else {
                rng.random::<f32>()
            };
            similarities.insert(user, other, score);
        }
    }

    RecommendationModel::new(interactions, similarities)
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let engine = Recommender::new(Arc::new(synthetic_model(500, 2_000, 20)));

    group.bench_function("top5_500_users", |b| {
        let mut user = 0u64;
        b.iter(|| {
            user = user % 500 + 1;
            black_box(engine.recommend(user, 5).unwrap())
        });
    });

    group.bench_function("top50_500_users", |b| {
        let mut user = 0u64;
        b.iter(|| {
            user = user % 500 + 1;
            black_box(engine.recommend(user, 50).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_recommend);
criterion_main!(benches);
