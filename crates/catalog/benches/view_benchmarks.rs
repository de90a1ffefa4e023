//! Benchmarks for view derivation over realistic catalog sizes.

use chrono::Utc;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use idbazaar_catalog::visible_items;
use idbazaar_core::{Item, ItemId, Rank};

fn catalog(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            id: ItemId::new(format!("it-{i}")),
            title: format!("listing {i}"),
            description: "seasoned account".to_string(),
            price: ((i * 37) % 2000) as f64,
            image: "img".to_string(),
            level: (i % 80) as u32,
            skins: vec!["Glacier M416".to_string()],
            rank: Rank::Platinum,
            kd: 2.0,
            matches: 500,
            available: i % 5 != 0,
            created_at: Utc::now(),
        })
        .collect()
}

fn bench_visible_items(c: &mut Criterion) {
    let items = catalog(1024);

    c.bench_function("visible_items/unfiltered", |b| {
        b.iter(|| visible_items(black_box(&items), black_box(0.0)))
    });

    c.bench_function("visible_items/budget_1000", |b| {
        b.iter(|| visible_items(black_box(&items), black_box(1000.0)))
    });
}

criterion_group!(benches, bench_visible_items);
criterion_main!(benches);
