// benches/filter.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use universal_cart::cart::{cart_totals, filter_products};
use universal_cart::model::{FilterOptions, Product, SortBy, SortOrder};

fn synthetic(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| Product {
            id: Some(format!("id{i}")),
            name: format!("Product {}", n - i),
            price: format!("${}.{:02}", i % 500, i % 100),
            description: Some(format!("Item number {i} from the synthetic shop")),
            url: format!("https://shop{}.test/p/{i}", i % 7),
            source: format!("shop{}.test", i % 7),
            category: Some(format!("Cat{}", i % 5)),
            added_at: Some(format!("2026-01-{:02}T10:00:00.000Z", 1 + i % 28)),
            quantity: Some(1 + (i % 3) as u32),
            in_wishlist: Some(i % 4 == 0),
            ..Product::default()
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let products = synthetic(2_000);

    let popup = FilterOptions { show_wishlist: Some(false), ..FilterOptions::popup_default() };
    c.bench_function("filter_popup_default", |b| {
        b.iter(|| black_box(filter_products(black_box(&products), &popup).len()))
    });

    let heavy = FilterOptions {
        category: Some("Cat2".into()),
        price_range: Some((10.0, 400.0)),
        search_query: Some("synthetic".into()),
        sort_by: Some(SortBy::Price),
        sort_order: Some(SortOrder::Asc),
        ..FilterOptions::default()
    };
    c.bench_function("filter_all_steps_price_sort", |b| {
        b.iter(|| black_box(filter_products(black_box(&products), &heavy).len()))
    });

    c.bench_function("cart_totals", |b| {
        b.iter(|| black_box(cart_totals(black_box(&products))))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
