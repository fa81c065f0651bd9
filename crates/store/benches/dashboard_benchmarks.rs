use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use minierp_core::FixedClock;
use minierp_events::InMemoryEventBus;
use minierp_finance::NewExpense;
use minierp_hr::NewEmployee;
use minierp_inventory::{NewProduct, StockAlert};
use minierp_sales::{NewSale, SaleStatus};
use minierp_store::{EntityStore, SaleProcessor};

fn populated_store(size: usize) -> EntityStore {
    let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    let mut store = EntityStore::new(clock);

    for i in 0..size {
        store.add_employee(NewEmployee {
            name: format!("Employee {i}"),
            email: format!("e{i}@company.com"),
            position: "Staff".to_string(),
            salary: 30000 + (i as u64 % 40) * 1000,
        });
        store.add_product(NewProduct {
            name: format!("Product {i}"),
            category: "General".to_string(),
            stock: (i % 60) as u32,
            price: 100 + i as u64,
            reorder_level: (i % 25) as u32,
        });
        let status = match i % 3 {
            0 => SaleStatus::Pending,
            1 => SaleStatus::Processing,
            _ => SaleStatus::Completed,
        };
        store.add_sale(NewSale::new("Customer", format!("Product {i}"), 1, status), 100 + i as u64);
        store.add_expense(NewExpense::new("Misc", 50 + i as u64, "bench"));
    }

    store
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");

    for size in [100usize, 1_000, 10_000] {
        let store = populated_store(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("stats", size), &store, |b, store| {
            b.iter(|| black_box(store.dashboard().stats()));
        });

        group.bench_with_input(BenchmarkId::new("low_stock_products", size), &store, |b, store| {
            b.iter(|| black_box(store.dashboard().low_stock_products()));
        });

        group.bench_with_input(BenchmarkId::new("top_products_5", size), &store, |b, store| {
            b.iter(|| black_box(store.dashboard().top_products(5).len()));
        });
    }

    group.finish();
}

fn bench_sale_processor(c: &mut Criterion) {
    let processor = SaleProcessor::new(Arc::new(InMemoryEventBus::<StockAlert>::new()));

    c.bench_function("create_sale_last_product_of_1000", |b| {
        let mut store = populated_store(1_000);
        b.iter(|| {
            let draft = NewSale::new("Customer", "Product 999", 1, SaleStatus::Completed);
            black_box(processor.create_sale(&mut store, draft).is_ok())
        });
    });
}

criterion_group!(benches, bench_dashboard, bench_sale_processor);
criterion_main!(benches);
