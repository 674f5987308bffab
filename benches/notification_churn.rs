// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification lifecycle operations.
//!
//! Measures the performance of:
//! - Showing a burst of notifications
//! - Ticking a full overlay through every phase
//! - Resolving relative widths

use criterion::{criterion_group, criterion_main, Criterion};
use popup_notifications::domain::notification::{resolve_width, WidthSpec};
use popup_notifications::notifications::{NotificationArgs, NotificationManager};
use std::hint::black_box;
use std::time::{Duration, Instant};

const BURST: usize = 64;

fn filled_manager() -> NotificationManager {
    let mut manager = NotificationManager::new();
    for i in 0..BURST {
        manager
            .show_info(NotificationArgs::text(format!("notification {i}")))
            .unwrap();
    }
    manager
}

/// Benchmark showing a burst of notifications.
fn bench_show_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("show_burst", |b| {
        b.iter(|| black_box(filled_manager()));
    });

    group.finish();
}

/// Benchmark one late tick that runs every notification to removal.
fn bench_tick_to_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("tick_to_empty", |b| {
        b.iter_batched(
            filled_manager,
            |mut manager| {
                manager.tick(Instant::now() + Duration::from_secs(60));
                black_box(manager.is_empty());
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark width resolution.
fn bench_resolve_width(c: &mut Criterion) {
    let spec = WidthSpec::from("90%");

    c.bench_function("resolve_width", |b| {
        b.iter(|| resolve_width(Some(black_box(&spec)), black_box(1280.0)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_show_burst,
    bench_tick_to_empty,
    bench_resolve_width
);
criterion_main!(benches);
