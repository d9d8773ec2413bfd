// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for reel navigation operations.
//!
//! Measures the performance of:
//! - Building a reel from a parsed feed
//! - Index updates while paging
//! - Photo removal with index clamping

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::feed::{Photo, PhotoReel};
use std::hint::black_box;

const REEL_SIZE: usize = 1_000;

fn sample_photos(count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| Photo {
            id: format!("photo-{i}"),
            image_url: format!("https://photos.example/{i}.jpg"),
            activity: "running".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 7, 17, 9, 30, 0).unwrap(),
        })
        .collect()
}

/// Benchmark reel construction from an already-parsed feed.
fn bench_build_reel(c: &mut Criterion) {
    let mut group = c.benchmark_group("reel_navigation");

    let photos = sample_photos(REEL_SIZE);
    group.bench_function("build_reel", |b| {
        b.iter(|| {
            let reel = PhotoReel::new(photos.clone(), REEL_SIZE / 2);
            black_box(&reel);
        });
    });

    group.finish();
}

/// Benchmark index updates across the whole reel (a full paging sweep).
fn bench_paging_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reel_navigation");

    let reel = PhotoReel::new(sample_photos(REEL_SIZE), 0);
    group.bench_function("paging_sweep", |b| {
        b.iter(|| {
            let mut reel = reel.clone();
            for index in 0..REEL_SIZE {
                reel.set_current_index(index);
                black_box(reel.current());
            }
        });
    });

    group.finish();
}

/// Benchmark removal of the current photo, including index clamping.
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("reel_navigation");

    let reel = PhotoReel::new(sample_photos(REEL_SIZE), REEL_SIZE - 1);
    group.bench_function("remove_last_photo", |b| {
        b.iter(|| {
            let mut reel = reel.clone();
            let id = format!("photo-{}", REEL_SIZE - 1);
            black_box(reel.remove(&id));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build_reel, bench_paging_sweep, bench_remove);
criterion_main!(benches);
