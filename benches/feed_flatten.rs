// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for flattening the paginated feed into the display sequence.
//!
//! Flattening runs on every gallery render, so it must stay cheap even for a
//! long browsing session with many fetched pages.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::api::models::{ImageRecord, Page};
use iced_gallery::feed::Feed;
use std::hint::black_box;

fn feed_with(pages: usize, records_per_page: usize) -> Feed {
    let mut feed = Feed::new();
    let request = feed.start_initial_load().expect("idle feed");
    let mut generation = request.generation;

    for page_index in 0..pages {
        let data = (0..records_per_page)
            .map(|record_index| ImageRecord {
                id: format!("{page_index}-{record_index}"),
                title: format!("Image {page_index}-{record_index}"),
                description: "benchmark record".to_string(),
                url: format!("https://img.example/{page_index}/{record_index}.png"),
                ts: 1_696_000_000_000_000 + (page_index * records_per_page + record_index) as i64,
            })
            .collect();
        let terminal = page_index + 1 == pages;
        let page = Page {
            data,
            after: if terminal {
                None
            } else {
                Some(format!("cursor-{page_index}"))
            },
        };

        feed.resolve(generation, Ok(page));
        if !terminal {
            let request = feed.start_load_more().expect("cursor present");
            generation = request.generation;
        }
    }

    feed
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_flatten");

    for (pages, per_page) in [(1, 20), (10, 20), (50, 100)] {
        let feed = feed_with(pages, per_page);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{pages}x{per_page}")),
            &feed,
            |b, feed| {
                b.iter(|| {
                    let flattened = black_box(feed).flatten();
                    black_box(flattened.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
