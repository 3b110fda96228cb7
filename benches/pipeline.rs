//! Benchmarks for the filter/sort/render pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};

use booklog::{
    BookRecord, Period, RenderOptions, SortOrder, TimeFilter, ViewState, apply_view, parse_books,
    render_list_html,
};

const BOOKS_JSON: &[u8] = include_bytes!("../tests/fixtures/books.json");

/// A reading log a few years long, built from the fixture titles.
fn sample_books(count: usize) -> Vec<BookRecord> {
    let seed = parse_books(BOOKS_JSON).unwrap();
    (0..count)
        .map(|i| {
            let mut book = seed[i % seed.len()].clone();
            let year = 2020 + (i / 365) as i32;
            let month = (i % 12) as u32 + 1;
            let day = (i % 28) as u32 + 1;
            book.date = format!("{year}/{month:02}/{day:02}");
            book
        })
        .collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_books", |b| {
        b.iter(|| parse_books(black_box(BOOKS_JSON)).unwrap());
    });
}

fn bench_apply_view(c: &mut Criterion) {
    let books = sample_books(2000);
    let mut group = c.benchmark_group("apply_view");

    group.bench_function("all_date_desc", |b| {
        let view = ViewState::new(TimeFilter::All, SortOrder::DateDesc);
        b.iter(|| apply_view(black_box(&books), &view, today()));
    });

    group.bench_function("this_year_rating_desc", |b| {
        let view = ViewState::new(TimeFilter::ThisYear, SortOrder::RatingDesc);
        b.iter(|| apply_view(black_box(&books), &view, today()));
    });

    group.bench_function("specific_period", |b| {
        let view = ViewState::new(TimeFilter::SpecificPeriod, SortOrder::DateAsc)
            .with_period(Period::new(2022, 3).unwrap());
        b.iter(|| apply_view(black_box(&books), &view, today()));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let books = sample_books(500);
    let options = RenderOptions::default();
    c.bench_function("render_list_html", |b| {
        b.iter(|| render_list_html(black_box(&books), &options));
    });
}

criterion_group!(benches, bench_parse, bench_apply_view, bench_render);
criterion_main!(benches);
