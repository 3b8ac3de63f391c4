// Copyright © 2024 DocNav. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for validation and request-time sidebar lookups.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use docnav::{is_active, resolve_sidebar, validate, RawSiteConfig};
use std::hint::black_box;

const SITE: &str = include_str!("../tests/fixtures/site.json");

fn bench_validate(c: &mut Criterion) {
    let raw = RawSiteConfig::from_json_str(SITE).unwrap();
    let _ = c.bench_function("validate site", |b| {
        b.iter(|| validate(black_box(&raw)).unwrap())
    });
}

fn bench_resolve(c: &mut Criterion) {
    let raw = RawSiteConfig::from_json_str(SITE).unwrap();
    let config = validate(&raw).unwrap().config;
    let paths = [
        "/",
        "/sdk/usage/one-click-trading",
        "/meta-infra/gas-policies",
        "/wallet",
        "/unknown/page",
    ];

    let _ = c.bench_function("resolve sidebar", |b| {
        b.iter(|| {
            for path in &paths {
                let _ = black_box(resolve_sidebar(&config, black_box(path)));
            }
        })
    });

    let _ = c.bench_function("active entries", |b| {
        b.iter(|| {
            let items = resolve_sidebar(&config, "/sdk/usage/sponsoring-gas");
            items
                .iter()
                .filter(|item| item.contains_active("/sdk/usage/sponsoring-gas"))
                .count()
                + config
                    .top_nav()
                    .iter()
                    .filter(|entry| is_active(*entry, "/sdk/usage/sponsoring-gas"))
                    .count()
        })
    });
}

criterion_group!(benches, bench_validate, bench_resolve);
criterion_main!(benches);
