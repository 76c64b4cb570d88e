// Supabase Storage Rust SDK
// Copyright 2025 The supabase-storage-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use supabase_storage::storage::StorageClient;
use supabase_storage::storage::types::TransformOptions;

fn bench_public_url(c: &mut Criterion) {
    let client = StorageClient::new(
        "https://project.supabase.co/storage/v1".parse().unwrap(),
        [("apikey", "bench")],
    )
    .unwrap();
    let files = client.from("photos");

    c.bench_function("get_public_url plain", |b| {
        b.iter(|| {
            files
                .get_public_url(black_box("summer 2024/beach.jpg"))
                .build()
                .url()
        })
    });

    c.bench_function("get_public_url transform", |b| {
        b.iter(|| {
            files
                .get_public_url(black_box("summer 2024/beach.jpg"))
                .download(true)
                .file_name("beach.jpg")
                .transform(TransformOptions::builder().width(300).height(200).build())
                .build()
                .url()
        })
    });
}

criterion_group!(benches, bench_public_url);
criterion_main!(benches);
