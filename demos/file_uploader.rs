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

use std::path::PathBuf;

use clap::Parser;
use log::info;
use supabase_storage::storage::StorageClientBuilder;
use supabase_storage::storage::types::{BucketOptions, File, FileOptions, StorageApi};

/// Upload a file to a Supabase Storage bucket.
#[derive(Parser)]
struct Cli {
    /// Storage endpoint, for example https://<project>.supabase.co/storage/v1
    #[arg(long, env = "SUPABASE_STORAGE_URL")]
    url: String,
    /// Service or anon key of the project.
    #[arg(long, env = "SUPABASE_API_KEY")]
    api_key: String,
    /// Bucket to upload the file to (will be created if it doesn't exist)
    bucket: String,
    /// Object path to upload the file to.
    object: String,
    /// File to upload.
    file: PathBuf,
    /// Content type of the file.
    #[arg(long, default_value = "application/octet-stream")]
    content_type: String,
    /// Overwrite the object if it already exists.
    #[arg(long)]
    upsert: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let args = Cli::parse();

    let client = StorageClientBuilder::new(args.url.parse()?)
        .api_key(args.api_key)
        .build()?;

    match client.get_bucket(&args.bucket).build().send().await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            client
                .create_bucket(&args.bucket)
                .options(BucketOptions::builder().public(false).build())
                .build()
                .send()
                .await?;
            info!("created bucket '{}'", args.bucket);
        }
        Err(e) => return Err(e.into()),
    }

    let data = tokio::fs::read(&args.file).await?;
    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.object.clone());
    let file = File::new(file_name, data).with_content_type(args.content_type);

    let resp = client
        .from(&args.bucket)
        .upload(&args.object, file)
        .options(FileOptions::builder().upsert(args.upsert).build())
        .build()
        .send()
        .await?;

    info!("Uploaded file at {:?} as {}", args.file, resp.key());

    Ok(())
}
