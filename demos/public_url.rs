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

use clap::Parser;
use supabase_storage::storage::StorageClient;
use supabase_storage::storage::types::{ResizeMode, TransformOptions};

/// Print the public URL of an object, optionally resized.
#[derive(Parser)]
struct Cli {
    /// Storage endpoint, for example https://<project>.supabase.co/storage/v1
    #[arg(long, env = "SUPABASE_STORAGE_URL")]
    url: String,
    bucket: String,
    object: String,
    /// Ask the browser to download the object under this name.
    #[arg(long)]
    download: Option<String>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Keep the whole image inside the box instead of cropping it.
    #[arg(long)]
    contain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Cli::parse();

    // Public URLs need no credentials.
    let client = StorageClient::new(args.url.parse()?, Vec::<(String, String)>::new())?;
    let files = client.from(args.bucket);

    let transform = (args.width.is_some() || args.height.is_some()).then(|| TransformOptions {
        width: args.width,
        height: args.height,
        resize: if args.contain {
            ResizeMode::Contain
        } else {
            ResizeMode::Cover
        },
        ..Default::default()
    });

    let url = match (args.download, transform) {
        (Some(name), Some(t)) => files
            .get_public_url(args.object)
            .download(true)
            .file_name(name)
            .transform(t)
            .build()
            .url(),
        (Some(name), None) => files
            .get_public_url(args.object)
            .download(true)
            .file_name(name)
            .build()
            .url(),
        (None, Some(t)) => files.get_public_url(args.object).transform(t).build().url(),
        (None, None) => files.get_public_url(args.object).build().url(),
    };

    println!("{url}");
    Ok(())
}
