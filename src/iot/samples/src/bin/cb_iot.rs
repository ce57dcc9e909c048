// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lists, inspects, creates, and deletes ClearBlade IoT Core registries and
//! devices.

use anyhow::Result;
use clap::Parser;
use cloud_iot_v1::client::DeviceManager;
use iot_samples::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;
    let _guard = iot_samples::enable_tracing(args.verbose);
    tracing::info!("Configuration: {args:?}");

    let mut builder = DeviceManager::builder();
    if let Some(path) = &args.credentials {
        builder = builder.with_credentials_file(path);
    }
    if args.verbose {
        builder = builder.with_tracing();
    }
    let client = builder.build().await?;
    iot_samples::run(&client, &args).await
}
