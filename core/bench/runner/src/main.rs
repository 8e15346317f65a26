// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

mod app;
mod args;
mod config;
mod defaults;
mod error;

use anyhow::Result;
use app::TpccBenchRunnerApp;
use args::TpccBenchRunnerArgs;
use clap::Parser;
use clap::error::ErrorKind;
use config::RunConfiguration;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::Format},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const USAGE_EXIT_CODE: i32 = 1;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match TpccBenchRunnerArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(Format::default().with_thread_ids(true))
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .try_init()?;

    info!("Starting TpccBenchRunner with args: {:?}", args);

    let config = match RunConfiguration::from_benchmark_args(args.runs, &args.benchmark_args) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("error: {e}");
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    info!(
        "Runs: {}, workers: {}, transactions per worker: {}",
        config.runs, config.workers, config.transactions_per_worker
    );

    let app = TpccBenchRunnerApp::new(args, config);
    let res = app.run().await;
    if let Err(e) = &res {
        error!("Benchmark run failed: {:#}", e);
    }
    res
}
