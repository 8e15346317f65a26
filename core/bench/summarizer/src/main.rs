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

mod aggregator;
mod args;

use aggregator::ResultAggregator;
use anyhow::{Context, Result};
use args::TpccBenchSummarizerArgs;
use bench_report::group_csv::write_group_csv;
use bench_report::stats::Statistics;
use bench_report::summary::ThroughputSummary;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE_EXIT_CODE: i32 = 1;

fn main() -> Result<()> {
    let args = match TpccBenchSummarizerArgs::try_parse() {
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
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;

    let Some(total_transactions) = args.total_transactions() else {
        error!("Transaction count overflows: {:?}", args.factors);
        eprintln!("error: product of {:?} does not fit in 64 bits", args.factors);
        std::process::exit(USAGE_EXIT_CODE);
    };
    info!(
        "Summarizing {} with {} transactions per run",
        args.corpus.display(),
        total_transactions
    );

    let groups = ResultAggregator::new(args.key_segments)
        .load(&args.corpus)
        .with_context(|| format!("Failed to load results from {}", args.corpus.display()))?;

    let mut rows = Vec::with_capacity(groups.len());
    for (key, samples) in &groups {
        let Some(stats) = Statistics::compute(samples) else {
            warn!("Skipping empty group {key}");
            continue;
        };
        rows.push((
            key,
            ThroughputSummary::from_statistics(&stats, total_transactions, None),
        ));
    }

    write_group_csv(
        std::io::stdout().lock(),
        rows.iter().map(|(key, summary)| (*key, summary)),
    )
    .context("Failed to write summary")?;

    Ok(())
}
