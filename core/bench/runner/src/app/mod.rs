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

mod invoker;
mod snapshot;
mod trial_runner;

use invoker::{Invocation, ProcessInvoker};
use trial_runner::TrialRunner;

use crate::args::TpccBenchRunnerArgs;
use crate::config::{RunConfiguration, RunnerPaths};
use anyhow::{Context, Result};
use bench_report::report::RunReport;
use bench_report::stats::Statistics;
use bench_report::summary::ThroughputSummary;
use tracing::{debug, info};

pub struct TpccBenchRunnerApp {
    args: TpccBenchRunnerArgs,
    config: RunConfiguration,
}

impl TpccBenchRunnerApp {
    pub fn new(args: TpccBenchRunnerArgs, config: RunConfiguration) -> Self {
        Self { args, config }
    }

    pub async fn run(&self) -> Result<()> {
        let mut runner = TrialRunner::new(
            ProcessInvoker,
            RunnerPaths::from(&self.args),
            self.args.benchmark_bin.clone(),
            self.args.placement.clone(),
        );

        let samples = runner
            .run(&self.config)
            .await
            .context("Benchmark run aborted")?;

        match Statistics::compute(&samples) {
            Some(stats) => {
                let summary = ThroughputSummary::from_statistics(
                    &stats,
                    self.config.total_transactions(),
                    Some(self.config.workers),
                );
                summary.print_summary();

                if let Some(path) = &self.args.json_output {
                    let report = RunReport {
                        command: Invocation::compose(
                            &self.args.placement,
                            &self.args.benchmark_bin,
                            &self.config,
                        )
                        .command_line(),
                        elapsed_times: samples,
                        summary,
                    };
                    report
                        .dump_to_json(path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Report written to {}", path.display());
                }
            }
            None => info!("No samples collected, nothing to report"),
        }

        runner.finish();
        debug!("Trial runner finished in state: {}", runner.state());
        Ok(())
    }
}
