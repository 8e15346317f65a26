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

use super::invoker::{BenchmarkInvoker, Invocation};
use super::snapshot::Snapshot;
use crate::config::{RunConfiguration, RunnerPaths};
use crate::error::RunnerError;
use bench_report::elapsed::parse_elapsed_time;
use bench_report::format_trial_line;
use bench_report::sample::{Sample, SampleSet};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialState {
    Initializing,
    Staging,
    Running(u32),
    Reporting,
    Done,
}

impl Display for TrialState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initializing => write!(f, "initializing"),
            Self::Staging => write!(f, "staging"),
            Self::Running(run) => write!(f, "running {run}"),
            Self::Reporting => write!(f, "reporting"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Runs the benchmark `runs` times in sequence, each time from the same clean
/// image, and collects the elapsed time of every run.
pub struct TrialRunner<I: BenchmarkInvoker> {
    invoker: I,
    paths: RunnerPaths,
    benchmark_bin: PathBuf,
    placement: String,
    state: TrialState,
}

impl<I: BenchmarkInvoker> TrialRunner<I> {
    pub fn new(invoker: I, paths: RunnerPaths, benchmark_bin: PathBuf, placement: String) -> Self {
        Self {
            invoker,
            paths,
            benchmark_bin,
            placement,
            state: TrialState::Initializing,
        }
    }

    pub fn state(&self) -> TrialState {
        self.state
    }

    fn transition(&mut self, state: TrialState) {
        info!("Trial runner: {} -> {}", self.state, state);
        self.state = state;
    }

    /// Leaves the runner in `Reporting` with the collected samples. Any failure
    /// aborts the loop and the samples gathered so far are dropped.
    pub async fn run(&mut self, config: &RunConfiguration) -> Result<SampleSet, RunnerError> {
        let mut samples = SampleSet::new();
        if config.runs == 0 {
            info!("No runs requested");
            self.transition(TrialState::Reporting);
            return Ok(samples);
        }

        self.transition(TrialState::Staging);
        let snapshot =
            Snapshot::stage(&self.paths.backup_dir, self.paths.staging_dir.as_deref()).await?;
        info!("Clean image staged in {}", snapshot.path().display());

        let invocation = Invocation::compose(&self.placement, &self.benchmark_bin, config);
        info!("Benchmark command: {}", invocation.command_line());

        let total_transactions = config.total_transactions();
        for run in 1..=config.runs {
            self.transition(TrialState::Running(run));
            let sample = match self.run_once(run, &snapshot, &invocation).await {
                Ok(sample) => sample,
                Err(e) => {
                    error!(
                        "Run {run} of {} failed, discarding {} collected sample(s)",
                        config.runs,
                        samples.len()
                    );
                    return Err(e);
                }
            };
            println!("{}", format_trial_line(run as usize, total_transactions, sample));
            samples.push(sample);
        }

        self.transition(TrialState::Reporting);
        Ok(samples)
    }

    pub fn finish(&mut self) {
        self.transition(TrialState::Done);
    }

    async fn run_once(
        &self,
        run: u32,
        snapshot: &Snapshot,
        invocation: &Invocation,
    ) -> Result<Sample, RunnerError> {
        snapshot.restore(&self.paths.working_dir).await?;
        let output = self.invoker.invoke(invocation).await?;
        if !output.success() {
            return Err(RunnerError::BenchmarkFailed {
                run,
                status: output.status_description(),
                stderr: output.stderr.trim().to_owned(),
            });
        }
        parse_elapsed_time(&output.stdout)
            .map_err(|source| RunnerError::ContractViolation { run, source })
    }
}
