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

use crate::args::TpccBenchRunnerArgs;
use crate::defaults::{DEFAULT_TRANSACTIONS_PER_WORKER, DEFAULT_WORKERS};
use crate::error::RunnerError;
use std::num::NonZeroU32;
use std::path::PathBuf;

const WORKERS_FLAG: &str = "--workers";
const TRANSACTIONS_FLAG: &str = "--transactions";

/// What to run and how often. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    pub runs: u32,
    pub workers: NonZeroU32,
    pub transactions_per_worker: NonZeroU32,
    /// Benchmark arguments other than the worker and transaction counts, in
    /// their original order
    pub passthrough: Vec<String>,
}

impl RunConfiguration {
    /// Picks `--workers` and `--transactions` (separate or `=` joined value)
    /// out of `benchmark_args`; the last occurrence wins.
    pub fn from_benchmark_args(runs: u32, benchmark_args: &[String]) -> Result<Self, RunnerError> {
        let mut workers = DEFAULT_WORKERS;
        let mut transactions_per_worker = DEFAULT_TRANSACTIONS_PER_WORKER;
        let mut passthrough = Vec::new();

        let mut args = benchmark_args.iter();
        while let Some(arg) = args.next() {
            let (flag, inline_value) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_owned())),
                None => (arg.as_str(), None),
            };
            let target = match flag {
                WORKERS_FLAG => &mut workers,
                TRANSACTIONS_FLAG => &mut transactions_per_worker,
                _ => {
                    passthrough.push(arg.clone());
                    continue;
                }
            };
            let value = match inline_value {
                Some(value) => value,
                None => args
                    .next()
                    .cloned()
                    .ok_or_else(|| RunnerError::Usage(format!("{flag} requires a value")))?,
            };
            *target = parse_positive(flag, &value)?;
        }

        Ok(Self {
            runs,
            workers,
            transactions_per_worker,
            passthrough,
        })
    }

    /// Transactions executed by one run across all workers.
    pub fn total_transactions(&self) -> u64 {
        u64::from(self.workers.get()) * u64::from(self.transactions_per_worker.get())
    }
}

fn parse_positive(flag: &str, value: &str) -> Result<NonZeroU32, RunnerError> {
    value
        .parse::<NonZeroU32>()
        .map_err(|_| RunnerError::Usage(format!("{flag} expects a positive integer, got '{value}'")))
}

/// Filesystem locations used by the runner, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerPaths {
    pub working_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub staging_dir: Option<PathBuf>,
}

impl From<&TpccBenchRunnerArgs> for RunnerPaths {
    fn from(args: &TpccBenchRunnerArgs) -> Self {
        Self {
            working_dir: args.working_dir.clone(),
            backup_dir: args.backup_dir.clone(),
            staging_dir: args.staging_dir.clone(),
        }
    }
}
