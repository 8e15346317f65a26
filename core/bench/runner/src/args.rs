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

use crate::defaults::{
    DEFAULT_BACKUP_DIR, DEFAULT_BENCHMARK_BINARY, DEFAULT_LOG_LEVEL, DEFAULT_PLACEMENT,
    DEFAULT_WORKING_DIR,
};
use clap::Parser;
use std::path::PathBuf;

/// Runs the TPC-C benchmark repeatedly from a clean database image and
/// reports mean throughput with a 95% confidence interval.
///
/// Runner options go before RUNS. Everything after RUNS is handed to the
/// benchmark; `--workers` and `--transactions` are read from there too.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
pub struct TpccBenchRunnerArgs {
    /// Number of benchmark runs
    #[arg(value_parser = parse_run_count)]
    pub runs: u32,

    /// Benchmark arguments, passed through verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub benchmark_args: Vec<String>,

    /// Path to the benchmark executable
    #[arg(long, env = "TPCC_BENCH_BINARY", default_value = DEFAULT_BENCHMARK_BINARY)]
    pub benchmark_bin: PathBuf,

    /// Command prefix placing the benchmark on cores and memory nodes, empty to disable
    #[arg(
        long,
        env = "TPCC_BENCH_PLACEMENT",
        default_value = DEFAULT_PLACEMENT,
        allow_hyphen_values = true
    )]
    pub placement: String,

    /// Directory the benchmark works on, its `data` and `log` are replaced before every run
    #[arg(long, env = "TPCC_BENCH_WORKING_DIR", default_value = DEFAULT_WORKING_DIR)]
    pub working_dir: PathBuf,

    /// Directory holding the clean `data` and `log` image
    #[arg(long, env = "TPCC_BENCH_BACKUP_DIR", default_value = DEFAULT_BACKUP_DIR)]
    pub backup_dir: PathBuf,

    /// Where to keep the staged copy of the clean image (system temp dir by default)
    #[arg(long, env = "TPCC_BENCH_STAGING_DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Write the summary and per-run elapsed times as JSON to this file
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Log level (error|warn|info|debug|trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

fn parse_run_count(value: &str) -> Result<u32, String> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "run count must be a non-negative integer, got '{value}'"
        ));
    }
    value
        .parse::<u32>()
        .map_err(|e| format!("run count '{value}' is out of range: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_digits_only() {
        assert_eq!(parse_run_count("0"), Ok(0));
        assert_eq!(parse_run_count("15"), Ok(15));
        assert!(parse_run_count("").is_err());
        assert!(parse_run_count("-3").is_err());
        assert!(parse_run_count("+3").is_err());
        assert!(parse_run_count("3.0").is_err());
        assert!(parse_run_count("ten").is_err());
    }

    #[test]
    fn should_keep_benchmark_arguments_after_run_count() {
        let args = TpccBenchRunnerArgs::try_parse_from([
            "tpcc-bench-runner",
            "--working-dir",
            "/tmp/work",
            "5",
            "--workers",
            "4",
            "--nolock",
        ])
        .unwrap();
        assert_eq!(args.runs, 5);
        assert_eq!(args.working_dir, PathBuf::from("/tmp/work"));
        assert_eq!(args.benchmark_args, vec!["--workers", "4", "--nolock"]);
    }

    #[test]
    fn should_fail_without_run_count() {
        assert!(TpccBenchRunnerArgs::try_parse_from(["tpcc-bench-runner"]).is_err());
        assert!(TpccBenchRunnerArgs::try_parse_from(["tpcc-bench-runner", "many"]).is_err());
    }
}
