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

use clap::Parser;
use clap::builder::TypedValueParser;
use std::num::NonZeroU64;
use std::path::PathBuf;

pub const DEFAULT_CORPUS: &str = "results/elapsed.txt";
pub const DEFAULT_KEY_SEGMENTS: usize = 2;

/// Summarizes elapsed times of earlier benchmark runs per group.
///
/// The corpus is either a file of `label:elapsed time=<seconds> sec` lines
/// (as printed by `grep -H`) or a directory of benchmark logs, in which case
/// each file name is the label. The first KEY_SEGMENTS `_`-separated parts of
/// the label's file name form the group.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
pub struct TpccBenchSummarizerArgs {
    /// Factors multiplied into the number of transactions per run, e.g. `12 20000`
    #[arg(required = true, num_args = 1..)]
    pub factors: Vec<NonZeroU64>,

    /// File or directory with historical results
    #[arg(long, env = "TPCC_BENCH_CORPUS", default_value = DEFAULT_CORPUS)]
    pub corpus: PathBuf,

    /// Number of label segments forming the group
    #[arg(long, default_value_t = DEFAULT_KEY_SEGMENTS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub key_segments: usize,

    /// Log level (error|warn|info|debug|trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl TpccBenchSummarizerArgs {
    /// Product of all factors, `None` on overflow.
    pub fn total_transactions(&self) -> Option<u64> {
        self.factors
            .iter()
            .try_fold(1u64, |total, factor| total.checked_mul(factor.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<TpccBenchSummarizerArgs, clap::Error> {
        TpccBenchSummarizerArgs::try_parse_from(
            std::iter::once("tpcc-bench-summarizer").chain(args.iter().copied()),
        )
    }

    #[test]
    fn should_multiply_factors() {
        let args = parse(&["12", "20000"]).unwrap();
        assert_eq!(args.total_transactions(), Some(240_000));
        assert_eq!(args.key_segments, DEFAULT_KEY_SEGMENTS);
    }

    #[test]
    fn should_detect_overflow() {
        let args = parse(&["18446744073709551615", "2"]).unwrap();
        assert_eq!(args.total_transactions(), None);
    }

    #[test]
    fn should_require_positive_factors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["0"]).is_err());
        assert!(parse(&["abc"]).is_err());
        assert!(parse(&["100", "--key-segments", "0"]).is_err());
    }
}
