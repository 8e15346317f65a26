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

use crate::stats::{Statistics, throughput};
use crate::types::interval::{RateInterval, TimeInterval};
use crate::utils::{round_float, round_optional_float};
use serde::Serialize;
use std::num::NonZeroU32;

/// Statistics of one sample set expressed in transactions per second.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThroughputSummary {
    /// Number of samples the summary was computed from
    pub runs: usize,

    /// Transactions executed by one run across all workers
    pub total_transactions: u64,

    /// Parallelism of the benchmark, unknown for historical results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<NonZeroU32>,

    /// Arithmetic mean of the elapsed times in seconds
    #[serde(serialize_with = "round_float")]
    pub mean_time_secs: f64,

    /// Harmonic mean of the per-run rates
    #[serde(serialize_with = "round_float")]
    pub mean_tps: f64,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "round_optional_float"
    )]
    pub mean_tps_per_worker: Option<f64>,

    /// 95% interval on the mean time, only with at least two runs
    pub time_interval: Option<TimeInterval>,

    /// Same interval in rate space, with the bounds swapped accordingly
    pub tps_interval: Option<RateInterval>,
}

impl ThroughputSummary {
    pub fn from_statistics(
        stats: &Statistics,
        total_transactions: u64,
        workers: Option<NonZeroU32>,
    ) -> Self {
        let mean_tps = throughput(total_transactions, stats.mean_time);
        Self {
            runs: stats.samples,
            total_transactions,
            workers,
            mean_time_secs: stats.mean_time,
            mean_tps,
            mean_tps_per_worker: workers.map(|w| mean_tps / f64::from(w.get())),
            time_interval: stats.confidence_interval,
            tps_interval: stats
                .confidence_interval
                .map(|interval| interval.to_throughput(total_transactions)),
        }
    }
}
