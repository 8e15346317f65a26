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

//! Sample statistics over elapsed times.
//!
//! Everything is computed in the time domain first and only then mapped to
//! transactions per second. Averaging per-run rates directly would overweight
//! the fast runs; inverting the mean time gives the harmonic mean of the rates.

#![allow(clippy::cast_precision_loss)]

use crate::types::interval::TimeInterval;
use crate::types::sample::SampleSet;
use serde::Serialize;

/// Two-sided 95% quantile of the standard normal distribution.
pub const Z_95: f64 = 1.96;

/// Arithmetic mean of the elapsed times, `None` for an empty set.
pub fn mean(samples: &SampleSet) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.times().sum::<f64>() / samples.len() as f64)
}

/// Sample variance with Bessel's correction, `None` below two samples.
pub fn variance(samples: &SampleSet) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let mean = mean(samples)?;
    let sum_of_squares = samples
        .times()
        .map(|t| {
            let diff = t - mean;
            diff * diff
        })
        .sum::<f64>();
    Some(sum_of_squares / (samples.len() - 1) as f64)
}

pub fn std_dev(samples: &SampleSet) -> Option<f64> {
    variance(samples).map(f64::sqrt)
}

/// Normal-approximation 95% interval on the mean time: `mean ± 1.96 * s / √n`.
///
/// Never fabricates an interval for fewer than two samples.
pub fn confidence_interval_95(samples: &SampleSet) -> Option<TimeInterval> {
    let mean = mean(samples)?;
    let std_dev = std_dev(samples)?;
    let half_width = Z_95 * std_dev / (samples.len() as f64).sqrt();
    Some(TimeInterval {
        lower: mean - half_width,
        upper: mean + half_width,
    })
}

/// Converts a time (a mean or a bound) into transactions per second.
pub fn throughput(total_transactions: u64, seconds: f64) -> f64 {
    total_transactions as f64 / seconds
}

/// Time-domain statistics of one sample set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub samples: usize,
    pub mean_time: f64,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub confidence_interval: Option<TimeInterval>,
}

impl Statistics {
    /// Returns `None` when there is nothing to summarize.
    pub fn compute(samples: &SampleSet) -> Option<Self> {
        let mean_time = mean(samples)?;
        let variance = variance(samples);
        Some(Self {
            samples: samples.len(),
            mean_time,
            variance,
            std_dev: variance.map(f64::sqrt),
            confidence_interval: confidence_interval_95(samples),
        })
    }
}
