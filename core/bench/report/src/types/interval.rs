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

use crate::stats::throughput;
use crate::utils::round_float;
use serde::Serialize;

/// Bounds of the 95% confidence interval on the mean elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeInterval {
    #[serde(serialize_with = "round_float")]
    pub lower: f64,
    #[serde(serialize_with = "round_float")]
    pub upper: f64,
}

/// Bounds of a confidence interval expressed in transactions per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateInterval {
    #[serde(serialize_with = "round_float")]
    pub lower: f64,
    #[serde(serialize_with = "round_float")]
    pub upper: f64,
}

impl TimeInterval {
    /// Maps the interval into rate space.
    ///
    /// Rate is a decreasing function of time, so the shortest time gives the
    /// highest rate and the bounds swap. A lower time bound at or below zero
    /// leaves the rate unbounded from above.
    pub fn to_throughput(&self, total_transactions: u64) -> RateInterval {
        let upper = if self.lower > 0.0 {
            throughput(total_transactions, self.lower)
        } else {
            f64::INFINITY
        };
        RateInterval {
            lower: throughput(total_transactions, self.upper),
            upper,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_swap_bounds_when_converting_to_throughput() {
        let interval = TimeInterval {
            lower: 8.0,
            upper: 10.0,
        };
        let rates = interval.to_throughput(1000);
        assert_eq!(rates.lower, 100.0);
        assert_eq!(rates.upper, 125.0);
        assert!(rates.lower <= rates.upper);
    }

    #[test]
    fn should_leave_rate_unbounded_when_time_bound_is_not_positive() {
        let interval = TimeInterval {
            lower: -0.5,
            upper: 4.0,
        };
        let rates = interval.to_throughput(100);
        assert_eq!(rates.lower, 25.0);
        assert!(rates.upper.is_infinite());
    }
}
