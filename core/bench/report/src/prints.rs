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
use crate::types::interval::RateInterval;
use crate::types::sample::Sample;
use crate::types::summary::ThroughputSummary;
use std::fmt::{self, Display, Formatter};

/// One progress line per finished run, `index` is 1-based.
pub fn format_trial_line(index: usize, total_transactions: u64, sample: Sample) -> String {
    format!(
        "Run {index:>3}: {:>12.2} tps, elapsed {:>10.3} sec",
        throughput(total_transactions, sample.seconds()),
        sample.seconds()
    )
}

pub fn format_rate_interval(interval: &RateInterval) -> String {
    format!("[{:.2} .. {:.2}]", interval.lower, interval.upper)
}

impl Display for ThroughputSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Runs: {}, transactions per run: {}",
            self.runs, self.total_transactions
        )?;
        writeln!(f, "Mean elapsed time: {:.3} sec", self.mean_time_secs)?;
        match self.mean_tps_per_worker {
            Some(per_worker) => writeln!(
                f,
                "Mean throughput: {:.2} tps ({:.2} tps per worker)",
                self.mean_tps, per_worker
            )?,
            None => writeln!(f, "Mean throughput: {:.2} tps", self.mean_tps)?,
        }
        match &self.tps_interval {
            Some(interval) => write!(f, "95% CI: {} tps", format_rate_interval(interval)),
            None => write!(f, "95% CI: unavailable (need at least 2 runs)"),
        }
    }
}

impl ThroughputSummary {
    pub fn print_summary(&self) {
        println!("{self}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Statistics;
    use crate::types::sample::SampleSet;
    use std::num::NonZeroU32;

    fn summary(values: &[f64], workers: Option<u32>) -> ThroughputSummary {
        let samples = SampleSet::try_from(values).unwrap();
        let stats = Statistics::compute(&samples).unwrap();
        ThroughputSummary::from_statistics(&stats, 1000, workers.and_then(NonZeroU32::new))
    }

    #[test]
    fn should_format_trial_line_with_fixed_widths() {
        let line = format_trial_line(3, 1000, Sample::new(8.0).unwrap());
        assert_eq!(line, "Run   3:       125.00 tps, elapsed      8.000 sec");
    }

    #[test]
    fn should_print_interval_with_lower_bound_first() {
        let text = summary(&[2.0, 3.0], Some(2)).to_string();
        assert!(text.contains("Mean throughput: 400.00 tps (200.00 tps per worker)"));
        assert!(text.contains("95% CI: [287.36 .. 657.89] tps"), "{text}");
    }

    #[test]
    fn should_mark_interval_unavailable_for_single_run() {
        let text = summary(&[5.0], Some(1)).to_string();
        assert!(text.contains("Mean elapsed time: 5.000 sec"));
        assert!(text.contains("Mean throughput: 200.00 tps"));
        assert!(text.contains("95% CI: unavailable"));
    }

    #[test]
    fn should_render_summary_as_four_lines_without_worker_split() {
        let text = summary(&[4.0, 4.0], None).to_string();
        assert_eq!(
            text,
            "Runs: 2, transactions per run: 1000\n\
             Mean elapsed time: 4.000 sec\n\
             Mean throughput: 250.00 tps\n\
             95% CI: [250.00 .. 250.00] tps"
        );
    }
}
