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

use crate::error::BenchReportError;
use crate::types::sample::SampleSet;
use crate::types::summary::ThroughputSummary;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RunReport {
    /// Benchmark command line the samples were taken with
    pub command: String,

    /// Elapsed time of every run in seconds, in run order
    pub elapsed_times: SampleSet,

    /// Statistics over `elapsed_times`
    pub summary: ThroughputSummary,
}

impl RunReport {
    pub fn dump_to_json(&self, path: &Path) -> Result<(), BenchReportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, report_json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Statistics;
    use tempfile::TempDir;

    #[test]
    fn should_dump_samples_and_summary() {
        let samples = SampleSet::try_from([2.0, 3.0].as_slice()).unwrap();
        let stats = Statistics::compute(&samples).unwrap();
        let report = RunReport {
            command: "./tpcc_full --workers 1".to_owned(),
            summary: ThroughputSummary::from_statistics(&stats, 100, None),
            elapsed_times: samples,
        };
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/report.json");

        report.dump_to_json(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["elapsed_times"], serde_json::json!([2.0, 3.0]));
        assert_eq!(json["summary"]["runs"], 2);
        assert_eq!(json["summary"]["mean_tps"], 40.0);
        assert_eq!(json["summary"]["tps_interval"]["lower"], 28.736);
    }
}
