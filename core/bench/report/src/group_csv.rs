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
use crate::types::group_key::GroupKey;
use crate::types::summary::ThroughputSummary;
use std::io::Write;

/// Column order is the historical one: mean, then the rate bound derived from
/// the upper time bound, then the one derived from the lower time bound.
pub const GROUP_CSV_HEADER: [&str; 4] = ["group", "mean_tps", "ci_low_tps", "ci_high_tps"];

/// Writes one row per group, in the order given. Groups without an interval
/// leave both bound columns empty.
pub fn write_group_csv<'a, W, I>(writer: W, rows: I) -> Result<(), BenchReportError>
where
    W: Write,
    I: IntoIterator<Item = (&'a GroupKey, &'a ThroughputSummary)>,
{
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(GROUP_CSV_HEADER)?;
    for (key, summary) in rows {
        let (low, high) = match &summary.tps_interval {
            Some(interval) => (
                format!("{:.3}", interval.lower),
                format!("{:.3}", interval.upper),
            ),
            None => (String::new(), String::new()),
        };
        csv.write_record([
            key.to_string(),
            format!("{:.3}", summary.mean_tps),
            low,
            high,
        ])?;
    }
    csv.flush()?;
    Ok(())
}
