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

//! Extraction of the elapsed-time announcement from benchmark output.

use crate::error::BenchReportError;
use crate::types::sample::Sample;
use regex::Regex;
use std::sync::LazyLock;

static ELAPSED_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"elapsed time=(?P<seconds>\S+) sec").expect("elapsed time pattern is valid")
});

/// Marker used to pick candidate lines out of free-form logs.
pub const ELAPSED_TIME_MARKER: &str = "elapsed time=";

/// Parses the first elapsed-time announcement found in `output`.
pub fn parse_elapsed_time(output: &str) -> Result<Sample, BenchReportError> {
    output
        .lines()
        .find(|line| ELAPSED_TIME.is_match(line))
        .map_or(Err(BenchReportError::MissingElapsedTime), parse_elapsed_line)
}

/// Parses a single line that must carry the elapsed-time announcement.
pub fn parse_elapsed_line(line: &str) -> Result<Sample, BenchReportError> {
    let captures = ELAPSED_TIME
        .captures(line)
        .ok_or(BenchReportError::MissingElapsedTime)?;
    let raw = &captures["seconds"];
    let seconds = raw
        .parse::<f64>()
        .map_err(|_| BenchReportError::InvalidElapsedTime(raw.to_owned()))?;
    Sample::new(seconds)
}
