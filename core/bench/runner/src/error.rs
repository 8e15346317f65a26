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

use bench_report::error::BenchReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}")]
    Usage(String),
    #[error("run {run}: unexpected benchmark output: {source}")]
    ContractViolation {
        run: u32,
        #[source]
        source: BenchReportError,
    },
    #[error("run {run}: benchmark exited with {status}: {stderr}")]
    BenchmarkFailed {
        run: u32,
        status: String,
        stderr: String,
    },
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("staging error: {0}")]
    Staging(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
