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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchReportError {
    #[error("output does not contain an `elapsed time=<seconds> sec` line")]
    MissingElapsedTime,
    #[error("invalid elapsed time '{0}'")]
    InvalidElapsedTime(String),
    #[error("label '{label}' has {found} segment(s), expected at least {expected}")]
    GroupArity {
        label: String,
        expected: usize,
        found: usize,
    },
    #[error("result line has no label: '{0}'")]
    MissingLabel(String),
    #[error("{location}: {source}")]
    Corpus {
        location: String,
        #[source]
        source: Box<BenchReportError>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
