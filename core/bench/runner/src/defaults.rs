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

use nonzero_lit::u32;
use std::num::NonZeroU32;

pub const DEFAULT_WORKERS: NonZeroU32 = u32!(12);
pub const DEFAULT_TRANSACTIONS_PER_WORKER: NonZeroU32 = u32!(20_000);

pub const DEFAULT_BENCHMARK_BINARY: &str = "./tpcc_full";
pub const DEFAULT_PLACEMENT: &str = "numactl --interleave=all";
pub const VERBOSITY_DIRECTIVE: &str = "--verbose_level=1";

pub const DEFAULT_WORKING_DIR: &str = "work";
pub const DEFAULT_BACKUP_DIR: &str = "backup";

/// Subdirectories of the working and backup directories that make up the
/// database image.
pub const STATE_SUBDIRS: [&str; 2] = ["data", "log"];

pub const DEFAULT_LOG_LEVEL: &str = "info";
