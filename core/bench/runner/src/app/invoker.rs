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

use crate::config::RunConfiguration;
use crate::defaults::VERBOSITY_DIRECTIVE;
use crate::error::RunnerError;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Fully composed benchmark command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Prefixes the benchmark with the placement command (if any), then adds
    /// the verbosity directive and explicit worker and transaction counts so
    /// the effective configuration is always visible.
    pub fn compose(placement: &str, benchmark_bin: &Path, config: &RunConfiguration) -> Self {
        let mut words = placement.split_whitespace().map(str::to_owned);
        let benchmark = benchmark_bin.display().to_string();
        let (program, mut args) = match words.next() {
            Some(program) => {
                let mut args: Vec<String> = words.collect();
                args.push(benchmark);
                (program, args)
            }
            None => (benchmark, Vec::new()),
        };

        args.push(VERBOSITY_DIRECTIVE.to_owned());
        args.push("--workers".to_owned());
        args.push(config.workers.to_string());
        args.push("--transactions".to_owned());
        args.push(config.transactions_per_worker.to_string());
        args.extend(config.passthrough.iter().cloned());

        Self { program, args }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of one benchmark process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl RawOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn status_description(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {code}"),
            None => "termination by signal".to_owned(),
        }
    }
}

#[async_trait]
pub trait BenchmarkInvoker: Send + Sync {
    /// Runs the benchmark to completion and returns everything it printed.
    async fn invoke(&self, invocation: &Invocation) -> Result<RawOutput, RunnerError>;
}

/// Spawns the benchmark as a child process of the runner.
#[derive(Debug, Default)]
pub struct ProcessInvoker;

#[async_trait]
impl BenchmarkInvoker for ProcessInvoker {
    async fn invoke(&self, invocation: &Invocation) -> Result<RawOutput, RunnerError> {
        debug!("Spawning: {}", invocation.command_line());
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| RunnerError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        Ok(RawOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
