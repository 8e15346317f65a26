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

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for the benchmark executable. Run N prints the N-th line of
/// `times`; `missing` prints no elapsed time and `fail` exits non-zero.
const FAKE_BENCHMARK: &str = r#"#!/bin/sh
dir=$(dirname "$0")
count=$(cat "$dir/count" 2>/dev/null || echo 0)
count=$((count + 1))
echo "$count" > "$dir/count"
echo "$@" >> "$dir/invocations"
line=$(sed -n "${count}p" "$dir/times")
echo "All done!"
case "$line" in
    missing) exit 0 ;;
    fail) echo "elapsed time=1.0 sec"; echo "run_derived() failed" >&2; exit 1 ;;
    *) echo "elapsed time=$line sec" ;;
esac
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(times: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        for subdir in ["backup/data", "backup/log"] {
            fs::create_dir_all(dir.path().join(subdir)).unwrap();
        }
        fs::write(dir.path().join("backup/data/db"), "clean").unwrap();
        fs::write(dir.path().join("times"), times.join("\n") + "\n").unwrap();
        let script = dir.path().join("tpcc_full");
        fs::write(&script, FAKE_BENCHMARK).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tpcc-bench-runner").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .arg("--benchmark-bin")
            .arg(self.path().join("tpcc_full"))
            .arg("--placement")
            .arg("")
            .arg("--working-dir")
            .arg(self.path().join("work"))
            .arg("--backup-dir")
            .arg(self.path().join("backup"));
        cmd
    }

    fn invocations(&self) -> usize {
        fs::read_to_string(self.path().join("invocations"))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }

    fn json_path(&self) -> PathBuf {
        self.path().join("out/report.json")
    }
}

#[test]
fn should_report_mean_and_interval_for_identical_runs() {
    let ws = Workspace::new(&["10.0", "10.0", "10.0", "10.0"]);
    ws.command()
        .args(["4", "--workers", "2", "--transactions", "500", "--nolock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run   1:       100.00 tps"))
        .stdout(predicate::str::contains("Run   4:"))
        .stdout(predicate::str::contains(
            "Mean throughput: 100.00 tps (50.00 tps per worker)",
        ))
        .stdout(predicate::str::contains("95% CI: [100.00 .. 100.00] tps"));

    assert_eq!(ws.invocations(), 4);
    let invocations = fs::read_to_string(ws.path().join("invocations")).unwrap();
    assert_eq!(
        invocations.lines().next().unwrap(),
        "--verbose_level=1 --workers 2 --transactions 500 --nolock"
    );
    assert_eq!(
        fs::read_to_string(ws.path().join("work/data/db")).unwrap(),
        "clean"
    );
}

#[test]
fn should_succeed_without_statistics_for_zero_runs() {
    let ws = Workspace::new(&[]);
    ws.command()
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean").not());
    assert_eq!(ws.invocations(), 0);
}

#[test]
fn should_mark_interval_unavailable_for_single_run() {
    let ws = Workspace::new(&["5.0"]);
    ws.command()
        .args(["1", "--workers", "1", "--transactions", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean elapsed time: 5.000 sec"))
        .stdout(predicate::str::contains("Mean throughput: 200.00 tps"))
        .stdout(predicate::str::contains("95% CI: unavailable"));
}

#[test]
fn should_abort_when_elapsed_time_is_missing() {
    let ws = Workspace::new(&["2.0", "2.5", "missing", "3.0", "3.5"]);
    ws.command()
        .arg("5")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Run   2:"))
        .stdout(predicate::str::contains("Run   3:").not())
        .stdout(predicate::str::contains("Mean").not())
        .stderr(predicate::str::contains("run 3"));
    assert_eq!(ws.invocations(), 3);
}

#[test]
fn should_abort_when_benchmark_exits_with_failure() {
    let ws = Workspace::new(&["fail", "2.0"]);
    ws.command()
        .arg("2")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Mean").not())
        .stderr(predicate::str::contains("exit code 1"));
    assert_eq!(ws.invocations(), 1);
}

#[test]
fn should_write_json_report() {
    let ws = Workspace::new(&["2.0", "3.0"]);
    ws.command()
        .arg("--json-output")
        .arg(ws.json_path())
        .args(["2", "--workers", "1", "--transactions", "100"])
        .assert()
        .success();

    let json = fs::read_to_string(ws.json_path()).unwrap();
    assert!(json.contains("\"elapsed_times\""));
    assert!(json.contains("\"mean_tps\": 40.0"));
}

#[test]
fn should_exit_with_usage_error() {
    let ws = Workspace::new(&[]);
    ws.command().assert().code(1);
    ws.command().arg("ten").assert().code(1);
    ws.command().arg("-1").assert().code(1);
    ws.command()
        .args(["2", "--workers", "many"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--workers expects a positive integer"));
    assert_eq!(ws.invocations(), 0);
}
