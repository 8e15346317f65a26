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

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn summarizer() -> Command {
    let mut cmd = Command::cargo_bin("tpcc-bench-summarizer").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("TPCC_BENCH_CORPUS");
    cmd
}

#[test]
fn should_print_one_sorted_row_per_group() {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("elapsed.txt");
    fs::write(
        &corpus,
        "okvl_tpcc_1.log:elapsed time=2.0 sec\n\
         nolock_tpcc_1.log:elapsed time=4.0 sec\n\
         okvl_tpcc_2.log:elapsed time=3.0 sec\n",
    )
    .unwrap();

    summarizer()
        .arg("--corpus")
        .arg(&corpus)
        .arg("100")
        .assert()
        .success()
        .stdout(
            "group,mean_tps,ci_low_tps,ci_high_tps\n\
             nolock_tpcc,25.000,,\n\
             okvl_tpcc,40.000,28.736,65.789\n",
        );
}

#[test]
fn should_multiply_transaction_factors() {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("elapsed.txt");
    fs::write(&corpus, "okvl_tpcc_1.log:elapsed time=4.0 sec\n").unwrap();

    summarizer()
        .arg("--corpus")
        .arg(&corpus)
        .args(["10", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("okvl_tpcc,50.000,,"));
}

#[test]
fn should_print_only_header_for_empty_corpus() {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("elapsed.txt");
    fs::write(&corpus, "").unwrap();

    summarizer()
        .arg("--corpus")
        .arg(&corpus)
        .arg("100")
        .assert()
        .success()
        .stdout("group,mean_tps,ci_low_tps,ci_high_tps\n");
}

#[test]
fn should_fail_on_malformed_result_line() {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("elapsed.txt");
    fs::write(&corpus, "okvl_tpcc_1.log:elapsed time=fast sec\n").unwrap();

    summarizer()
        .arg("--corpus")
        .arg(&corpus)
        .arg("100")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("elapsed.txt:1"));
}

#[test]
fn should_exit_with_usage_error_without_factors() {
    summarizer()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
    summarizer().arg("many").assert().code(1);
}
