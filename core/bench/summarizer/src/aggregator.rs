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

use bench_report::elapsed::{ELAPSED_TIME_MARKER, parse_elapsed_line};
use bench_report::error::BenchReportError;
use bench_report::group_key::{GROUP_KEY_SEPARATOR, GroupKey};
use bench_report::sample::SampleSet;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Groups historical elapsed times by a fixed number of label segments.
///
/// The map keeps groups sorted by key, so iterating it gives a reproducible
/// report order.
pub struct ResultAggregator {
    key_segments: usize,
}

impl ResultAggregator {
    pub fn new(key_segments: usize) -> Self {
        Self { key_segments }
    }

    pub fn load(&self, corpus: &Path) -> Result<BTreeMap<GroupKey, SampleSet>, BenchReportError> {
        let mut groups = BTreeMap::new();
        if corpus.is_dir() {
            self.load_directory(corpus, &mut groups)?;
        } else {
            self.load_listing(corpus, &mut groups)?;
        }
        info!(
            "Loaded {} group(s) from {}",
            groups.len(),
            corpus.display()
        );
        Ok(groups)
    }

    /// Every non-empty line is `label:payload` and must carry an elapsed time.
    fn load_listing(
        &self,
        path: &Path,
        groups: &mut BTreeMap<GroupKey, SampleSet>,
    ) -> Result<(), BenchReportError> {
        let contents = fs::read_to_string(path).map_err(|e| at(path, None, e.into()))?;
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (label, payload) = line
                .split_once(':')
                .filter(|(label, _)| !label.trim().is_empty())
                .ok_or_else(|| BenchReportError::MissingLabel(line.to_owned()))
                .map_err(|e| at(path, Some(index + 1), e))?;
            self.record(groups, label.trim(), payload)
                .map_err(|e| at(path, Some(index + 1), e))?;
        }
        Ok(())
    }

    /// Each file is one label; only its lines announcing an elapsed time count.
    fn load_directory(
        &self,
        dir: &Path,
        groups: &mut BTreeMap<GroupKey, SampleSet>,
    ) -> Result<(), BenchReportError> {
        let mut files: Vec<_> = fs::read_dir(dir)
            .map_err(|e| at(dir, None, e.into()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        for file in files {
            let contents = fs::read_to_string(&file).map_err(|e| at(&file, None, e.into()))?;
            let label = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            for (index, line) in contents.lines().enumerate() {
                if !line.contains(ELAPSED_TIME_MARKER) {
                    continue;
                }
                self.record(groups, &label, line)
                    .map_err(|e| at(&file, Some(index + 1), e))?;
            }
        }
        Ok(())
    }

    fn record(
        &self,
        groups: &mut BTreeMap<GroupKey, SampleSet>,
        label: &str,
        payload: &str,
    ) -> Result<(), BenchReportError> {
        let key = group_key(label, self.key_segments)?;
        let sample = parse_elapsed_line(payload)?;
        debug!("{key}: {sample}");
        groups.entry(key).or_default().push(sample);
        Ok(())
    }
}

/// Splits the label's file name, without extension, on `_` and keeps the
/// first `key_segments` parts. Fewer parts is an error.
pub fn group_key(label: &str, key_segments: usize) -> Result<GroupKey, BenchReportError> {
    let stem = Path::new(label)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| BenchReportError::MissingLabel(label.to_owned()))?;
    let segments: Vec<&str> = stem.split(GROUP_KEY_SEPARATOR).collect();
    if segments.len() < key_segments {
        return Err(BenchReportError::GroupArity {
            label: label.to_owned(),
            expected: key_segments,
            found: segments.len(),
        });
    }
    Ok(GroupKey::new(segments.into_iter().take(key_segments)))
}

fn at(path: &Path, line: Option<usize>, source: BenchReportError) -> BenchReportError {
    let location = match line {
        Some(line) => format!("{}:{line}", path.display()),
        None => path.display().to_string(),
    };
    BenchReportError::Corpus {
        location,
        source: Box::new(source),
    }
}
