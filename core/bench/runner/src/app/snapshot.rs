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

use crate::defaults::STATE_SUBDIRS;
use crate::error::RunnerError;
use dircpy::copy_dir;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;
use tracing::{debug, info};

/// Private copy of the clean database image, taken once before the first run
/// and copied back into the working directory before every run.
///
/// The copy lives in a temporary directory that is removed on drop.
pub struct Snapshot {
    dir: TempDir,
}

impl Snapshot {
    pub async fn stage(backup_dir: &Path, staging_root: Option<&Path>) -> Result<Self, RunnerError> {
        let dir = match staging_root {
            Some(root) => {
                fs::create_dir_all(root).await?;
                TempDir::new_in(root)?
            }
            None => TempDir::new()?,
        };

        for subdir in STATE_SUBDIRS {
            let source = backup_dir.join(subdir);
            if !fs::metadata(&source).await.is_ok_and(|m| m.is_dir()) {
                return Err(RunnerError::Staging(format!(
                    "backup image is missing '{}'",
                    source.display()
                )));
            }
            let target = dir.path().join(subdir);
            info!("Staging {} to {}...", source.display(), target.display());
            copy_dir(&source, &target).map_err(|e| {
                RunnerError::Staging(format!(
                    "failed to copy {} to {}: {e}",
                    source.display(),
                    target.display()
                ))
            })?;
        }

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Replaces `data` and `log` under `working_dir` with the staged image.
    /// Nothing of the previous contents survives.
    pub async fn restore(&self, working_dir: &Path) -> Result<(), RunnerError> {
        fs::create_dir_all(working_dir).await?;
        for subdir in STATE_SUBDIRS {
            let target: PathBuf = working_dir.join(subdir);
            if fs::try_exists(&target).await? {
                fs::remove_dir_all(&target).await?;
            }
            let source = self.dir.path().join(subdir);
            debug!("Restoring {} from {}", target.display(), source.display());
            copy_dir(&source, &target).map_err(|e| {
                RunnerError::Staging(format!(
                    "failed to restore {} from {}: {e}",
                    target.display(),
                    source.display()
                ))
            })?;
        }
        Ok(())
    }
}
