use std::path::{Path, PathBuf};

use datamatch_core::{CoreError, Result, RunRecord};
use uuid::Uuid;

/// Flat-directory store for persisted runs, one `<run_id>.json` per run.
/// Runs are written once and never updated or deleted.
#[derive(Clone)]
pub struct RunStore {
    dir: PathBuf,
}

impl RunStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a run as pretty-printed JSON via temp-file-then-rename.
    pub async fn save(&self, run: &RunRecord) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let bytes = serde_json::to_vec_pretty(run)?;
        let tmp_path = self.dir.join(format!("tmp_{}", Uuid::new_v4()));
        tokio::fs::write(&tmp_path, &bytes).await?;
        tokio::fs::rename(&tmp_path, self.dir.join(format!("{}.json", run.id)))
            .await?;

        Ok(())
    }

    /// Read a run file back verbatim. The embedded id is not checked against
    /// the requested one.
    pub async fn get(&self, run_id: &str) -> Result<serde_json::Value> {
        if run_id.contains(['/', '\\']) || run_id.contains("..") {
            return Err(CoreError::RunNotFound(run_id.to_string()));
        }

        let path = self.dir.join(format!("{run_id}.json"));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::RunNotFound(run_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Parse every run file and return them newest-first. The sort key is
    /// the `timestamp` string; lexical order matches chronological order
    /// because timestamps are RFC 3339. A record without a timestamp fails
    /// the whole listing.
    pub async fn list(&self) -> Result<Vec<serde_json::Value>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keyed: Vec<(String, serde_json::Value)> = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let bytes = tokio::fs::read(&path).await?;
            let run: serde_json::Value = serde_json::from_slice(&bytes)?;
            let timestamp = run
                .get("timestamp")
                .and_then(|t| t.as_str())
                .ok_or_else(|| {
                    CoreError::MalformedFile(format!(
                        "run record {} missing timestamp",
                        path.display()
                    ))
                })?
                .to_string();

            keyed.push((timestamp, run));
        }

        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(keyed.into_iter().map(|(_, run)| run).collect())
    }
}
