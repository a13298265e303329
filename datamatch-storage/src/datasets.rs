use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use datamatch_core::{CoreError, Dataset, DatasetId, Result, TabularData};
use uuid::Uuid;

use crate::tabular;

const DATASET_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

/// Flat-directory store for uploaded tabular files. Every listing re-reads
/// and re-parses the whole directory; acceptable only at toy scale.
///
/// Ids are issued once per stored filename and reused for the lifetime of
/// the process, so repeated listings describe the same file with the same id.
#[derive(Clone)]
pub struct DatasetStore {
    dir: PathBuf,
    index: Arc<DashMap<String, DatasetId>>,
}

impl DatasetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            index: Arc::new(DashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The extension of an acceptable upload, or None for anything else.
    pub fn allowed_extension(filename: &str) -> Option<&'static str> {
        let ext = Path::new(filename).extension()?.to_str()?;
        DATASET_EXTENSIONS.into_iter().find(|e| *e == ext)
    }

    fn id_for(&self, filename: &str) -> DatasetId {
        *self
            .index
            .entry(filename.to_string())
            .or_insert_with(DatasetId::new)
            .value()
    }

    /// Write an upload under `filename`, silently replacing any existing
    /// file with that name. The write goes through a temp file and a rename
    /// so a crash never leaves a partial dataset behind.
    pub async fn store(&self, filename: &str, bytes: &[u8]) -> Result<DatasetId> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp_path = self.dir.join(format!("tmp_{}", Uuid::new_v4()));
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, self.dir.join(filename)).await?;

        Ok(self.id_for(filename))
    }

    /// Scan the upload directory and fully materialize every dataset.
    /// A missing directory yields an empty list; a malformed file fails the
    /// whole scan.
    pub async fn list(&self, uploaded_by: &str) -> Result<Vec<Dataset>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut datasets = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !DATASET_EXTENSIONS.contains(&ext) {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().into_owned();
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| filename.clone());

            let modified = entry.metadata().await?.modified()?;
            let upload_date: DateTime<Utc> = modified.into();

            let parsed = parse_file(path).await?;
            datasets.push(Dataset::new(
                self.id_for(&filename),
                name,
                uploaded_by.to_string(),
                upload_date,
                parsed.rows,
            ));
        }

        Ok(datasets)
    }

    /// Resolve a dataset by display name, preferring `.csv` over `.xlsx`,
    /// and parse it fully.
    pub async fn load(&self, name: &str) -> Result<TabularData> {
        if name.contains(['/', '\\']) || name.contains("..") {
            return Err(CoreError::DatasetNotFound(name.to_string()));
        }

        for ext in DATASET_EXTENSIONS {
            let path = self.dir.join(format!("{name}.{ext}"));
            if tokio::fs::try_exists(&path).await? {
                return parse_file(path).await;
            }
        }

        Err(CoreError::DatasetNotFound(name.to_string()))
    }
}

async fn parse_file(path: PathBuf) -> Result<TabularData> {
    tokio::task::spawn_blocking(move || tabular::read_tabular(&path))
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?
}

/// Reduce a client-supplied filename to something filesystem-safe: directory
/// components are stripped, whitespace collapses to underscores, and only
/// ASCII alphanumerics, dots, dashes and underscores survive.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let mut out = String::with_capacity(base.len());
    for ch in base.trim().chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push('_');
        }
    }

    out.trim_start_matches(['.', '-']).to_string()
}
