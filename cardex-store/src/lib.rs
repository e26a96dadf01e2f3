use cardex_core::{CoreError, KeyValue};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

pub mod paths;

const FILE_VERSION: u32 = 1;

#[derive(Clone, Serialize, Deserialize)]
struct FileImage {
    version: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    entries: BTreeMap<String, String>,
}

#[derive(Clone)]
struct State {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    entries: BTreeMap<String, String>,
}

impl State {
    fn new_empty() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            entries: BTreeMap::new(),
        }
    }

    fn to_image(&self) -> FileImage {
        FileImage {
            version: FILE_VERSION,
            created_at: self.created_at,
            updated_at: self.updated_at,
            entries: self.entries.clone(),
        }
    }

    fn from_image(img: FileImage) -> Self {
        Self {
            created_at: img.created_at,
            updated_at: img.updated_at,
            entries: img.entries,
        }
    }
}

/// Key-value store kept as a single versioned JSON file, rewritten
/// atomically on every `set`.
pub struct FileStore {
    path: PathBuf,
    state: RwLock<State>,
}

impl FileStore {
    pub async fn open_default() -> Result<Self, CoreError> {
        Self::open(paths::default_store_file()).await
    }

    pub async fn open(path: PathBuf) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        let state = load_or_init(&path).await?;
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    async fn save(&self) -> Result<(), CoreError> {
        let snapshot = {
            let mut s = self.state.write();
            s.updated_at = Utc::now();
            s.to_image()
        };
        let path = self.path.clone();

        // Join error -> CoreError, inner io::Error -> CoreError
        task::spawn_blocking(move || write_atomic(&path, &snapshot))
            .await
            .map_err(|_| CoreError::Storage("io"))?
            .map_err(|_| CoreError::Storage("io"))?;
        Ok(())
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|_| CoreError::Storage("io"))?;
    }
    Ok(())
}

async fn load_or_init(path: &Path) -> Result<State, CoreError> {
    if path.exists() {
        let p = path.to_path_buf();
        let img: FileImage = task::spawn_blocking(move || {
            let mut f = fs::File::open(&p)?;
            let mut buf = String::new();
            f.read_to_string(&mut buf)?;
            let v = serde_json::from_str::<FileImage>(&buf)?;
            Ok::<FileImage, std::io::Error>(v)
        })
        .await
        .map_err(|_| CoreError::Storage("io"))
        .and_then(|r| r.map_err(|_| CoreError::Storage("corrupt store file")))?;
        Ok(State::from_image(img))
    } else {
        let st = State::new_empty();
        write_atomic(path, &st.to_image()).map_err(|_| CoreError::Storage("io"))?;
        Ok(st)
    }
}

fn write_atomic(path: &Path, img: &FileImage) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(img).expect("serialize");
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    let _ = fs::remove_file(path);
    tmp.persist(path)?;
    Ok(())
}

#[async_trait::async_trait]
impl KeyValue for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.state.read().entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        {
            let mut s = self.state.write();
            s.entries.insert(key.to_string(), value.to_string());
        }
        self.save().await
    }
}
