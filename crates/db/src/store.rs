//! A single collection persisted as a JSON array on disk.
//!
//! Each write replaces the whole file: the new contents go to a sibling
//! `*.tmp` file which is then renamed over the original, so readers never
//! observe a half-written array. Read-modify-write cycles are serialized
//! through an async mutex; separate processes sharing the file are not
//! coordinated.

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::StoreError;

pub struct JsonStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the store at `path`, creating the parent directory and an empty
    /// array file if they do not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::io(parent, source))?;
        }

        if !tokio::fs::try_exists(&path)
            .await
            .map_err(|source| StoreError::io(&path, source))?
        {
            tokio::fs::write(&path, "[]")
                .await
                .map_err(|source| StoreError::io(&path, source))?;
            tracing::info!(path = %path.display(), "Created empty JSON store");
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
            _records: PhantomData,
        })
    }

    /// Read every record.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::io(&self.path, source))?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Run `mutate` against the current records and persist the result.
    ///
    /// Nothing is written when `mutate` returns an error. The write lock is
    /// held for the whole cycle.
    pub async fn update<R, E>(
        &self,
        mutate: impl FnOnce(&mut Vec<T>) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let out = mutate(&mut records)?;
        self.write_all(&records).await?;
        Ok(out)
    }

    async fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = tokio::fs::File::create(&tmp)
            .await
            .map_err(|source| StoreError::io(&tmp, source))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|source| StoreError::io(&tmp, source))?;
        file.sync_all()
            .await
            .map_err(|source| StoreError::io(&tmp, source))?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::io(&self.path, source))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "Persisted JSON store");
        Ok(())
    }
}
