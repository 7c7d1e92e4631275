//! Song manifest: the folder → filenames document generated next to the songs.
//!
//! The manifest is fetched once per page life. Any failure degrades to an
//! empty manifest so the rest of the player keeps working.

use std::future::Future;
use std::sync::Arc;

use dioxus::logger::tracing::{debug, error, info, warn};
use once_cell::unsync::OnceCell;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("server answered with HTTP {0}")]
    Status(u16),
    #[error("could not read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("manifest root must be an object mapping folders to file lists")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFolder {
    pub name: String,
    pub files: Vec<String>,
}

/// Immutable folder listing. Clones share the same allocation.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    folders: Arc<Vec<ManifestFolder>>,
}

impl PartialEq for Manifest {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.folders, &other.folders) || self.folders == other.folders
    }
}

impl Manifest {
    #[cfg(test)]
    pub fn from_folders<I, N, F>(folders: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<F>)>,
        N: Into<String>,
        F: Into<String>,
    {
        let folders = folders
            .into_iter()
            .map(|(name, files)| ManifestFolder {
                name: name.into(),
                files: files.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self {
            folders: Arc::new(folders),
        }
    }

    /// Parse the manifest document. Folder order follows the document.
    ///
    /// A folder whose value is not an array is kept with no files, and
    /// non-string entries inside a file list are dropped.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let Value::Object(map) = serde_json::from_str::<Value>(text)? else {
            return Err(ManifestError::NotAnObject);
        };

        let mut folders = Vec::with_capacity(map.len());
        for (name, value) in map {
            let files = match value {
                Value::Array(entries) => entries
                    .into_iter()
                    .filter_map(|entry| match entry {
                        Value::String(file) => Some(file),
                        other => {
                            warn!("Skipping non-string entry {other} in folder {name}");
                            None
                        }
                    })
                    .collect(),
                other => {
                    warn!("Folder {name} is not a list ({other}), treating it as empty");
                    Vec::new()
                }
            };
            folders.push(ManifestFolder { name, files });
        }

        Ok(Self {
            folders: Arc::new(folders),
        })
    }

    pub fn folders(&self) -> &[ManifestFolder] {
        &self.folders
    }

    pub fn files(&self, folder: &str) -> Option<&[String]> {
        self.folders
            .iter()
            .find(|f| f.name == folder)
            .map(|f| f.files.as_slice())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// First folder that has tracks, else the first folder listed.
    pub fn default_folder(&self) -> Option<&str> {
        self.folders
            .iter()
            .find(|f| !f.files.is_empty())
            .or_else(|| self.folders.first())
            .map(|f| f.name.as_str())
    }

    /// True when both handles point at the same loaded document.
    #[cfg(test)]
    pub fn same_document(&self, other: &Manifest) -> bool {
        Arc::ptr_eq(&self.folders, &other.folders)
    }
}

/// Fetches the manifest once and hands out the cached copy afterwards.
#[derive(Debug)]
pub struct ManifestLoader {
    url: String,
    cached: OnceCell<Manifest>,
}

impl ManifestLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cached: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub fn cached(&self) -> Option<Manifest> {
        self.cached.get().cloned()
    }

    pub async fn load(&self) -> Manifest {
        self.load_with(fetch_manifest_text).await
    }

    /// Same as [`load`](Self::load) with a caller-supplied fetch step.
    ///
    /// A failed fetch still fills the cache (with an empty manifest); the
    /// next page load is the retry.
    pub async fn load_with<F, Fut>(&self, fetch: F) -> Manifest
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<String, ManifestError>>,
    {
        if let Some(manifest) = self.cached.get() {
            debug!("Manifest served from cache");
            return manifest.clone();
        }

        let loaded = match fetch(self.url.clone()).await {
            Ok(text) => Manifest::parse(&text),
            Err(err) => Err(err),
        };
        let manifest = match loaded {
            Ok(manifest) => {
                info!(
                    "Loaded {} with {} folder(s)",
                    self.url,
                    manifest.folders().len()
                );
                manifest
            }
            Err(err) => {
                error!("Failed to load {}: {err}", self.url);
                Manifest::default()
            }
        };

        self.cached.get_or_init(|| manifest).clone()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_manifest_text(url: String) -> Result<String, ManifestError> {
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ManifestError::Fetch(e.to_string()))?;
    if !response.ok() {
        return Err(ManifestError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| ManifestError::Fetch(e.to_string()))
}

/// Host builds read `http(s)` URLs over the network and anything else from disk.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_manifest_text(url: String) -> Result<String, ManifestError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        let response = reqwest::get(&url)
            .await
            .map_err(|e| ManifestError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ManifestError::Status(response.status().as_u16()));
        }
        return response
            .text()
            .await
            .map_err(|e| ManifestError::Fetch(e.to_string()));
    }

    Ok(tokio::fs::read_to_string(&url).await?)
}
