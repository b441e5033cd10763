// SPDX-License-Identifier: MPL-2.0
//! Product image loading.
//!
//! Catalog image sources are file paths or http(s) URLs. Handles are
//! cached by source string so cards listing the same image share one
//! decode. Loading happens in background tasks at startup; until a source
//! resolves, the carousel renders a placeholder pane for it.

use crate::error::{ApiError, Error};
use iced::widget::image;
use std::collections::HashMap;

/// Cache of resolved image handles, keyed by catalog source string.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    handles: HashMap<String, image::Handle>,
}

impl ImageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the handle for a source, if it has resolved.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&image::Handle> {
        self.handles.get(source)
    }

    /// Records a resolved handle.
    pub fn insert(&mut self, source: String, handle: image::Handle) {
        self.handles.insert(source, handle);
    }

    /// Number of resolved sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether nothing has resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Resolves one image source to a handle.
///
/// Returns the source together with the handle so the caller can file the
/// result under the right key without re-threading state through the task.
pub async fn fetch(source: String) -> Result<(String, image::Handle), Error> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(&source)
            .await
            .map_err(|e| Error::Api(ApiError::from_message(&e.to_string())))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Api(ApiError::from_message(&e.to_string())))?;
        Ok((source, image::Handle::from_bytes(bytes.to_vec())))
    } else {
        let bytes = tokio::fs::read(&source).await?;
        Ok((source, image::Handle::from_bytes(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_round_trips_handles_by_source() {
        let mut store = ImageStore::new();
        assert!(store.is_empty());

        let handle = image::Handle::from_rgba(1, 1, vec![255, 255, 255, 255]);
        store.insert("assets/a.jpg".to_string(), handle);

        assert_eq!(store.len(), 1);
        assert!(store.get("assets/a.jpg").is_some());
        assert!(store.get("assets/b.jpg").is_none());
    }

    #[tokio::test]
    async fn fetch_reports_missing_files_as_io_errors() {
        let result = fetch("definitely/not/a/file.jpg".to_string()).await;
        match result {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_reads_a_file_from_disk() {
        use std::io::Write;
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("pixel.png");
        let mut file = std::fs::File::create(&path).expect("failed to create file");
        file.write_all(b"not a real png, but bytes are bytes")
            .expect("failed to write file");

        let (source, _handle) = fetch(path.to_string_lossy().into_owned())
            .await
            .expect("fetch must succeed for existing files");
        assert!(source.ends_with("pixel.png"));
    }
}
