use std::path::PathBuf;

use bytes::Bytes;
use recx_core::{Error, RecommendationModel, Result};
use tracing::info;

use crate::artifact::ModelArtifact;

/// Connection parameters for the HTTP object store holding model blobs.
///
/// Always injected by the caller; nothing here is baked in.
#[derive(Debug, Clone)]
pub struct BlobStoreConfig {
    /// Base URL of the store, e.g. `https://models.example.net`.
    pub endpoint: String,
    /// Container (bucket) holding the model blobs.
    pub container: String,
}

/// Minimal object-store client: fetch a named blob as bytes.
pub struct BlobStore {
    config: BlobStoreConfig,
    client: reqwest::Client,
}

impl BlobStore {
    pub fn new(config: BlobStoreConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch(&self, blob_name: &str) -> Result<Bytes> {
        let url = format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.container,
            blob_name
        );
        info!(%url, "downloading model blob");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Storage(format!("blob request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Storage(format!(
                "blob request for '{blob_name}' returned {status}"
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| Error::Storage(format!("blob download failed: {e}")))
    }
}

/// Where the serialized model comes from.
#[derive(Debug, Clone)]
pub enum ModelSource {
    /// Local artifact file, used in development and tests.
    File { path: PathBuf },
    /// Named blob in an HTTP object store.
    Http {
        config: BlobStoreConfig,
        blob_name: String,
    },
}

/// Fetch and decode the model artifact.
///
/// Runs once before requests are served; any failure here is fatal to
/// initialization and is not retried.
pub async fn load_model(source: &ModelSource) -> Result<RecommendationModel> {
    let bytes = match source {
        ModelSource::File { path } => {
            info!(path = %path.display(), "loading model artifact from file");
            Bytes::from(std::fs::read(path)?)
        }
        ModelSource::Http { config, blob_name } => {
            BlobStore::new(config.clone()).fetch(blob_name).await?
        }
    };

    let model = ModelArtifact::from_bytes(&bytes)?.into_model();
    info!(
        users = model.user_count(),
        items = model.item_count(),
        "model loaded"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recx_core::{UserItemMatrix, UserSimilarityMatrix};

    fn sample_artifact() -> ModelArtifact {
        let mut user_item_matrix = UserItemMatrix::new();
        user_item_matrix.insert(1, 10, 1.0);
        user_item_matrix.insert(2, 20, 1.0);

        let mut user_similarity = UserSimilarityMatrix::new();
        user_similarity.insert(1, 1, 1.0);
        user_similarity.insert(1, 2, 0.8);

        ModelArtifact {
            user_item_matrix,
            user_similarity,
        }
    }

    #[tokio::test]
    async fn loads_artifact_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, sample_artifact().to_bytes().unwrap()).unwrap();

        let model = load_model(&ModelSource::File { path }).await.unwrap();
        assert_eq!(model.user_count(), 2);
        assert_eq!(model.item_count(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = ModelSource::File {
            path: PathBuf::from("/nonexistent/model.bin"),
        };
        assert!(matches!(load_model(&source).await, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn corrupt_artifact_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"not a model artifact").unwrap();

        let result = load_model(&ModelSource::File { path }).await;
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[tokio::test]
    async fn unreachable_store_is_a_storage_error() {
        let source = ModelSource::Http {
            config: BlobStoreConfig {
                // Discard port; connection is refused immediately.
                endpoint: "http://127.0.0.1:9".to_string(),
                container: "model".to_string(),
            },
            blob_name: "user_similarity_model.bin".to_string(),
        };
        assert!(matches!(load_model(&source).await, Err(Error::Storage(_))));
    }
}
