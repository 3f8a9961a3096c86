use recx_core::{Error, RecommendationModel, Result, UserItemMatrix, UserSimilarityMatrix};
use serde::{Deserialize, Serialize};

/// Serialized form of the precomputed model blob.
///
/// Exactly two tables, both keyed by integer ids: interaction weights and
/// pairwise user similarities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub user_item_matrix: UserItemMatrix,
    pub user_similarity: UserSimilarityMatrix,
}

impl ModelArtifact {
    /// Decode an artifact from its bincode wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Encode the artifact for upload to the model store.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn into_model(self) -> RecommendationModel {
        RecommendationModel::new(self.user_item_matrix, self.user_similarity)
    }
}
