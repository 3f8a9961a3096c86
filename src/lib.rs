//! # recx
//!
//! A small, fast collaborative-filtering recommendation service.
//!
//! recx serves article recommendations from a precomputed user-similarity
//! model: given a user id, it returns the items that the user's nearest
//! neighbors interacted with but the user has not. The model (a user-item
//! interaction matrix plus a user-user similarity matrix) is loaded once
//! from an external object store and held read-only in memory.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install recx
//! recx --store-endpoint https://models.example.net --http-port 7071
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use std::sync::Arc;
//! use recx::prelude::*;
//!
//! // Build a model (normally decoded from the model artifact)
//! let mut interactions = UserItemMatrix::new();
//! interactions.insert(1, 10, 1.0);
//! interactions.insert(2, 20, 1.0);
//!
//! let mut similarities = UserSimilarityMatrix::new();
//! similarities.insert(1, 1, 1.0);
//! similarities.insert(1, 2, 0.8);
//!
//! let model = Arc::new(RecommendationModel::new(interactions, similarities));
//!
//! // Recommend items the user's neighbors clicked
//! let engine = Recommender::new(model);
//! let recommendations = engine.recommend(1, 5).unwrap();
//! assert_eq!(recommendations, vec![20]);
//! ```
//!
//! ## Crate Structure
//!
//! recx is composed of several crates:
//!
//! - [`recx-core`](https://docs.rs/recx-core) - Matrices, model, recommendation engine
//! - [`recx-storage`](https://docs.rs/recx-storage) - Model artifact fetch and decoding
//! - [`recx-api`](https://docs.rs/recx-api) - REST API
//!
//! ## Features
//!
//! - **Neighbor-based recommendations**: precomputed user-user similarities,
//!   no training at serve time
//! - **Immutable model**: lock-free concurrent requests over shared state
//! - **Pluggable model source**: HTTP object store or local file
//! - **JSON API**: single recommendation endpoint plus model/health probes

// Re-export core types
pub use recx_core::{
    Error, ItemId, RecommendationModel, Recommender, Result, UserId, UserItemMatrix,
    UserSimilarityMatrix, DEFAULT_TOP_N,
};

// Re-export storage
pub use recx_storage::{load_model, BlobStore, BlobStoreConfig, ModelArtifact, ModelSource};

// Re-export API
pub use recx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_model, BlobStore, BlobStoreConfig, Error, ItemId, ModelArtifact, ModelSource,
        RecommendationModel, Recommender, RestApi, Result, UserId, UserItemMatrix,
        UserSimilarityMatrix, DEFAULT_TOP_N,
    };
}
