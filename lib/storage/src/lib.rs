//! # recx Storage
//!
//! Model artifact loading for the recx recommendation service.
//!
//! The precomputed model lives in an external object store as a single
//! named binary blob. This crate fetches that blob (or reads it from a
//! local file) and decodes it into a [`recx_core::RecommendationModel`].

pub mod artifact;
pub mod store;

pub use artifact::ModelArtifact;
pub use store::{load_model, BlobStore, BlobStoreConfig, ModelSource};
