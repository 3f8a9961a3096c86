//! # recx Core
//!
//! Core library for the recx recommendation service.
//!
//! This crate provides the data model and the recommendation algorithm:
//!
//! - [`UserItemMatrix`] - interaction weights between users and items
//! - [`UserSimilarityMatrix`] - pairwise similarity scores between users
//! - [`RecommendationModel`] - both matrices, immutable once loaded
//! - [`Recommender`] - neighbor selection, candidate aggregation and
//!   exclusion filtering over a shared model
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use recx_core::{RecommendationModel, Recommender, UserItemMatrix, UserSimilarityMatrix};
//!
//! let mut interactions = UserItemMatrix::new();
//! interactions.insert(1, 10, 1.0);
//! interactions.insert(2, 20, 1.0);
//!
//! let mut similarities = UserSimilarityMatrix::new();
//! similarities.insert(1, 1, 1.0);
//! similarities.insert(1, 2, 0.8);
//!
//! let model = Arc::new(RecommendationModel::new(interactions, similarities));
//! let engine = Recommender::new(model);
//!
//! // User 2 clicked item 20; user 1 has not seen it yet.
//! let recommendations = engine.recommend(1, 5).unwrap();
//! assert_eq!(recommendations, vec![20]);
//! ```

pub mod engine;
pub mod error;
pub mod matrix;

pub use engine::{Recommender, DEFAULT_TOP_N};
pub use error::{Error, Result};
pub use matrix::{ItemId, RecommendationModel, UserId, UserItemMatrix, UserSimilarityMatrix};
