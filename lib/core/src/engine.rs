use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::matrix::{ItemId, RecommendationModel, UserId};

/// Number of recommendations returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_TOP_N: usize = 5;

/// Stateless recommendation engine over an immutable model.
///
/// Cloning is cheap (the model is shared behind an `Arc`), and concurrent
/// calls are safe without locking since nothing is ever mutated.
#[derive(Clone)]
pub struct Recommender {
    model: Arc<RecommendationModel>,
}

impl Recommender {
    pub fn new(model: Arc<RecommendationModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &RecommendationModel {
        &self.model
    }

    /// Recommend up to `top_n` items that the user's most similar neighbors
    /// interacted with but the user has not.
    ///
    /// Candidates are collected neighbor-by-neighbor in descending
    /// similarity order (ascending item id within a neighbor, first
    /// occurrence wins) and truncated after exclusion filtering; there is
    /// no combined similarity/frequency ranking of the survivors.
    ///
    /// Returns [`Error::UserNotFound`] when the user has no interaction
    /// row. That outcome is non-fatal: callers translate it into an empty
    /// result.
    pub fn recommend(&self, user_id: UserId, top_n: usize) -> Result<Vec<ItemId>> {
        info!(user_id, top_n, "generating recommendations");

        let interactions = self.model.interactions();
        if !interactions.contains_user(user_id) {
            return Err(Error::UserNotFound(user_id));
        }

        let neighbors = self.neighbors(user_id, top_n)?;
        debug!(user_id, ?neighbors, "resolved neighbor set");

        let mut seen: HashSet<ItemId, ahash::RandomState> = HashSet::default();
        let mut candidates: Vec<ItemId> = Vec::new();
        for neighbor in &neighbors {
            if let Some(items) = interactions.positive_items(*neighbor) {
                for item in items {
                    if seen.insert(item) {
                        candidates.push(item);
                    }
                }
            }
        }

        let own: HashSet<ItemId, ahash::RandomState> = interactions
            .positive_items(user_id)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let recommendations: Vec<ItemId> = candidates
            .into_iter()
            .filter(|item| !own.contains(item))
            .take(top_n)
            .collect();

        info!(
            user_id,
            count = recommendations.len(),
            "recommendations ready"
        );
        Ok(recommendations)
    }

    /// The user's `top_n` most similar other users, best first.
    ///
    /// The user's own entry is excluded by id, not by rank, so a model
    /// whose self-similarity is not the maximum still never yields the
    /// user as its own neighbor. Ties break by ascending user id.
    fn neighbors(&self, user_id: UserId, top_n: usize) -> Result<Vec<UserId>> {
        let row = self
            .model
            .similarities()
            .row(user_id)
            .ok_or(Error::MissingSimilarityRow(user_id))?;

        let mut scored: Vec<(UserId, f32)> = row
            .iter()
            .filter(|(other, _)| **other != user_id)
            .map(|(other, score)| (*other, *score))
            .collect();
        scored.sort_unstable_by_key(|&(other, score)| (Reverse(OrderedFloat(score)), other));

        Ok(scored
            .into_iter()
            .take(top_n)
            .map(|(other, _)| other)
            .collect())
    }
}
