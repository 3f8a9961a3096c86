use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Identifier of a user row in the model.
pub type UserId = u64;

/// Identifier of a recommendable item (article).
pub type ItemId = u64;

type Map<K, V> = HashMap<K, V, ahash::RandomState>;

/// Interaction weights between users and items.
///
/// A weight > 0 means the user interacted with the item; an absent or
/// non-positive entry means no interaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserItemMatrix {
    rows: Map<UserId, Map<ItemId, f32>>,
}

impl UserItemMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interaction weight for a (user, item) pair.
    pub fn insert(&mut self, user: UserId, item: ItemId, weight: f32) {
        self.rows.entry(user).or_default().insert(item, weight);
    }

    pub fn contains_user(&self, user: UserId) -> bool {
        self.rows.contains_key(&user)
    }

    /// The user's full interaction row, if the user is known.
    pub fn row(&self, user: UserId) -> Option<&Map<ItemId, f32>> {
        self.rows.get(&user)
    }

    /// Items the user interacted with, in ascending item-id order.
    pub fn positive_items(&self, user: UserId) -> Option<Vec<ItemId>> {
        let row = self.rows.get(&user)?;
        let mut items: Vec<ItemId> = row
            .iter()
            .filter(|(_, weight)| **weight > 0.0)
            .map(|(item, _)| *item)
            .collect();
        items.sort_unstable();
        Some(items)
    }

    pub fn user_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct item columns across all rows.
    pub fn item_count(&self) -> usize {
        let mut items: HashSet<ItemId, ahash::RandomState> = HashSet::default();
        for row in self.rows.values() {
            items.extend(row.keys().copied());
        }
        items.len()
    }
}

/// Pairwise similarity scores between users.
///
/// Only ever indexed by the query user's row; symmetry is not assumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSimilarityMatrix {
    rows: Map<UserId, Map<UserId, f32>>,
}

impl UserSimilarityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity score between `user` and `other`.
    pub fn insert(&mut self, user: UserId, other: UserId, score: f32) {
        self.rows.entry(user).or_default().insert(other, score);
    }

    /// The user's similarity row, if the user is known.
    pub fn row(&self, user: UserId) -> Option<&Map<UserId, f32>> {
        self.rows.get(&user)
    }

    pub fn user_count(&self) -> usize {
        self.rows.len()
    }
}

/// The precomputed model: interactions plus similarities.
///
/// Loaded once from the model artifact and held read-only for the process
/// lifetime; requests never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationModel {
    interactions: UserItemMatrix,
    similarities: UserSimilarityMatrix,
}

impl RecommendationModel {
    pub fn new(interactions: UserItemMatrix, similarities: UserSimilarityMatrix) -> Self {
        Self {
            interactions,
            similarities,
        }
    }

    pub fn interactions(&self) -> &UserItemMatrix {
        &self.interactions
    }

    pub fn similarities(&self) -> &UserSimilarityMatrix {
        &self.similarities
    }

    pub fn user_count(&self) -> usize {
        self.interactions.user_count()
    }

    pub fn item_count(&self) -> usize {
        self.interactions.item_count()
    }
}
