// Integration tests for recx
use recx::prelude::*;
use std::sync::Arc;

fn click_model() -> RecommendationModel {
    let mut interactions = UserItemMatrix::new();
    interactions.insert(1, 10, 1.0);
    interactions.insert(1, 20, 0.0);
    interactions.insert(2, 10, 0.0);
    interactions.insert(2, 20, 1.0);
    interactions.insert(3, 10, 1.0);
    interactions.insert(3, 20, 1.0);

    let mut similarities = UserSimilarityMatrix::new();
    similarities.insert(1, 1, 1.0);
    similarities.insert(1, 2, 0.1);
    similarities.insert(1, 3, 0.9);
    similarities.insert(2, 1, 0.1);
    similarities.insert(2, 2, 1.0);
    similarities.insert(2, 3, 0.5);
    similarities.insert(3, 1, 0.9);
    similarities.insert(3, 2, 0.5);
    similarities.insert(3, 3, 1.0);

    RecommendationModel::new(interactions, similarities)
}

#[test]
fn test_recommendation_engine() {
    let engine = Recommender::new(Arc::new(click_model()));

    // User 1's closest neighbor (user 3) clicked items 10 and 20;
    // user 1 already clicked 10.
    let recommendations = engine.recommend(1, 5).unwrap();
    assert_eq!(recommendations, vec![20]);

    // User 3 has clicked everything its neighbors have.
    let recommendations = engine.recommend(3, 5).unwrap();
    assert!(recommendations.is_empty());
}

#[test]
fn test_unknown_user() {
    let engine = Recommender::new(Arc::new(click_model()));
    assert!(matches!(
        engine.recommend(42, 5),
        Err(Error::UserNotFound(42))
    ));
}

#[tokio::test]
async fn test_model_load_from_artifact_file() {
    let model = click_model();
    let artifact = ModelArtifact {
        user_item_matrix: model.interactions().clone(),
        user_similarity: model.similarities().clone(),
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_similarity_model.bin");
    std::fs::write(&path, artifact.to_bytes().unwrap()).unwrap();

    let loaded = load_model(&ModelSource::File { path }).await.unwrap();
    assert_eq!(loaded.user_count(), 3);
    assert_eq!(loaded.item_count(), 2);

    let engine = Recommender::new(Arc::new(loaded));
    assert_eq!(engine.recommend(1, 5).unwrap(), vec![20]);
}

#[tokio::test]
async fn test_model_load_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_similarity_model.bin");
    std::fs::write(&path, b"truncated").unwrap();

    let result = load_model(&ModelSource::File { path }).await;
    assert!(matches!(result, Err(Error::Serialization(_))));
}
