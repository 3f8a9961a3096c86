use thiserror::Error;

use crate::matrix::UserId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("User {0} not found in the user-item matrix")]
    UserNotFound(UserId),

    #[error("No similarity row for user {0}")]
    MissingSimilarityRow(UserId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
