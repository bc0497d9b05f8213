use mongodb::bson;

/// Error type for MongoDB connectivity and document store operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    /// A stored document lacks the fields every document written by this store carries
    #[error("Malformed document: {0}")]
    Malformed(String),
}

pub type MongoResult<T> = Result<T, MongoError>;
