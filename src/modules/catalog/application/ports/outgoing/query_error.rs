/// Failure of a read against the users, categories or products collections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}
