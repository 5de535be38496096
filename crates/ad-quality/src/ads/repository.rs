use super::domain::Ad;

/// Storage abstraction so the classifier can be exercised in isolation.
///
/// `save` replaces the stored ad wholesale; readers of a single ad must see
/// either the previous or the new record, never a mix.
pub trait AdRepository: Send + Sync {
    fn list_all(&self) -> Result<Vec<Ad>, RepositoryError>;
    fn save(&self, ad: Ad) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
