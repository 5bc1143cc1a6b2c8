/// Errors raised by repository adapters.
/// Variants display as code-style identifiers so the presentation layer can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// A value did not fit the column it was written to.
    #[error("repository.out_of_range")]
    OutOfRange,
    #[error("repository.database_error")]
    DatabaseError,
}
