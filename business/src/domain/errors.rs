/// Repository errors for domain layer.
///
/// `NotFound` is the typed "no matching row" outcome; every other storage
/// failure collapses into `DatabaseError` with a message describing the
/// operation that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("{0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database_error(message: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_database_error_message() {
        let err = RepositoryError::database_error("Error while deleting product by id 4");
        assert_eq!(err.to_string(), "Error while deleting product by id 4");
    }

    #[test]
    fn should_build_not_found() {
        assert_eq!(RepositoryError::not_found(), RepositoryError::NotFound);
    }
}
