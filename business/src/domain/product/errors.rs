use crate::domain::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Product discount can not be higher than 75!")]
    DiscountTooHigh,
    #[error("Product discount can not be lower than 0!")]
    DiscountNegative,
    #[error("Product not found with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Caller-correctable business-rule violations, raised before any store access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::DiscountTooHigh | ProductError::DiscountNegative
        )
    }

    /// Lifts a repository failure for product `id`, keeping not-found typed.
    pub fn from_repository(id: i64, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound(id),
            other => ProductError::Repository(other),
        }
    }
}
