use {super::id::CartCode, std::time::Duration, thiserror::Error};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("cart not found: {0}")]
    CartNotFound(CartCode),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cart storage timed out after {0:?}")]
    StorageTimeout(Duration),

    #[error("payment gateway: {0}")]
    Gateway(String),

    #[error("payment gateway timed out after {0:?}")]
    GatewayTimeout(Duration),
}
