use {
    crate::domain::{
        cart::CartRepository,
        error::CheckoutError,
        provider::{PaymentProcessor, TransactionOutcome},
        transaction::{TransactionRequest, ValidatedTransaction},
        validation,
    },
    crate::services::cart_resolver::resolve_cart,
    std::{sync::Arc, time::Duration},
};

const DEFAULT_CART_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Turns a transaction request into one payment attempt.
///
/// Checks run in a fixed order: validation, cart lookup, then the processor
/// call. The first failure wins and nothing after it runs. Both collaborator
/// calls are bounded; expiry is a server-side failure.
pub struct TransactionOrchestrator {
    carts: Arc<dyn CartRepository>,
    processor: Arc<dyn PaymentProcessor>,
    gateway_timeout: Duration,
    cart_lookup_timeout: Duration,
}

impl TransactionOrchestrator {
    pub fn new(
        carts: Arc<dyn CartRepository>,
        processor: Arc<dyn PaymentProcessor>,
        gateway_timeout: Duration,
    ) -> Self {
        Self {
            carts,
            processor,
            gateway_timeout,
            cart_lookup_timeout: DEFAULT_CART_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_cart_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.cart_lookup_timeout = timeout;
        self
    }

    pub async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionOutcome, CheckoutError> {
        let validated = validation::validate(request).inspect_err(|e| {
            tracing::warn!(error = %e, "transaction request rejected");
        })?;
        self.submit(validated).await
    }

    /// Runs the workflow from cart resolution onwards.
    pub async fn submit(
        &self,
        transaction: ValidatedTransaction,
    ) -> Result<TransactionOutcome, CheckoutError> {
        let payment_type = transaction.payment_type();

        let lookup = tokio::time::timeout(
            self.cart_lookup_timeout,
            resolve_cart(&*self.carts, &transaction.cart_code),
        )
        .await
        .map_err(|_| CheckoutError::StorageTimeout(self.cart_lookup_timeout))?;

        let cart = match lookup {
            Ok(cart) => cart,
            Err(e @ CheckoutError::CartNotFound(_)) => {
                tracing::info!(cart_code = %transaction.cart_code, "cart not found");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let intent = transaction.into_intent();
        tracing::debug!(
            cart_code = %cart.code(),
            price = %cart.price(),
            %payment_type,
            installments = intent.installments.get(),
            "submitting payment intent"
        );

        let outcome = tokio::time::timeout(self.gateway_timeout, self.processor.process(&intent))
            .await
            .map_err(|_| CheckoutError::GatewayTimeout(self.gateway_timeout))??;

        tracing::info!(
            cart_code = %cart.code(),
            %payment_type,
            status = outcome.status(),
            reference = outcome.reference().as_deref().unwrap_or("-"),
            "payment processed"
        );
        Ok(outcome)
    }
}
