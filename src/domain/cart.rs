use {
    super::error::CheckoutError,
    super::id::CartCode,
    super::money::MoneyAmount,
    serde::Serialize,
    std::{future::Future, pin::Pin},
};

/// Read-only view of a persisted cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    code: CartCode,
    price: MoneyAmount,
}

impl Cart {
    pub fn new(code: CartCode, price: MoneyAmount) -> Self {
        Self { code, price }
    }

    pub fn code(&self) -> &CartCode {
        &self.code
    }

    pub fn price(&self) -> MoneyAmount {
        self.price
    }
}

/// Cart storage as seen from checkout: lookup only.
pub trait CartRepository: Send + Sync {
    fn find_by_code(
        &self,
        code: &CartCode,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Cart>, CheckoutError>> + Send + '_>>;
}
