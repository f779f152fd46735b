use {
    crate::domain::{
        cart::{Cart, CartRepository},
        error::CheckoutError,
        id::CartCode,
        money::MoneyAmount,
    },
    std::{collections::HashMap, future::Future, pin::Pin, sync::Arc},
    tokio::sync::RwLock,
};

/// Cart lookup backed by a map. Used by tests and database-less local runs.
#[derive(Default, Clone)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<CartCode, Cart>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_carts(carts: impl IntoIterator<Item = Cart>) -> Self {
        let carts = carts
            .into_iter()
            .map(|cart| (cart.code().clone(), cart))
            .collect();
        Self {
            carts: Arc::new(RwLock::new(carts)),
        }
    }

    /// Builds a store from `code:price_in_cents` pairs separated by commas,
    /// e.g. `cart-1:19990,cart-2:500`.
    pub fn from_seed(seed: &str) -> Result<Self, CheckoutError> {
        let carts = seed
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| -> Result<Cart, CheckoutError> {
                let (code, price) = entry.split_once(':').ok_or_else(|| {
                    CheckoutError::Validation(format!("cart seed entry must be code:price, got: {entry}"))
                })?;
                let price: i64 = price.trim().parse().map_err(|_| {
                    CheckoutError::Validation(format!("cart seed price is not an integer: {price}"))
                })?;
                Ok(Cart::new(CartCode::new(code)?, MoneyAmount::new(price)?))
            })
            .collect::<Result<Vec<_>, CheckoutError>>()?;
        Ok(Self::with_carts(carts))
    }

    pub async fn insert(&self, cart: Cart) {
        let mut carts = self.carts.write().await;
        carts.insert(cart.code().clone(), cart);
    }

    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.carts.read().await.is_empty()
    }
}

impl CartRepository for InMemoryCartRepository {
    fn find_by_code(
        &self,
        code: &CartCode,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Cart>, CheckoutError>> + Send + '_>> {
        let code = code.clone();
        Box::pin(async move {
            let carts = self.carts.read().await;
            Ok(carts.get(&code).cloned())
        })
    }
}
