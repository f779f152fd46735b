use crate::domain::{
    cart::{Cart, CartRepository},
    error::CheckoutError,
    id::CartCode,
};

/// Look up a cart by its public code. A missing cart is
/// [`CheckoutError::CartNotFound`]; storage failures pass through.
pub async fn resolve_cart(
    carts: &dyn CartRepository,
    code: &CartCode,
) -> Result<Cart, CheckoutError> {
    carts
        .find_by_code(code)
        .await?
        .ok_or_else(|| CheckoutError::CartNotFound(code.clone()))
}
