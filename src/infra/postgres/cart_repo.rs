use {
    crate::domain::{
        cart::{Cart, CartRepository},
        error::CheckoutError,
        id::CartCode,
        money::MoneyAmount,
    },
    sqlx::PgPool,
    std::{future::Future, pin::Pin},
};

pub struct PgCartRepository {
    pool: PgPool,
}

impl PgCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CartRepository for PgCartRepository {
    fn find_by_code(
        &self,
        code: &CartCode,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Cart>, CheckoutError>> + Send + '_>> {
        let code = code.clone();
        Box::pin(async move { self.find_by_code_inner(&code).await })
    }
}

impl PgCartRepository {
    async fn find_by_code_inner(&self, code: &CartCode) -> Result<Option<Cart>, CheckoutError> {
        let row: Option<(String, i64)> =
            sqlx::query_as("SELECT code, price FROM carts WHERE code = $1")
                .bind(code.as_str())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(code, price)| -> Result<Cart, CheckoutError> {
            // Bad rows are a storage fault, not a client error.
            let code = CartCode::new(code).map_err(decode_error)?;
            let price = MoneyAmount::new(price).map_err(decode_error)?;
            Ok(Cart::new(code, price))
        })
        .transpose()
    }
}

fn decode_error(err: CheckoutError) -> CheckoutError {
    CheckoutError::Database(sqlx::Error::Decode(err.to_string().into()))
}
