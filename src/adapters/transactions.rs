use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{
            error::CheckoutError, provider::TransactionOutcome, transaction::TransactionRequest,
        },
    },
    axum::{Json, extract::State, extract::rejection::JsonRejection},
    uuid::Uuid,
};

/// `POST /transactions`
#[tracing::instrument(
    name = "create_transaction",
    skip_all,
    fields(
        request_id = %Uuid::now_v7(),
        cart_code = tracing::field::Empty,
        payment_type = tracing::field::Empty,
    )
)]
pub async fn create_transaction_handler(
    State(state): State<AppState>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<TransactionOutcome>, ApiError> {
    // Malformed JSON is reported like any other invalid request.
    let Json(request) = payload.map_err(unreadable_body)?;

    let span = tracing::Span::current();
    if let Some(cart_code) = request.cart_code.as_deref() {
        span.record("cart_code", cart_code);
    }
    if let Some(payment_type) = request.payment_type.as_deref() {
        span.record("payment_type", payment_type);
    }

    let outcome = state.transactions.create_transaction(&request).await?;
    Ok(Json(outcome))
}

/// Maps a body rejection to a validation error.
///
/// The rejection's own text quotes the offending input (card numbers
/// included), so only the kind of failure is kept.
pub fn unreadable_body(rejection: JsonRejection) -> CheckoutError {
    let reason = match rejection {
        JsonRejection::JsonDataError(_) => "body does not match the transaction schema",
        JsonRejection::JsonSyntaxError(_) => "body is not valid JSON",
        JsonRejection::MissingJsonContentType(_) => "missing JSON content type",
        JsonRejection::BytesRejection(_) => "body could not be read",
        _ => "unreadable body",
    };
    CheckoutError::Validation(reason.to_string())
}
