use {
    super::error::CheckoutError,
    super::transaction::PaymentIntent,
    serde::Serialize,
    std::{future::Future, pin::Pin},
};

/// What the payment processor answered for one intent.
///
/// The payload is kept as the processor sent it; it is returned to the
/// caller verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransactionOutcome(serde_json::Value);

impl TransactionOutcome {
    /// Accepts any JSON object carrying a string `status`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CheckoutError> {
        match value.get("status") {
            Some(serde_json::Value::String(_)) => Ok(Self(value)),
            _ => Err(CheckoutError::Gateway(
                "malformed response: expected an object with a string `status`".into(),
            )),
        }
    }

    pub fn status(&self) -> &str {
        self.0
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }

    /// Processor-assigned reference (`id`, falling back to `reference`).
    pub fn reference(&self) -> Option<String> {
        ["id", "reference"].iter().find_map(|key| match self.0.get(*key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

pub trait PaymentProcessor: Send + Sync {
    fn process(
        &self,
        intent: &PaymentIntent,
    ) -> Pin<Box<dyn Future<Output = Result<TransactionOutcome, CheckoutError>> + Send + '_>>;
}
