use {
    crate::domain::{
        error::CheckoutError,
        provider::{PaymentProcessor, TransactionOutcome},
        transaction::PaymentIntent,
    },
    std::{future::Future, pin::Pin, time::Duration},
};

/// Payment processor reached over HTTP.
///
/// Posts the intent as JSON to `{base_url}/transactions` and hands back the
/// gateway's JSON answer untouched.
pub struct HttpPaymentProcessor {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpPaymentProcessor {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CheckoutError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CheckoutError::Gateway(format!("client setup: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/transactions", base_url.trim_end_matches('/')),
            api_key,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PaymentProcessor for HttpPaymentProcessor {
    fn process(
        &self,
        intent: &PaymentIntent,
    ) -> Pin<Box<dyn Future<Output = Result<TransactionOutcome, CheckoutError>> + Send + '_>> {
        let intent = intent.clone();
        Box::pin(async move { self.process_inner(&intent).await })
    }
}

impl HttpPaymentProcessor {
    async fn process_inner(&self, intent: &PaymentIntent) -> Result<TransactionOutcome, CheckoutError> {
        let mut request = self.client.post(&self.endpoint).json(intent);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckoutError::Gateway(format!(
                "unexpected status {status}"
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;
        TransactionOutcome::from_value(body)
    }

    fn transport_error(&self, err: reqwest::Error) -> CheckoutError {
        if err.is_timeout() {
            CheckoutError::GatewayTimeout(self.timeout)
        } else if err.is_decode() {
            CheckoutError::Gateway(format!("unreadable response: {err}"))
        } else {
            CheckoutError::Gateway(format!("request failed: {err}"))
        }
    }
}
