#![allow(dead_code)]

use chrono::NaiveDate;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storefront::domain::cart::{Cart, CartRepository};
use storefront::domain::error::CheckoutError;
use storefront::domain::id::CartCode;
use storefront::domain::money::MoneyAmount;
use storefront::domain::provider::{PaymentProcessor, TransactionOutcome};
use storefront::domain::transaction::{PaymentIntent, TransactionRequest};
use storefront::infra::in_memory::InMemoryCartRepository;
use storefront::services::transaction_service::TransactionOrchestrator;

pub const KNOWN_CART: &str = "cart-001";
pub const VALID_CPF: &str = "529.982.247-25";
pub const VALID_CNPJ: &str = "11.222.333/0001-81";
pub const VALID_CARD: &str = "4111 1111 1111 1111";

/// Fixed "today" for expiry checks.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

/// A billet request that passes every rule.
pub fn billet_request() -> TransactionRequest {
    TransactionRequest {
        cart_code: Some(KNOWN_CART.into()),
        payment_type: Some("billet".into()),
        installments: Some(serde_json::json!(1)),
        customer_name: Some("Maria Silva".into()),
        customer_email: Some("maria@example.com".into()),
        customer_mobile: Some("+55 11 98765-4321".into()),
        customer_document: Some(VALID_CPF.into()),
        billing_address: Some("Rua das Flores".into()),
        billing_number: Some("123".into()),
        billing_neighborhood: Some("Centro".into()),
        billing_city: Some("Sao Paulo".into()),
        billing_state: Some("SP".into()),
        billing_zip_code: Some("01001-000".into()),
        ..Default::default()
    }
}

/// A credit-card request that passes every rule.
pub fn credit_card_request(installments: u64) -> TransactionRequest {
    TransactionRequest {
        payment_type: Some("credit_card".into()),
        installments: Some(serde_json::json!(installments)),
        credit_card_number: Some(VALID_CARD.into()),
        credit_card_expiration: Some("12/30".into()),
        credit_card_holder_name: Some("MARIA SILVA".into()),
        credit_card_cvv: Some("123".into()),
        ..billet_request()
    }
}

pub fn known_carts() -> InMemoryCartRepository {
    InMemoryCartRepository::with_carts([Cart::new(
        CartCode::new(KNOWN_CART).unwrap(),
        MoneyAmount::new(19990).unwrap(),
    )])
}

pub fn outcome_json() -> serde_json::Value {
    serde_json::json!({
        "id": "tr_01J8ZQ",
        "status": "waiting_payment",
        "boleto_url": "https://gateway.example/boletos/tr_01J8ZQ",
    })
}

// ── Payment processor stub ─────────────────────────────────────────────────

pub enum Reply {
    Outcome(serde_json::Value),
    Fail(String),
    Hang,
}

/// Records every intent it receives and answers with a canned reply.
pub struct RecordingProcessor {
    reply: Reply,
    calls: Mutex<Vec<PaymentIntent>>,
}

impl RecordingProcessor {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn approving() -> Arc<Self> {
        Self::new(Reply::Outcome(outcome_json()))
    }

    pub fn calls(&self) -> Vec<PaymentIntent> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl PaymentProcessor for RecordingProcessor {
    fn process(
        &self,
        intent: &PaymentIntent,
    ) -> Pin<Box<dyn Future<Output = Result<TransactionOutcome, CheckoutError>> + Send + '_>> {
        self.calls.lock().unwrap().push(intent.clone());
        match &self.reply {
            Reply::Outcome(value) => {
                let value = value.clone();
                Box::pin(async move { TransactionOutcome::from_value(value) })
            }
            Reply::Fail(msg) => {
                let msg = msg.clone();
                Box::pin(async move { Err(CheckoutError::Gateway(msg)) })
            }
            Reply::Hang => Box::pin(std::future::pending()),
        }
    }
}

/// Cart storage that is always down.
pub struct UnavailableCarts;

impl CartRepository for UnavailableCarts {
    fn find_by_code(
        &self,
        _code: &CartCode,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Cart>, CheckoutError>> + Send + '_>> {
        Box::pin(async { Err(CheckoutError::Database(sqlx::Error::PoolTimedOut)) })
    }
}

/// Cart storage that never answers.
pub struct HangingCarts;

impl CartRepository for HangingCarts {
    fn find_by_code(
        &self,
        _code: &CartCode,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Cart>, CheckoutError>> + Send + '_>> {
        Box::pin(std::future::pending())
    }
}

pub fn orchestrator(
    carts: Arc<dyn CartRepository>,
    processor: Arc<RecordingProcessor>,
) -> TransactionOrchestrator {
    TransactionOrchestrator::new(carts, processor, Duration::from_secs(5))
}
