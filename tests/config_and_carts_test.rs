mod common;

use common::*;
use std::collections::HashMap;
use std::time::Duration;
use storefront::config::{Config, ConfigError};
use storefront::domain::error::CheckoutError;
use storefront::domain::id::CartCode;
use storefront::infra::in_memory::InMemoryCartRepository;
use storefront::services::cart_resolver::resolve_cart;

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

// ── Config ─────────────────────────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = config_from(&[("PAYMENT_GATEWAY_URL", "https://gateway.example")]).unwrap();

    assert_eq!(config.gateway_timeout, Duration::from_secs(10));
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
    assert!(config.database_url.is_none());
    assert!(config.gateway_api_key.is_none());
    assert_eq!(config.cart_lookup_timeout, Duration::from_secs(5));
    assert_eq!(config.request_timeout(), Duration::from_secs(20));
}

#[test]
fn config_reads_every_setting() {
    let config = config_from(&[
        ("PAYMENT_GATEWAY_URL", "https://gateway.example/1"),
        ("PAYMENT_GATEWAY_API_KEY", "sk_live_abc"),
        ("PAYMENT_TIMEOUT_SECS", "4"),
        ("CART_LOOKUP_TIMEOUT_SECS", "2"),
        ("BIND_ADDR", "127.0.0.1:8080"),
        ("DATABASE_URL", "postgres://localhost/storefront"),
        ("SEED_CARTS", "a:1"),
    ])
    .unwrap();

    assert_eq!(config.gateway_url, "https://gateway.example/1");
    assert_eq!(config.gateway_api_key.as_deref(), Some("sk_live_abc"));
    assert_eq!(config.gateway_timeout, Duration::from_secs(4));
    assert_eq!(config.cart_lookup_timeout, Duration::from_secs(2));
    assert_eq!(config.request_timeout(), Duration::from_secs(11));
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.seed_carts.as_deref(), Some("a:1"));
}

#[test]
fn config_rejects_missing_or_bad_values() {
    assert!(matches!(
        config_from(&[]),
        Err(ConfigError::Missing("PAYMENT_GATEWAY_URL"))
    ));
    assert!(matches!(
        config_from(&[("PAYMENT_GATEWAY_URL", "not a url")]),
        Err(ConfigError::Invalid { name: "PAYMENT_GATEWAY_URL", .. })
    ));
    for timeout in ["0", "-3", "ten"] {
        assert!(matches!(
            config_from(&[
                ("PAYMENT_GATEWAY_URL", "https://gateway.example"),
                ("PAYMENT_TIMEOUT_SECS", timeout),
            ]),
            Err(ConfigError::Invalid { name: "PAYMENT_TIMEOUT_SECS", .. })
        ));
    }
    assert!(matches!(
        config_from(&[
            ("PAYMENT_GATEWAY_URL", "https://gateway.example"),
            ("CART_LOOKUP_TIMEOUT_SECS", "0"),
        ]),
        Err(ConfigError::Invalid { name: "CART_LOOKUP_TIMEOUT_SECS", .. })
    ));
    assert!(matches!(
        config_from(&[
            ("PAYMENT_GATEWAY_URL", "https://gateway.example"),
            ("BIND_ADDR", "localhost"),
        ]),
        Err(ConfigError::Invalid { name: "BIND_ADDR", .. })
    ));
}

// ── Cart resolution ────────────────────────────────────────────────────────

#[tokio::test]
async fn resolve_cart_finds_existing_cart() {
    let carts = known_carts();
    let cart = resolve_cart(&carts, &CartCode::new(KNOWN_CART).unwrap())
        .await
        .unwrap();
    assert_eq!(cart.code().as_str(), KNOWN_CART);
    assert_eq!(cart.price().cents(), 19990);
    assert_eq!(cart.price().to_string(), "199.90");
}

#[tokio::test]
async fn resolve_cart_reports_absence() {
    let carts = known_carts();
    let err = resolve_cart(&carts, &CartCode::new("cart-999").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, CheckoutError::CartNotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn seed_builds_in_memory_carts() {
    let carts = InMemoryCartRepository::from_seed(" cart-1:19990, cart-2:500 ,").unwrap();
    assert_eq!(carts.len().await, 2);

    let cart = resolve_cart(&carts, &CartCode::new("cart-2").unwrap())
        .await
        .unwrap();
    assert_eq!(cart.price().cents(), 500);

    assert!(InMemoryCartRepository::from_seed("").unwrap().is_empty().await);
}

#[test]
fn malformed_seed_is_rejected() {
    for seed in ["cart-1", "cart-1:abc", "cart-1:-5", ":100"] {
        assert!(InMemoryCartRepository::from_seed(seed).is_err(), "{seed}");
    }
}
