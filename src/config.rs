use {
    std::{env, net::SocketAddr, time::Duration},
    thiserror::Error,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CART_LOOKUP_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Service settings, read from the environment (and `.env` via dotenvy).
#[derive(Clone)]
pub struct Config {
    /// Cart storage. Without it carts come from `seed_carts`.
    pub database_url: Option<String>,
    pub gateway_url: String,
    pub gateway_api_key: Option<String>,
    pub gateway_timeout: Duration,
    pub cart_lookup_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub seed_carts: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gateway_url = get("PAYMENT_GATEWAY_URL").ok_or(ConfigError::Missing("PAYMENT_GATEWAY_URL"))?;
        reqwest::Url::parse(&gateway_url).map_err(|e| ConfigError::Invalid {
            name: "PAYMENT_GATEWAY_URL",
            reason: e.to_string(),
        })?;

        let gateway_timeout = positive_secs(
            "PAYMENT_TIMEOUT_SECS",
            get("PAYMENT_TIMEOUT_SECS"),
            DEFAULT_GATEWAY_TIMEOUT_SECS,
        )?;
        let cart_lookup_timeout = positive_secs(
            "CART_LOOKUP_TIMEOUT_SECS",
            get("CART_LOOKUP_TIMEOUT_SECS"),
            DEFAULT_CART_LOOKUP_TIMEOUT_SECS,
        )?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: get("DATABASE_URL"),
            gateway_url,
            gateway_api_key: get("PAYMENT_GATEWAY_API_KEY"),
            gateway_timeout,
            cart_lookup_timeout,
            bind_addr,
            seed_carts: get("SEED_CARTS"),
        })
    }

    /// Whole-request budget. Both collaborator calls expire before it does,
    /// so it only catches time spent outside them.
    pub fn request_timeout(&self) -> Duration {
        self.cart_lookup_timeout + self.gateway_timeout + Duration::from_secs(5)
    }
}

fn positive_secs(
    name: &'static str,
    raw: Option<String>,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(default));
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a positive number of seconds, got: {raw}"),
        }),
    }
}
