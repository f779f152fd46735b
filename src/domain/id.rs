use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::CheckoutError;

/// Public cart code, assigned when the cart is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartCode(String);

impl CartCode {
    pub fn new(code: impl Into<String>) -> Result<Self, CheckoutError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(CheckoutError::Validation(
                "CartCode cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
