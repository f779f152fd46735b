use {
    super::error::CheckoutError,
    super::id::CartCode,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Body of `POST /transactions`, exactly as the storefront sends it.
///
/// Every field is optional here; presence and format are decided by
/// [`crate::domain::validation`] so that all structural problems end up as
/// the same validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub cart_code: Option<String>,
    pub payment_type: Option<String>,
    pub installments: Option<serde_json::Value>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_mobile: Option<String>,
    pub customer_document: Option<String>,
    pub billing_address: Option<String>,
    pub billing_number: Option<String>,
    pub billing_neighborhood: Option<String>,
    pub billing_city: Option<String>,
    pub billing_state: Option<String>,
    pub billing_zip_code: Option<String>,
    pub credit_card_number: Option<String>,
    pub credit_card_expiration: Option<String>,
    pub credit_card_holder_name: Option<String>,
    pub credit_card_cvv: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    CreditCard,
    Billet,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Billet => "billet",
        }
    }

    /// Highest installment count the method accepts.
    pub fn max_installments(&self) -> u8 {
        match self {
            Self::CreditCard => 12,
            Self::Billet => 1,
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for PaymentType {
    type Error = CheckoutError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "credit_card" => Ok(Self::CreditCard),
            "billet" => Ok(Self::Billet),
            other => Err(CheckoutError::Validation(format!(
                "unknown payment type: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Installments(u8);

impl Installments {
    pub fn new(count: u64, payment_type: PaymentType) -> Result<Self, CheckoutError> {
        let max = u64::from(payment_type.max_installments());
        if count == 0 || count > max {
            return Err(CheckoutError::Validation(format!(
                "installments must be between 1 and {max} for {payment_type}, got: {count}"
            )));
        }
        // count <= 12 here
        Ok(Self(count as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Brazilian tax id, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaxDocument {
    Cpf(String),
    Cnpj(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    /// E.164, e.g. `+5511987654321`.
    pub mobile: String,
    pub document: TaxDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Billing {
    pub address: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub expiration: String,
    pub holder_name: String,
    pub cvv: String,
}

// Card data must never reach the logs.
impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last4 = self
            .number
            .get(self.number.len().saturating_sub(4)..)
            .unwrap_or("");
        f.debug_struct("CardDetails")
            .field("number", &format_args!("****{last4}"))
            .field("expiration", &self.expiration)
            .field("holder_name", &self.holder_name)
            .field("cvv", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethodDetails {
    CreditCard(CardDetails),
    Billet,
}

impl PaymentMethodDetails {
    pub fn payment_type(&self) -> PaymentType {
        match self {
            Self::CreditCard(_) => PaymentType::CreditCard,
            Self::Billet => PaymentType::Billet,
        }
    }
}

/// A request that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransaction {
    pub cart_code: CartCode,
    pub installments: Installments,
    pub customer: Customer,
    pub billing: Billing,
    pub method: PaymentMethodDetails,
}

impl ValidatedTransaction {
    pub fn payment_type(&self) -> PaymentType {
        self.method.payment_type()
    }

    pub fn into_intent(self) -> PaymentIntent {
        let payment_type = self.payment_type();
        let credit_card = match self.method {
            PaymentMethodDetails::CreditCard(card) => CreditCardBlock {
                number: card.number,
                expiration: card.expiration,
                holder_name: card.holder_name,
                cvv: card.cvv,
            },
            PaymentMethodDetails::Billet => CreditCardBlock::default(),
        };

        PaymentIntent {
            cart_code: self.cart_code,
            payment_type,
            installments: self.installments,
            customer: self.customer,
            billing: self.billing,
            credit_card,
        }
    }
}

/// Normalized structure handed to the payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub cart_code: CartCode,
    pub payment_type: PaymentType,
    pub installments: Installments,
    pub customer: Customer,
    pub billing: Billing,
    pub credit_card: CreditCardBlock,
}

/// Always present in the intent; blank for billets.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardBlock {
    pub number: String,
    pub expiration: String,
    pub holder_name: String,
    pub cvv: String,
}

impl CreditCardBlock {
    pub fn is_blank(&self) -> bool {
        self.number.is_empty()
            && self.expiration.is_empty()
            && self.holder_name.is_empty()
            && self.cvv.is_empty()
    }
}

impl fmt::Debug for CreditCardBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardBlock")
            .field("blank", &self.is_blank())
            .finish_non_exhaustive()
    }
}
