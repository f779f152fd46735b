//! Validation of incoming transaction requests.
//!
//! A request either becomes a [`ValidatedTransaction`] or fails with a single
//! [`CheckoutError::Validation`]. The message names the first rule that failed
//! and is meant for logs only; callers see one generic rejection.

pub mod card;
pub mod document;
pub mod phone;

use {
    crate::domain::{
        error::CheckoutError,
        id::CartCode,
        transaction::{
            Billing, CardDetails, Customer, Installments, PaymentMethodDetails, PaymentType,
            TransactionRequest, ValidatedTransaction,
        },
    },
    chrono::{NaiveDate, Utc},
    regex::Regex,
    std::sync::LazyLock,
};

// Same grammar browsers use for <input type="email">.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("postal code pattern compiles"));

const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 40;

pub fn validate(request: &TransactionRequest) -> Result<ValidatedTransaction, CheckoutError> {
    validate_at(request, Utc::now().date_naive())
}

/// Like [`validate`], with card expiry judged against `today`.
pub fn validate_at(
    request: &TransactionRequest,
    today: NaiveDate,
) -> Result<ValidatedTransaction, CheckoutError> {
    let cart_code = CartCode::new(required("cartCode", &request.cart_code)?)?;
    let payment_type = PaymentType::try_from(required("paymentType", &request.payment_type)?)?;
    let installments = Installments::new(
        parse_installments(request.installments.as_ref())?,
        payment_type,
    )?;

    let customer = Customer {
        name: customer_name(required("customerName", &request.customer_name)?)?,
        email: email(required("customerEmail", &request.customer_email)?)?,
        mobile: phone::normalize_mobile(required("customerMobile", &request.customer_mobile)?)?,
        document: document::parse_tax_document(required(
            "customerDocument",
            &request.customer_document,
        )?)?,
    };

    let billing = Billing {
        address: required("billingAddress", &request.billing_address)?.to_string(),
        number: required("billingNumber", &request.billing_number)?.to_string(),
        neighborhood: required("billingNeighborhood", &request.billing_neighborhood)?.to_string(),
        city: required("billingCity", &request.billing_city)?.to_string(),
        state: required("billingState", &request.billing_state)?.to_string(),
        zipcode: postal_code(required("billingZipCode", &request.billing_zip_code)?)?,
    };

    let method = match payment_type {
        PaymentType::CreditCard => PaymentMethodDetails::CreditCard(CardDetails {
            number: card::compact_number(required("creditCardNumber", &request.credit_card_number)?),
            expiration: required("creditCardExpiration", &request.credit_card_expiration)?
                .to_string(),
            holder_name: required("creditCardHolderName", &request.credit_card_holder_name)?
                .to_string(),
            cvv: required("creditCardCvv", &request.credit_card_cvv)?.to_string(),
        }),
        PaymentType::Billet => {
            check_optional_card_fields(request, today)?;
            PaymentMethodDetails::Billet
        }
    };

    Ok(ValidatedTransaction {
        cart_code,
        installments,
        customer,
        billing,
        method,
    })
}

/// Trimmed value of a field that must be present and not blank.
fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str, CheckoutError> {
    present(value).ok_or_else(|| CheckoutError::Validation(format!("{field} is required")))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_installments(value: Option<&serde_json::Value>) -> Result<u64, CheckoutError> {
    let invalid = || CheckoutError::Validation("installments must be a positive integer".into());
    match value {
        None | Some(serde_json::Value::Null) => Err(CheckoutError::Validation(
            "installments is required".into(),
        )),
        Some(serde_json::Value::Number(n)) => n.as_u64().ok_or_else(invalid),
        Some(serde_json::Value::String(s)) => s.trim().parse().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

fn customer_name(name: &str) -> Result<String, CheckoutError> {
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(CheckoutError::Validation(format!(
            "customerName must be {NAME_MIN_LEN}-{NAME_MAX_LEN} characters, got: {len}"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(CheckoutError::Validation(
            "customerName may only contain letters and spaces".into(),
        ));
    }
    Ok(name.to_string())
}

fn email(email: &str) -> Result<String, CheckoutError> {
    if !EMAIL.is_match(email) {
        return Err(CheckoutError::Validation(
            "customerEmail is not a valid email".into(),
        ));
    }
    Ok(email.to_string())
}

fn postal_code(code: &str) -> Result<String, CheckoutError> {
    if !POSTAL_CODE.is_match(code) {
        return Err(CheckoutError::Validation(
            "billingZipCode must match NNNNN-NNN".into(),
        ));
    }
    Ok(code.to_string())
}

/// Billets carry no card, but card fields that were sent anyway must still
/// be well-formed.
fn check_optional_card_fields(
    request: &TransactionRequest,
    today: NaiveDate,
) -> Result<(), CheckoutError> {
    let checks: [(&str, &Option<String>, &dyn Fn(&str) -> bool); 4] = [
        ("creditCardNumber", &request.credit_card_number, &card::is_valid_number),
        (
            "creditCardExpiration",
            &request.credit_card_expiration,
            &|v: &str| card::is_valid_expiration(v, today),
        ),
        (
            "creditCardHolderName",
            &request.credit_card_holder_name,
            &card::is_valid_holder_name,
        ),
        ("creditCardCvv", &request.credit_card_cvv, &card::is_valid_cvv),
    ];

    for (field, value, is_valid) in checks {
        if let Some(value) = present(value) {
            if !is_valid(value) {
                return Err(CheckoutError::Validation(format!("{field} is malformed")));
            }
        }
    }
    Ok(())
}
