pub mod cart_resolver;
pub mod transaction_service;
