pub mod cart;
pub mod error;
pub mod id;
pub mod money;
pub mod provider;
pub mod transaction;
pub mod validation;
