//! Token mapping between the protocol layer and real phone numbers.

pub mod token_store;

pub use token_store::TokenStore;
